use crate::autograd::Op;
use crate::value::Value;

/// Computes `e^a`. The local derivative is the output itself.
pub fn exp_op(a: &Value) -> Value {
    Value::from_op(a.data().exp(), Op::Exp(a.clone()))
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
