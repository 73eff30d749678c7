use crate::autograd::Op;
use crate::value::Value;

/// Adds two values.
///
/// Forward: `a + b`. Backward: both operands receive the output gradient unchanged.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() + b.data(), Op::Add([a.clone(), b.clone()]))
}

/// `a + rhs` with `rhs` promoted to a fresh leaf.
pub fn add_scalar_op(a: &Value, rhs: f64) -> Value {
    add_op(a, &Value::from(rhs))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
