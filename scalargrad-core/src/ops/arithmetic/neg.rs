use crate::ops::arithmetic::mul_scalar_op;
use crate::value::Value;

/// Negates a value, built as `a * -1`.
pub fn neg_op(a: &Value) -> Value {
    mul_scalar_op(a, -1.0)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
