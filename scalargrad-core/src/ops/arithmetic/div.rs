use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Divides `a` by `b`, built as `a * b^-1`.
///
/// Dividing by a zero-valued node is not an error: the result follows IEEE-754
/// (`inf` or `NaN`) and propagates like any other float.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

/// `a / rhs` with `rhs` promoted to a fresh leaf before the reciprocal.
pub fn div_scalar_op(a: &Value, rhs: f64) -> Value {
    div_op(a, &Value::from(rhs))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
