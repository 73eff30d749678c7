use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Subtracts `b` from `a`, built as `a + (b * -1)`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

/// `a - rhs`: the literal is negated first, then promoted, so the graph is a
/// single `add` against the leaf `-rhs`.
pub fn sub_scalar_op(a: &Value, rhs: f64) -> Value {
    add_op(a, &Value::from(-rhs))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
