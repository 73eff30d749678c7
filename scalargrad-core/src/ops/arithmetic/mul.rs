use crate::autograd::Op;
use crate::value::Value;

// --- Forward Operation ---

/// Multiplies two values.
///
/// Forward: `a * b`. Backward: `a.grad += b * g`, `b.grad += a * g`, where `g` is the
/// gradient of the product. Using the same node twice (`a * a`) yields `2 * a * g`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() * b.data(), Op::Mul([a.clone(), b.clone()]))
}

/// `a * rhs` with `rhs` promoted to a fresh leaf.
pub fn mul_scalar_op(a: &Value, rhs: f64) -> Value {
    mul_op(a, &Value::from(rhs))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
