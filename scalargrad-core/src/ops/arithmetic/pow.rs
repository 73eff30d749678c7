use crate::autograd::Op;
use crate::value::Value;

/// Raises `base` to a constant power.
///
/// The exponent is a plain number fixed when the graph is built; only the base is
/// differentiated: `base.grad += n * base^(n-1) * g`.
/// A negative base with a fractional exponent yields `NaN`, as `f64::powf` does.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    Value::from_op(base.data().powf(exponent), Op::Pow(base.clone(), exponent))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
