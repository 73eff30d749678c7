use crate::autograd::Op;
use crate::value::Value;

/// Squashing activation computed as `(e^x - 1) / (e^x + 1)`.
///
/// The forward value comes from this exact expression, not from `f64::tanh`, and
/// the backward rule is `x.grad += (1 - y^2) * g` with `y` that forward value.
/// For inputs above roughly 709, `e^x` overflows and the result is `inf / inf = NaN`.
pub fn tanh_op(x: &Value) -> Value {
    let e = x.data().exp();
    Value::from_op((e - 1.0) / (e + 1.0), Op::Tanh(x.clone()))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
