use super::*;
use crate::value::Value;
use approx::assert_abs_diff_eq;

fn formula(x: f64) -> f64 {
    (x.exp() - 1.0) / (x.exp() + 1.0)
}

#[test]
fn test_tanh_forward_matches_exponential_formula() {
    let a = Value::new(2.0);
    let c = tanh_op(&a);
    assert_abs_diff_eq!(c.data(), formula(2.0), epsilon = 1e-6);
    assert_eq!(c.op().symbol(), "tanh");
}

#[test]
fn test_tanh_backward_uses_output() {
    let a = Value::new(0.7);
    let c = tanh_op(&a);
    c.backward();
    let y = formula(0.7);
    assert_abs_diff_eq!(a.grad(), 1.0 - y * y, epsilon = 1e-12);
}

#[test]
fn test_tanh_at_zero() {
    let a = Value::new(0.0);
    let c = tanh_op(&a);
    assert_eq!(c.data(), 0.0);
    c.backward();
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_tanh_large_input_overflows_to_nan() {
    let a = Value::new(1000.0);
    let c = tanh_op(&a);
    assert!(c.data().is_nan());
}
