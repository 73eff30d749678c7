use super::*;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_exp_forward_backward() {
    let a = Value::new(1.0);
    let c = exp_op(&a);
    assert_relative_eq!(c.data(), std::f64::consts::E);
    assert_eq!(c.op().symbol(), "exp");
    c.backward();
    assert_relative_eq!(a.grad(), std::f64::consts::E);
}

#[test]
fn test_exp_chain() {
    // d/dx e^(2x) = 2 e^(2x)
    let x = Value::new(0.5);
    let y = exp_op(&(&x * 2.0));
    y.backward();
    assert_relative_eq!(x.grad(), 2.0 * 1.0f64.exp(), epsilon = 1e-12);
}
