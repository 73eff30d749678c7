use super::*;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_sub_forward() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = sub_op(&a, &b);
    assert_eq!(c.data(), -1.0);
    // a + (b * -1)
    assert_eq!(c.op().symbol(), "+");
    assert_eq!(c.operands()[1].op().symbol(), "*");
}

#[test]
fn test_sub_backward() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = sub_op(&a, &b);
    c.backward();
    assert_relative_eq!(a.grad(), 1.0);
    assert_relative_eq!(b.grad(), -1.0);
}

#[test]
fn test_sub_scalar_adds_negated_literal() {
    let a = Value::new(2.0);
    let c = sub_scalar_op(&a, 3.0);
    assert_eq!(c.data(), -1.0);
    assert_eq!(c.op().symbol(), "+");
    assert_eq!(c.operands()[1].data(), -3.0);
    assert!(c.operands()[1].is_leaf());
}
