use super::*;
use crate::value::Value;

fn position(sorted: &[Value], v: &Value) -> usize {
    sorted
        .iter()
        .position(|n| n.ptr_eq(v))
        .expect("node missing from topological order")
}

#[test]
fn test_leaf_sorts_to_itself() {
    let a = Value::new(1.0);
    let sorted = topological_sort(&a);
    assert_eq!(sorted.len(), 1);
    assert!(sorted[0].ptr_eq(&a));
}

#[test]
fn test_operands_precede_results() {
    let x = Value::new(2.0);
    let y = Value::new(3.0);
    let xy = &x * &y;
    let z = &xy + &x;
    let sorted = topological_sort(&z);

    assert_eq!(sorted.len(), 4);
    assert!(sorted.last().map_or(false, |n| n.ptr_eq(&z)));
    assert!(position(&sorted, &x) < position(&sorted, &xy));
    assert!(position(&sorted, &y) < position(&sorted, &xy));
    assert!(position(&sorted, &xy) < position(&sorted, &z));
}

#[test]
fn test_shared_node_listed_once() {
    let w = Value::new(0.5);
    let branch_a = &w * 2.0;
    let branch_b = &w * 3.0;
    let root = &branch_a + &branch_b;
    let sorted = topological_sort(&root);
    let occurrences = sorted.iter().filter(|n| n.ptr_eq(&w)).count();
    assert_eq!(occurrences, 1);
    // w, 2.0, a, 3.0, b, root
    assert_eq!(sorted.len(), 6);
}

#[test]
fn test_equal_values_stay_distinct() {
    let a = Value::new(1.0);
    let b = Value::new(1.0);
    let c = &a + &b;
    let sorted = topological_sort(&c);
    assert_eq!(sorted.len(), 3);
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let x = Value::new(0.0);
    let mut acc = x.clone();
    for _ in 0..50_000 {
        acc = &acc + 1.0;
    }
    let sorted = topological_sort(&acc);
    // each step adds the result and its literal
    assert_eq!(sorted.len(), 1 + 2 * 50_000);
    assert!(sorted[0].ptr_eq(&x));
}
