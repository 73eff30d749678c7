use crate::value::Value;

/// Checks that a value's data is within `tolerance` of `expected`.
/// Panics with the offending numbers otherwise.
pub fn check_value_near(actual: &Value, expected: f64, tolerance: f64) {
    let diff = (actual.data() - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Data mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.data(),
            expected,
            diff,
            tolerance
        );
    }
}

/// Checks every gradient in `values` against `expected`, element by element.
pub fn check_grads_near(values: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(values.len(), expected.len(), "Gradient count mismatch");

    for (i, (v, e)) in values.iter().zip(expected.iter()).enumerate() {
        let diff = (v.grad() - *e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                v.grad(),
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Builds leaves from raw numbers.
pub fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}
