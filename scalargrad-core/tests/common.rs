use scalargrad_core::Value;

// Each integration test file compiles this module separately.
#[allow(dead_code)]
pub fn leaf(data: f64, label: &str) -> Value {
    Value::with_label(data, label)
}

/// `(e^x - 1) / (e^x + 1)`, the forward formula of the tanh op.
#[allow(dead_code)]
pub fn exp_tanh(x: f64) -> f64 {
    (x.exp() - 1.0) / (x.exp() + 1.0)
}
