use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Same formula as the tanh op.
fn expected_tanh(x: f64) -> f64 {
    (x.exp() - 1.0) / (x.exp() + 1.0)
}

fn fixed_neuron() -> Neuron {
    Neuron::from_parameters(
        vec![Value::new(0.5), Value::new(-1.0)],
        Value::new(0.25),
        "n",
    )
}

#[test]
fn test_neuron_new_labels_and_order() {
    let mut rng = StdRng::seed_from_u64(0);
    let n = Neuron::new(3, "neuron_0", &mut rng);
    assert_eq!(n.nin(), 3);

    let params = n.parameters();
    assert_eq!(params.len(), 4);
    assert_eq!(params[0].label(), "neuron_0:bias");
    assert_eq!(params[1].label(), "neuron_0:weight_0");
    assert_eq!(params[3].label(), "neuron_0:weight_2");
    assert!(params.iter().all(|p| p.is_leaf() && p.data().is_finite()));
    assert!(params[0].ptr_eq(n.bias()));
}

#[test]
fn test_neuron_seeded_init_is_reproducible() {
    let a = Neuron::new(4, "n", &mut StdRng::seed_from_u64(11));
    let b = Neuron::new(4, "n", &mut StdRng::seed_from_u64(11));
    let da: Vec<f64> = a.parameters().iter().map(Value::data).collect();
    let db: Vec<f64> = b.parameters().iter().map(Value::data).collect();
    assert_eq!(da, db);
}

#[test]
fn test_neuron_forward_value() -> Result<(), ScalarGradError> {
    let n = fixed_neuron();
    let out = n.forward(&[Value::new(2.0), Value::new(0.5)])?;
    // 0.5*2 - 1*0.5 + 0.25 = 0.75
    assert_relative_eq!(out.data(), expected_tanh(0.75), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_neuron_backward_reaches_parameters() -> Result<(), ScalarGradError> {
    let n = fixed_neuron();
    let x = vec![Value::new(2.0), Value::new(0.5)];
    let out = n.forward(&x)?;
    out.backward();

    let local = 1.0 - out.data() * out.data();
    assert_relative_eq!(n.bias().grad(), local, epsilon = 1e-12);
    assert_relative_eq!(n.weights()[0].grad(), 2.0 * local, epsilon = 1e-12);
    assert_relative_eq!(n.weights()[1].grad(), 0.5 * local, epsilon = 1e-12);
    assert_relative_eq!(x[1].grad(), -1.0 * local, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_neuron_rejects_wrong_input_length() {
    let n = fixed_neuron();
    let err = n.forward(&[Value::new(1.0)]).unwrap_err();
    assert!(matches!(
        err,
        ScalarGradError::InputLengthMismatch { expected: 2, actual: 1, .. }
    ));
}

#[test]
fn test_neuron_zero_grad() -> Result<(), ScalarGradError> {
    let n = fixed_neuron();
    n.forward(&[Value::new(2.0), Value::new(0.5)])?.backward();
    n.zero_grad();
    assert!(n.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}

#[test]
fn test_neuron_named_parameters() {
    let names: Vec<String> = fixed_neuron()
        .named_parameters()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["bias", "weight_0", "weight_1"]);
}
