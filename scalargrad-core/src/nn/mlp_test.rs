use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_mlp_parameter_count() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(0);
    let mlp = Mlp::new(2, &[3, 1], &mut rng)?;
    // 3 * (2 + 1) + 1 * (3 + 1)
    assert_eq!(mlp.parameters().len(), 13);
    assert_eq!(mlp.num_parameters(), 13);
    assert_eq!(mlp.layers().len(), 2);

    let named = mlp.named_parameters();
    assert_eq!(named[0].0, "layer_0.neuron_0.bias");
    assert_eq!(named[12].0, "layer_1.neuron_0.weight_2");
    Ok(())
}

#[test]
fn test_mlp_empty_sizes_is_error() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        Mlp::new(2, &[], &mut rng).unwrap_err(),
        ScalarGradError::EmptyLayerSizes
    );
}

#[test]
fn test_mlp_forward_chains_layers() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(9);
    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng)?;
    let x: Vec<Value> = [2.0, 3.0, -1.0].iter().map(|&v| Value::new(v)).collect();
    let out = mlp.forward(&x)?;
    assert_eq!(out.len(), 1);

    let mut manual = x.clone();
    for layer in mlp.layers() {
        manual = layer.forward(&manual)?;
    }
    assert_eq!(out[0].data(), manual[0].data());
    assert!(out[0].data().abs() <= 1.0);
    Ok(())
}

#[test]
fn test_mlp_forward_is_idempotent() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(4);
    let mlp = Mlp::new(2, &[3, 1], &mut rng)?;
    let x = vec![Value::new(0.5), Value::new(-0.5)];
    let a = mlp.forward(&x)?;
    let b = mlp.forward(&x)?;
    assert_eq!(a[0].data(), b[0].data());
    assert!(!a[0].ptr_eq(&b[0]));
    Ok(())
}

#[test]
fn test_mlp_backward_and_zero_grad() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(6);
    let mlp = Mlp::new(2, &[3, 1], &mut rng)?;
    let out = mlp.forward(&[Value::new(1.0), Value::new(-2.0)])?;
    out[0].backward();
    assert!(mlp.parameters().iter().any(|p| p.grad() != 0.0));

    mlp.zero_grad();
    assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}

#[test]
fn test_mlp_rejects_wrong_input_length() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(6);
    let mlp = Mlp::new(2, &[3, 1], &mut rng)?;
    assert!(mlp.forward(&[Value::new(1.0)]).is_err());
    Ok(())
}
