//! # Training a small MLP on XOR
//!
//! Builds a `2 -> 4 -> 1` tanh perceptron from scalar values, then runs a
//! manual training loop: forward, MSE loss, `zero_grad`, `backward`, SGD step.
//!
//! Run with:
//! `RUST_LOG=debug cargo run --example xor_mlp`

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::losses::{MseLoss, Reduction};
use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::optim::{Optimizer, SgdOptimizer};
use scalargrad_core::{ScalarGradError, Value};

const EPOCHS: usize = 200;
const LEARNING_RATE: f64 = 0.05;
const SEED: u64 = 42;

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let inputs = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
    let targets = [-1.0, 1.0, 1.0, -1.0];

    let mut rng = StdRng::seed_from_u64(SEED);
    let model = Mlp::new(2, &[4, 1], &mut rng)?;
    let loss_fn = MseLoss::new(Reduction::Mean);
    let mut optimizer = SgdOptimizer::with_options(model.parameters(), LEARNING_RATE, 0.9, 0.0);
    info!("model has {} parameters", model.num_parameters());

    for epoch in 0..EPOCHS {
        let mut predictions = Vec::with_capacity(inputs.len());
        for x in &inputs {
            let x: Vec<Value> = x.iter().map(|&v| Value::new(v)).collect();
            predictions.extend(model.forward(&x)?);
        }
        let loss = loss_fn.calculate(&predictions, &targets)?;

        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;

        if epoch % 20 == 0 || epoch == EPOCHS - 1 {
            println!("epoch {:>4}  loss {:.6}", epoch, loss.data());
        }
    }

    for (x, target) in inputs.iter().zip(&targets) {
        let xv: Vec<Value> = x.iter().map(|&v| Value::new(v)).collect();
        let out = model.forward(&xv)?;
        println!("{:?} -> {:+.4} (target {:+})", x, out[0].data(), target);
    }
    Ok(())
}
