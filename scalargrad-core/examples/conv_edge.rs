//! # Learning a vertical edge detector with `Conv2d`
//!
//! A single 2x2 filter is trained so that its response on a 4x4 image with a
//! vertical edge matches a hand-written target map. Afterwards every filter
//! weight is printed with its gradient from the last step.
//!
//! Run with:
//! `RUST_LOG=trace cargo run --example conv_edge`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::losses::MseLoss;
use scalargrad_core::nn::{Conv2d, Module};
use scalargrad_core::optim::{Optimizer, SgdOptimizer};
use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let image = [
        [0.0, 0.0, 1.0, 1.0],
        [0.0, 0.0, 1.0, 1.0],
        [0.0, 0.0, 1.0, 1.0],
        [0.0, 0.0, 1.0, 1.0],
    ];
    // Strong response only where the window straddles the edge.
    let target = [0.0, 0.9, 0.0, 0.0, 0.9, 0.0, 0.0, 0.9, 0.0];

    let mut rng = StdRng::seed_from_u64(7);
    let conv = Conv2d::new(4, 4, 2, 1, "edge", &mut rng)?;
    let loss_fn = MseLoss::default();
    let mut optimizer = SgdOptimizer::new(conv.parameters(), 0.5);

    for step in 0..300 {
        let x: Vec<Vec<Value>> = image
            .iter()
            .map(|row| row.iter().map(|&v| Value::new(v)).collect())
            .collect();
        let out = conv.forward(&x)?;
        let loss = loss_fn.calculate(&out[0], &target)?;

        optimizer.zero_grad();
        loss.backward();
        if step % 50 == 0 {
            println!("step {:>3}  loss {:.6}", step, loss.data());
        }
        optimizer.step()?;
    }

    for (name, p) in conv.named_parameters() {
        println!("{:<14} data {:+.4}  grad {:+.6}", name, p.data(), p.grad());
    }
    Ok(())
}
