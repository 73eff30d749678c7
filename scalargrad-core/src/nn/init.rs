//! Parameter initialization.
//!
//! Gaussian samples come from the Box–Muller transform over two independent
//! uniform draws. The random source is always passed in, so seeding a
//! `rand::rngs::StdRng` makes a whole model reproducible.

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::{Distribution, OpenClosed01, Standard};

use crate::error::ScalarGradError;
use crate::value::Value;

/// Standard normal distribution sampled with the Box–Muller transform.
///
/// `u` is drawn from `(0, 1]` so `ln(u)` stays finite, `v` from `[0, 1)`;
/// the sample is `sqrt(-2 ln u) * cos(2 pi v)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxMuller;

impl Distribution<f64> for BoxMuller {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = OpenClosed01.sample(rng);
        let v: f64 = Standard.sample(rng);
        (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
    }
}

/// Draws one standard normal sample.
pub fn randn<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    BoxMuller.sample(rng)
}

/// Creates a labelled leaf holding `scale * N(0, 1)`.
pub fn randn_value<R: Rng + ?Sized>(rng: &mut R, scale: f64, label: impl Into<String>) -> Value {
    Value::with_label(randn(rng) * scale, label)
}

/// Redraws the data of every parameter from `N(0, std^2)`, in place.
///
/// # Errors
/// Returns `ScalarGradError::NonLeafMutation` if a non-leaf value is passed.
pub fn normal_<R: Rng + ?Sized>(
    params: &[Value],
    std: f64,
    rng: &mut R,
) -> Result<(), ScalarGradError> {
    for param in params {
        param.set_data(randn(rng) * std)?;
    }
    Ok(())
}

/// Fills the data of every parameter with the scalar value 0, in place.
pub fn zeros_(params: &[Value]) -> Result<(), ScalarGradError> {
    fill_(params, 0.0)
}

/// Fills the data of every parameter with `value`, in place.
pub fn fill_(params: &[Value], value: f64) -> Result<(), ScalarGradError> {
    for param in params {
        param.set_data(value)?;
    }
    Ok(())
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
