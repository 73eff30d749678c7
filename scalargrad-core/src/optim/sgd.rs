use crate::error::ScalarGradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// For every parameter `p` with gradient `g`:
///
/// ```text
/// d = g + weight_decay * p
/// v = momentum * v + d          (only when momentum != 0)
/// p = p - lr * v                (or p - lr * d without momentum)
/// ```
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    // One velocity per parameter, allocated on the first step that needs it.
    momentum_buffers: Option<Vec<f64>>,
}

impl SgdOptimizer {
    /// Plain gradient descent: `p -= lr * p.grad`.
    pub fn new(params: impl IntoIterator<Item = Value>, lr: f64) -> Self {
        Self::with_options(params, lr, 0.0, 0.0)
    }

    /// * `momentum`: Momentum factor (0.0 disables it).
    /// * `weight_decay`: L2 penalty factor added to each gradient.
    pub fn with_options(
        params: impl IntoIterator<Item = Value>,
        lr: f64,
        momentum: f64,
        weight_decay: f64,
    ) -> Self {
        SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
            momentum,
            weight_decay,
            momentum_buffers: None,
        }
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        let lr = self.lr;
        let weight_decay = self.weight_decay;
        let momentum = self.momentum;
        let num_params = self.params.len();

        let mut buffers = if momentum != 0.0 {
            Some(
                self.momentum_buffers
                    .get_or_insert_with(|| vec![0.0; num_params]),
            )
        } else {
            None
        };

        for (i, param) in self.params.iter().enumerate() {
            let mut d_p = param.grad();
            if weight_decay != 0.0 {
                d_p += weight_decay * param.data();
            }
            if let Some(buf) = buffers.as_deref_mut() {
                buf[i] = momentum * buf[i] + d_p;
                d_p = buf[i];
            }
            param.update_data(|p| p - lr * d_p)?;
            log::trace!("sgd: {} <- {}", param.label(), param.data());
        }

        log::debug!("sgd: updated {} parameters (lr = {})", num_params, lr);
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn lr(&self) -> f64 {
        self.lr
    }

    fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
