// src/nn/losses/mse.rs

use std::str::FromStr;

use crate::error::ScalarGradError;
use crate::value::Value;

/// Specifies the reduction to apply to the summed squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Mean squared error between predictions and plain `f64` targets.
///
/// The loss is built from the primitive ops (`sub`, `pow(2)`, `add`, and a
/// scalar `div` for `Mean`), so calling `backward()` on it reaches every
/// parameter the predictions depend on.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Computes the loss node.
    ///
    /// An empty prediction list yields a fresh `0.0` leaf.
    ///
    /// # Errors
    /// `InputLengthMismatch` if `predictions` and `targets` differ in length.
    pub fn calculate(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::InputLengthMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                operation: "MseLoss::calculate".to_string(),
            });
        }
        let total: Value = predictions
            .iter()
            .zip(targets)
            .map(|(pred, &target)| (pred - target).pow(2.0))
            .sum();
        Ok(match self.reduction {
            Reduction::Mean if !predictions.is_empty() => total / predictions.len() as f64,
            _ => total,
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
