use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::init::randn_value;
use crate::nn::module::Module;
use crate::value::Value;

/// A single tanh unit: `tanh(w . x + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    label: String,
}

impl Neuron {
    /// Creates a neuron with `nin` weights and one bias, each drawn from N(0, 1).
    ///
    /// Parameters are labelled `{label}:weight_{i}` and `{label}:bias`.
    pub fn new<R: Rng + ?Sized>(nin: usize, label: impl Into<String>, rng: &mut R) -> Self {
        let label = label.into();
        let weights = (0..nin)
            .map(|i| randn_value(rng, 1.0, format!("{}:weight_{}", label, i)))
            .collect();
        let bias = randn_value(rng, 1.0, format!("{}:bias", label));
        Neuron {
            weights,
            bias,
            label,
        }
    }

    /// Builds a neuron around existing leaves, e.g. for a deterministic setup.
    pub fn from_parameters(weights: Vec<Value>, bias: Value, label: impl Into<String>) -> Self {
        Neuron {
            weights,
            bias,
            label: label.into(),
        }
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Module for Neuron {
    type Input = [Value];
    type Output = Value;

    fn forward(&self, input: &[Value]) -> Result<Value, ScalarGradError> {
        if input.len() != self.weights.len() {
            return Err(ScalarGradError::InputLengthMismatch {
                expected: self.weights.len(),
                actual: input.len(),
                operation: format!("Neuron({})::forward", self.label),
            });
        }
        let mut sum = Value::new(0.0);
        for (w, x) in self.weights.iter().zip(input) {
            sum += w * x;
        }
        sum += &self.bias;
        Ok(sum.tanh())
    }

    /// `[bias, weight_0, weight_1, ...]`
    fn parameters(&self) -> Vec<Value> {
        std::iter::once(&self.bias)
            .chain(self.weights.iter())
            .cloned()
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        std::iter::once(("bias".to_string(), self.bias.clone()))
            .chain(
                self.weights
                    .iter()
                    .enumerate()
                    .map(|(i, w)| (format!("weight_{}", i), w.clone())),
            )
            .collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
