use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;

/// A fully connected layer of `nout` independent neurons over the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    nin: usize,
}

impl Layer {
    /// Creates `nout` neurons of `nin` inputs each, labelled `neuron_{i}`.
    pub fn new<R: Rng + ?Sized>(nin: usize, nout: usize, rng: &mut R) -> Self {
        let neurons = (0..nout)
            .map(|i| Neuron::new(nin, format!("neuron_{}", i), rng))
            .collect();
        Layer { neurons, nin }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    type Input = [Value];
    type Output = Vec<Value>;

    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if input.len() != self.nin {
            return Err(ScalarGradError::InputLengthMismatch {
                expected: self.nin,
                actual: input.len(),
                operation: "Layer::forward".to_string(),
            });
        }
        self.neurons.iter().map(|n| n.forward(input)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .flat_map(|n| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("{}.{}", n.label(), name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
