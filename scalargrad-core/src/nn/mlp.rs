use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::value::Value;

/// Multi-layer perceptron: a chain of fully connected tanh layers.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates layers `nin -> sizes[0] -> sizes[1] -> ...`.
    ///
    /// # Errors
    /// `EmptyLayerSizes` if `sizes` is empty.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if sizes.is_empty() {
            return Err(ScalarGradError::EmptyLayerSizes);
        }
        let mut layers = Vec::with_capacity(sizes.len());
        let mut fan_in = nin;
        for &nout in sizes {
            layers.push(Layer::new(fan_in, nout, rng));
            fan_in = nout;
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    type Input = [Value];
    type Output = Vec<Value>;

    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut activations = input.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| {
                l.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layer_{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
