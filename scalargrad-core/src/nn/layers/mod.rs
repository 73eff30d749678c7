// src/nn/layers/mod.rs
// Layers built from scalar values: dense neurons and 2-D convolution.

pub mod conv2d;
pub mod layer;
pub mod neuron;

// Re-export key layer structs
pub use conv2d::Conv2d;
pub use layer::Layer;
pub use neuron::Neuron;
