// src/nn/mod.rs
// Neural network building blocks consuming the scalar engine.

pub mod init;
pub mod layers;
pub mod losses;
pub mod mlp;
pub mod module; // Trait Module

// Re-export common items
pub use layers::{Conv2d, Layer, Neuron};
pub use losses::MseLoss;
pub use mlp::Mlp;
pub use module::Module;
