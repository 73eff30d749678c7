// src/optim/mod.rs

//! Optimizers for training models built from scalar values.
//!
//! An optimizer holds handles to parameter leaves and rewrites their data in
//! place from the gradients left by the last `backward()` call.

pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
