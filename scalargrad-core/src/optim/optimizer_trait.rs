use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// # Errors
    /// `NonLeafMutation` if one of the managed values is not a leaf.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// This is typically called before the backward pass in a new training iteration,
    /// since `backward()` accumulates.
    fn zero_grad(&mut self);

    /// The learning rate used by the next `step`.
    fn lr(&self) -> f64;

    fn set_lr(&mut self, lr: f64);
}
