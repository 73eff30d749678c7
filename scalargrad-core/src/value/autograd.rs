// src/value/autograd.rs

use crate::autograd::graph::topological_sort;
use crate::value::Value;

impl Value {
    /// Returns the accumulated gradient.
    ///
    /// Meaningful only after `backward()` ran on a root that depends on this node.
    pub fn grad(&self) -> f64 {
        self.node.grad.get()
    }

    /// Resets the gradient of this node to exactly `0.0`.
    pub fn zero_grad(&self) {
        self.node.grad.set(0.0);
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.node.grad.set(grad);
    }

    /// Adds `contribution` to the gradient. Used by the local gradient rules.
    pub(crate) fn accumulate_grad(&self, contribution: f64) {
        let grad = &self.node.grad;
        grad.set(grad.get() + contribution);
    }

    /// Computes d(self)/d(node) for every node this value was computed from.
    ///
    /// The ancestors are sorted topologically, `self.grad` is set to `1.0` and
    /// every node's local rule then runs exactly once, consumers before the
    /// nodes they consume, so a node shared by several paths receives the sum
    /// of all of them.
    ///
    /// Nothing is zeroed: the gradients of all other nodes keep what they held
    /// and grow by this pass's contributions. Calling `backward()` twice on the
    /// same graph therefore accumulates; reset parameters with `zero_grad`
    /// between training steps.
    pub fn backward(&self) {
        let sorted = topological_sort(self);
        self.set_grad(1.0);

        if self.is_leaf() {
            log::debug!("backward() called on a leaf value. No operation to perform.");
            return;
        }

        for node in sorted.iter().rev() {
            node.op().backward(node.data(), node.grad());
        }
        log::debug!("backward() propagated through {} nodes", sorted.len());
    }
}
