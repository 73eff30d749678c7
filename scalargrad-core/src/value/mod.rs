// src/value/mod.rs

//! The `Value` handle: one scalar vertex of the computation graph.

use std::rc::Rc;

use crate::autograd::graph::NodeId;
use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::value_data::ValueData;

mod arithmetic;
mod autograd;
mod debug;

/// A scalar node in the dynamically built computation graph.
///
/// `Value` is a thin wrapper around `Rc<ValueData>`: cloning it clones the
/// handle, not the node, so a clone is the *same* graph vertex. Every result
/// produced by an operation keeps clones of its operands, which is how one node
/// ends up shared by several consumers.
///
/// Graph identity is pointer identity. Two nodes carrying the same number are
/// still two distinct vertices.
pub struct Value {
    pub(crate) node: Rc<ValueData>,
}

impl Value {
    /// Creates a leaf node (no operands, zero gradient).
    pub fn new(data: f64) -> Self {
        Self::with_label(data, String::new())
    }

    /// Creates a leaf node carrying a diagnostic label, e.g. `"neuron_0:weight_1"`.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        Value {
            node: Rc::new(ValueData::new(data, Op::Leaf, label.into())),
        }
    }

    /// Creates the result node of an operation.
    pub(crate) fn from_op(data: f64, op: Op) -> Self {
        Value {
            node: Rc::new(ValueData::new(data, op, String::new())),
        }
    }

    /// Returns the forward value.
    pub fn data(&self) -> f64 {
        self.node.data.get()
    }

    pub fn label(&self) -> &str {
        &self.node.label
    }

    /// Returns the operation that produced this node.
    pub fn op(&self) -> &Op {
        &self.node.op
    }

    /// Returns the nodes this value was computed from, in operand order.
    pub fn operands(&self) -> &[Value] {
        self.node.op.operands()
    }

    /// `true` for nodes created directly from a number.
    pub fn is_leaf(&self) -> bool {
        matches!(self.node.op, Op::Leaf)
    }

    /// Replaces the data of a leaf node (a parameter update, typically).
    ///
    /// Results of operations keep the value they were computed with; asking to
    /// overwrite one is an error.
    ///
    /// # Errors
    /// Returns `ScalarGradError::NonLeafMutation` if `self` has operands.
    pub fn set_data(&self, data: f64) -> Result<(), ScalarGradError> {
        self.update_data(|_| data)
    }

    /// Applies `f` to the data of a leaf node in place.
    ///
    /// # Errors
    /// Returns `ScalarGradError::NonLeafMutation` if `self` has operands.
    pub fn update_data<F>(&self, f: F) -> Result<(), ScalarGradError>
    where
        F: FnOnce(f64) -> f64,
    {
        if !self.is_leaf() {
            return Err(ScalarGradError::NonLeafMutation {
                operation: "update_data".to_string(),
            });
        }
        let cell = &self.node.data;
        cell.set(f(cell.get()));
        Ok(())
    }

    /// Identity of the underlying node, stable for as long as any handle lives.
    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.node)
    }

    /// `true` if both handles point at the same graph vertex.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

// Manual implementation of Clone: share the node, do not copy it
impl Clone for Value {
    fn clone(&self) -> Self {
        Value {
            node: Rc::clone(&self.node),
        }
    }
}

/// Literal promotion: a bare number becomes a fresh, unaliased leaf.
impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
