// src/value_data.rs
use std::cell::Cell;
use std::rc::Rc;

use crate::autograd::Op;
use crate::value::Value;

/// Internal storage for a single node of the computation graph.
///
/// This struct holds the forward value, the gradient accumulator and the
/// operation (with its operands) that produced the node.
/// It is wrapped in `Rc<ValueData>` by the `Value` struct so that one node can
/// be referenced as an operand by any number of results.
#[derive(Debug)]
pub struct ValueData {
    /// Forward result. Only leaves ever see this replaced (see `Value::set_data`).
    pub(crate) data: Cell<f64>,
    /// Accumulated d(root)/d(self). Zero at creation, grown by `backward()`.
    pub(crate) grad: Cell<f64>,
    /// The operation that produced this node, holding shared handles to its operands.
    /// Leaves carry `Op::Leaf`.
    pub(crate) op: Op,
    /// Diagnostic name, empty unless given at construction.
    pub(crate) label: String,
}

impl ValueData {
    pub(crate) fn new(data: f64, op: Op, label: String) -> Self {
        ValueData {
            data: Cell::new(data),
            grad: Cell::new(0.0),
            op,
            label,
        }
    }
}

// Long chains of operations would otherwise be torn down recursively, one
// stack frame per node. Operands are detached and released from a work list
// instead; a node is only expanded when this was its last handle.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending = take_operands(&mut self.op);
        while let Some(value) = pending.pop() {
            if let Ok(mut data) = Rc::try_unwrap(value.node) {
                pending.extend(take_operands(&mut data.op));
            }
        }
    }
}

fn take_operands(op: &mut Op) -> Vec<Value> {
    match std::mem::replace(op, Op::Leaf) {
        Op::Leaf => Vec::new(),
        Op::Add([a, b]) | Op::Mul([a, b]) => vec![a, b],
        Op::Pow(base, _) => vec![base],
        Op::Exp(input) | Op::Tanh(input) => vec![input],
    }
}
