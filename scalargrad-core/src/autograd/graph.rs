use std::collections::HashSet;

use crate::value::Value;
use crate::value_data::ValueData;

/// Identity of a graph node: the address of its shared `ValueData`.
///
/// Only ever compared and hashed, never dereferenced. The `Value` handles kept
/// in the sorted list keep every address alive for the duration of a pass.
pub type NodeId = *const ValueData;

/// Builds a topological order of every node reachable from `root`.
///
/// The result is a depth-first post-order (operands left to right, then the
/// node itself): each node appears after all of its operands, so walking it in
/// reverse visits every consumer before the nodes it consumes. Nodes reached
/// through several paths are listed once, deduplicated by identity.
///
/// The traversal keeps an explicit stack instead of recursing, long chains of
/// operations would otherwise exhaust the call stack.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted = Vec::new();
    // (node, operands_done)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, operands_done)) = stack.pop() {
        if operands_done {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let operands = node.operands().to_vec();
        stack.push((node, true));
        // Reverse so the leftmost operand is expanded first.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }

    sorted
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
