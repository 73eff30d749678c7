//! Reverse-mode machinery: the per-node operation tag, the topological
//! ordering of a root's ancestors, and a finite-difference gradient checker.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
