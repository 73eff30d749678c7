//! # Scalar Operations Module (`ops`)
//!
//! The differentiable primitives every graph is built from.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a function (named `xxx_op`) that computes the
//!   forward value and records the `Op` tag the backward pass dispatches on.
//!   The operator overloads and methods on `Value` are thin wrappers around them.
//! - **Composite operations:** `sub`, `div` and `neg` are expressed through `add`, `mul`
//!   and `pow` and inherit their gradient rules.
//! - **`_scalar_op` Functions:** Binary operations with a plain `f64` right-hand side.
//!   The number is promoted to a fresh leaf that nothing else references.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: exp.
//! - [`activation`]: tanh.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::tanh_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;
