//! # scalargrad-core
//!
//! A scalar-valued reverse-mode automatic differentiation engine and a small
//! neural-network layer built on top of it.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let x = Value::new(2.0);
//! let y = Value::new(3.0);
//! let z = &(&x * &y) + &x;
//! z.backward();
//! assert_eq!(z.data(), 8.0);
//! assert_eq!(x.grad(), 4.0);
//! assert_eq!(y.grad(), 2.0);
//! ```

// Core engine
pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

// Built on the engine
pub mod nn;
pub mod optim;
pub mod utils;

pub mod error;

// Re-export the Value type so it is reachable as `scalargrad_core::Value`
pub use error::ScalarGradError;
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;
