use thiserror::Error;

/// Custom error type for the scalargrad framework.
///
/// The differentiation engine itself never fails: division by zero, a negative
/// base raised to a fractional power or an overflowing `tanh` simply produce
/// IEEE-754 infinities or NaNs. Errors only come from precondition violations
/// in the code built on top of the engine (layers, losses, optimizers).
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Input length mismatch: expected {expected}, got {actual} during operation {operation}")]
    InputLengthMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Input shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    InputShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
        operation: String,
    },

    #[error("Kernel size {kernel_size} is invalid for a {height}x{width} input")]
    InvalidKernelSize {
        kernel_size: usize,
        height: usize,
        width: usize,
    },

    #[error("Index {index} out of range for length {len} during operation {operation}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        operation: String,
    },

    #[error("A multi-layer perceptron needs at least one layer size")]
    EmptyLayerSizes,

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Cannot replace the data of a non-leaf value during operation {operation}")]
    NonLeafMutation { operation: String },
}
