// Export foundational arithmetic operations directly
pub mod add;
pub mod sub;
pub mod mul;
pub mod div;
pub mod neg;
pub mod pow;

pub use add::{add_op, add_scalar_op};
pub use sub::{sub_op, sub_scalar_op};
pub use mul::{mul_op, mul_scalar_op};
pub use div::{div_op, div_scalar_op};
pub use neg::neg_op;
pub use pow::pow_op;
