// src/value/arithmetic.rs

//! Operator overloads and method sugar over the primitive operations in `crate::ops`.
//!
//! Any side of a binary operator may be a plain `f64`: it is promoted to a
//! fresh leaf before the operation runs.

use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub};

use num_traits::{One, Zero};

use crate::ops::activation::tanh_op;
use crate::ops::arithmetic::{
    add_op, add_scalar_op, div_op, div_scalar_op, mul_op, mul_scalar_op, neg_op, pow_op, sub_op,
    sub_scalar_op,
};
use crate::ops::math_elem::exp_op;
use crate::value::Value;

impl Value {
    /// `self ^ exponent`, the exponent being a constant of the graph.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    pub fn exp(&self) -> Value {
        exp_op(self)
    }

    /// `(e^x - 1) / (e^x + 1)`, see `crate::ops::activation::tanh_op`.
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:path, $scalar_fn:path) => {
        impl $trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $scalar_fn(self, rhs)
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $scalar_fn(&self, rhs)
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&Value::from(self), rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::from(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op, add_scalar_op);
impl_binary_op!(Sub, sub, sub_op, sub_scalar_op);
impl_binary_op!(Mul, mul, mul_op, mul_scalar_op);
impl_binary_op!(Div, div, div_op, div_scalar_op);

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

// `acc += &x` rebinds `acc` to a new node; the old node stays in the graph as an operand.
impl AddAssign<&Value> for Value {
    fn add_assign(&mut self, rhs: &Value) {
        *self = add_op(self, rhs);
    }
}

impl AddAssign<Value> for Value {
    fn add_assign(&mut self, rhs: Value) {
        *self = add_op(self, &rhs);
    }
}

impl MulAssign<&Value> for Value {
    fn mul_assign(&mut self, rhs: &Value) {
        *self = mul_op(self, rhs);
    }
}

impl Zero for Value {
    /// A fresh leaf holding `0.0`.
    fn zero() -> Self {
        Value::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.data() == 0.0
    }
}

impl One for Value {
    fn one() -> Self {
        Value::new(1.0)
    }
}

/// Sums into a chain of `add` nodes seeded with a fresh zero leaf.
impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Self {
        iter.fold(Value::zero(), |acc, v| add_op(&acc, &v))
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.fold(Value::zero(), |acc, v| add_op(&acc, v))
    }
}

impl Product for Value {
    fn product<I: Iterator<Item = Value>>(iter: I) -> Self {
        iter.fold(Value::one(), |acc, v| mul_op(&acc, &v))
    }
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
