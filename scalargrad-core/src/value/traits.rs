// Operator overloading and formatting for `Value`.
//
// The operators are thin wrappers over the fallible `*_op` functions. The only
// failure they can hit is mixing handles from two different graphs, which is a
// programming error, so they panic with the error message like `Value::pow`.

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:path, $name:literal) => {
        impl<'g> $trait<Value<'g>> for Value<'g> {
            type Output = Value<'g>;

            fn $method(self, rhs: Value<'g>) -> Value<'g> {
                $op_fn(self.graph(), self, rhs)
                    .unwrap_or_else(|e| panic!("Value {} failed: {}", $name, e))
            }
        }

        impl<'g> $trait<f64> for Value<'g> {
            type Output = Value<'g>;

            fn $method(self, rhs: f64) -> Value<'g> {
                $op_fn(self.graph(), self, rhs)
                    .unwrap_or_else(|e| panic!("Value {} failed: {}", $name, e))
            }
        }

        // Reflected form: `2.0 - x` promotes the number on the left.
        impl<'g> $trait<Value<'g>> for f64 {
            type Output = Value<'g>;

            fn $method(self, rhs: Value<'g>) -> Value<'g> {
                $op_fn(rhs.graph(), self, rhs)
                    .unwrap_or_else(|e| panic!("Value {} failed: {}", $name, e))
            }
        }
    };
}

impl_binary_operator!(Add, add, add_op, "addition");
impl_binary_operator!(Sub, sub, sub_op, "subtraction");
impl_binary_operator!(Mul, mul, mul_op, "multiplication");
impl_binary_operator!(Div, div, div_op, "division");

macro_rules! impl_assign_operator {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<'g> $trait<Value<'g>> for Value<'g> {
            fn $method(&mut self, rhs: Value<'g>) {
                *self = *self $op rhs;
            }
        }

        impl<'g> $trait<f64> for Value<'g> {
            fn $method(&mut self, rhs: f64) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_assign_operator!(AddAssign, add_assign, +);
impl_assign_operator!(SubAssign, sub_assign, -);
impl_assign_operator!(MulAssign, mul_assign, *);

impl<'g> Neg for Value<'g> {
    type Output = Value<'g>;

    fn neg(self) -> Value<'g> {
        neg_op(self.graph(), self).unwrap_or_else(|e| panic!("Value negation failed: {}", e))
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph(), other.graph()) && self.id() == other.id()
    }
}

impl Eq for Value<'_> {}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={:.3})", self.value())
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("id", &self.id())
            .field("value", &self.value())
            .field("grad", &self.grad())
            .field("op", &self.op_symbol())
            .finish()
    }
}

#[cfg(test)]
#[path = "traits_test.rs"]
mod tests;
