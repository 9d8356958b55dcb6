//! Operator overloads. Every binary form can fail (dimension mismatch,
//! division by zero, non-finite scalar), so each returns a [`Result`].
//!
//! `Vector * Vector` is the dot product and yields a scalar;
//! `Vector / Vector` divides element-wise.

use crate::{Result, Vector};
use bigdecimal::BigDecimal;
use num_traits::One;
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! vector_binop {
    ($trt:ident, $method:ident, $inherent:ident, $out:ty) => {
        impl $trt<&Vector> for &Vector {
            type Output = Result<$out>;

            fn $method(self, rhs: &Vector) -> Self::Output {
                Vector::$inherent(self, rhs)
            }
        }

        impl $trt<Vector> for &Vector {
            type Output = Result<$out>;

            fn $method(self, rhs: Vector) -> Self::Output {
                Vector::$inherent(self, &rhs)
            }
        }

        impl $trt<&Vector> for Vector {
            type Output = Result<$out>;

            fn $method(self, rhs: &Vector) -> Self::Output {
                Vector::$inherent(&self, rhs)
            }
        }

        impl $trt<Vector> for Vector {
            type Output = Result<$out>;

            fn $method(self, rhs: Vector) -> Self::Output {
                Vector::$inherent(&self, &rhs)
            }
        }
    };
}

vector_binop!(Add, add, add, Vector);
vector_binop!(Sub, sub, subtract, Vector);
vector_binop!(Mul, mul, dot, BigDecimal);
vector_binop!(Div, div, divide_elementwise, Vector);

macro_rules! scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Mul<$t> for &Vector {
                type Output = Result<Vector>;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.scale(rhs)
                }
            }

            impl Mul<$t> for Vector {
                type Output = Result<Vector>;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.scale(rhs)
                }
            }

            impl Div<$t> for &Vector {
                type Output = Result<Vector>;

                fn div(self, rhs: $t) -> Self::Output {
                    self.divide(rhs)
                }
            }

            impl Div<$t> for Vector {
                type Output = Result<Vector>;

                fn div(self, rhs: $t) -> Self::Output {
                    self.divide(rhs)
                }
            }
        )*
    };
}

scalar_ops!(i32, i64, u32, u64, f32, f64, BigDecimal);

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale_by(&-BigDecimal::one())
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}
