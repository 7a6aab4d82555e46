//! Arithmetic operators.
//!
//! Vector/vector operators are component-wise (`*` and `/` included), and
//! vector/scalar operators apply the scalar to every component. Division by
//! zero follows IEEE-754.

use crate::Vector3;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Generates `Vector3 (op) Vector3`, `Vector3 (op) f32` and the assigning forms.
macro_rules! impl_componentwise_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl $Op<Vector3> for Vector3 {
            type Output = Vector3;
            #[inline]
            fn $op(self, rhs: Vector3) -> Vector3 {
                Vector3::new(self.x $sym rhs.x, self.y $sym rhs.y, self.z $sym rhs.z)
            }
        }

        impl $Op<f32> for Vector3 {
            type Output = Vector3;
            #[inline]
            fn $op(self, rhs: f32) -> Vector3 {
                Vector3::new(self.x $sym rhs, self.y $sym rhs, self.z $sym rhs)
            }
        }

        impl $OpAssign<Vector3> for Vector3 {
            #[inline]
            fn $op_assign(&mut self, rhs: Vector3) {
                *self = (*self).$op(rhs);
            }
        }

        impl $OpAssign<f32> for Vector3 {
            #[inline]
            fn $op_assign(&mut self, rhs: f32) {
                *self = (*self).$op(rhs);
            }
        }
    };
}

impl_componentwise_op!(Add, add, AddAssign, add_assign, +);
impl_componentwise_op!(Sub, sub, SubAssign, sub_assign, -);
impl_componentwise_op!(Mul, mul, MulAssign, mul_assign, *);
impl_componentwise_op!(Div, div, DivAssign, div_assign, /);

// f32 * Vector3 = Vector3 (scaling commutes)
impl Mul<Vector3> for f32 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    #[inline]
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_vector_ops_are_componentwise() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 0.5);
        assert_eq!(a + b, Vector3::new(5.0, -3.0, 3.5));
        assert_eq!(a - b, Vector3::new(-3.0, 7.0, 2.5));
        assert_eq!(a * b, Vector3::new(4.0, -10.0, 1.5));
        assert_eq!(a / b, Vector3::new(0.25, -0.4, 6.0));
    }

    #[test]
    fn test_vector_scalar_ops_broadcast() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a + 1.0, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(a - 1.0, Vector3::new(0.0, 1.0, 2.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_assign_ops() {
        let mut v = Vector3::ONE;
        v += Vector3::UP;
        assert_eq!(v, Vector3::new(1.0, 2.0, 1.0));
        v -= 1.0;
        assert_eq!(v, Vector3::new(0.0, 1.0, 0.0));
        v *= 4.0;
        v /= Vector3::new(1.0, 2.0, 1.0);
        assert_eq!(v, Vector3::new(0.0, 2.0, 0.0));
        v *= Vector3::splat(-1.0);
        assert_eq!(v, Vector3::new(-0.0, -2.0, -0.0));
    }

    #[test]
    fn test_division_by_zero_follows_ieee() {
        let v = Vector3::new(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());
    }
}
