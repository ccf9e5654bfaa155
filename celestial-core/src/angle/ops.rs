//! Arithmetic on [`Angle`]. All operators act on the stored radians and never
//! normalize.

use super::core::Angle;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

macro_rules! angle_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Angle {
            type Output = Angle;
            #[inline]
            fn $method(self, rhs: Angle) -> Angle {
                Angle::from_radians(self.radians() $op rhs.radians())
            }
        }
    };
}

macro_rules! angle_scalar_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<f64> for Angle {
            type Output = Angle;
            #[inline]
            fn $method(self, k: f64) -> Angle {
                Angle::from_radians(self.radians() $op k)
            }
        }
    };
}

angle_binop!(Add, add, +);
angle_binop!(Sub, sub, -);
angle_scalar_op!(Mul, mul, *);
angle_scalar_op!(Div, div, /);

impl Mul<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn mul(self, a: Angle) -> Angle {
        a * self
    }
}

impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Angle {
        Angle::from_radians(-self.radians())
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Angle) {
        *self = *self + rhs;
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Angle) {
        *self = *self - rhs;
    }
}
