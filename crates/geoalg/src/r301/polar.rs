use super::{Element, Role};
use crate::error::Error;
use crate::scalar::*;
use core::ops::Mul;

/// A complex number in polar form, `norm·e^(angle·e12)`
///
/// Multiplying polar numbers multiplies their norms and adds their angles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Polar<T> {
    pub norm: T,
    /// In radians
    pub angle: T,
}

impl<T> Polar<T> {
    pub fn new(norm: T, angle: T) -> Self {
        Polar { norm, angle }
    }
}

impl<T: Ring + Trig<Output = T>> Polar<T> {
    /// The [complex](Element::Complex) element `norm·cos(angle) + norm·sin(angle) e12`
    pub fn euler(self) -> Element<T> {
        Element::complex(self.norm * self.angle.cos(), self.norm * self.angle.sin())
    }
}

impl<T: Ring + Sqrt<Output = T> + InvTrig<Output = T>> Element<T> {
    /// Convert a [complex](Element::Complex) element to polar form
    ///
    /// ```
    /// use geoalg::r301::*;
    ///
    /// let p = Element::complex(0., 2.).to_polar().unwrap();
    /// assert_eq!(p, Polar::new(2., std::f64::consts::FRAC_PI_2));
    ///
    /// assert!(Element::point(0., 0., 0.).to_polar().is_err());
    /// ```
    pub fn to_polar(self) -> Result<Polar<T>, Error> {
        match self {
            Element::Complex { re, im } => Ok(Polar {
                norm: (re * re + im * im).sqrt(),
                angle: im.atan2(re),
            }),
            other => Err(Error::RoleMismatch {
                expected: Role::Complex,
                found: other.role(),
            }),
        }
    }
}

impl<T: Ring> Mul<Polar<T>> for Polar<T> {
    type Output = Polar<T>;

    fn mul(self, r: Polar<T>) -> Polar<T> {
        Polar {
            norm: self.norm * r.norm,
            angle: self.angle + r.angle,
        }
    }
}

impl<T: Ring> Mul<T> for Polar<T> {
    type Output = Polar<T>;

    fn mul(self, r: T) -> Polar<T> {
        Polar {
            norm: self.norm * r,
            angle: self.angle,
        }
    }
}

macro_rules! impl_scalar_mul {
    ($type:ident) => {
        impl Mul<Polar<$type>> for $type {
            type Output = Polar<$type>;

            fn mul(self, r: Polar<$type>) -> Polar<$type> {
                r * self
            }
        }
    };
}

impl_scalar_mul!(f32);
impl_scalar_mul!(f64);
