use super::{Direction, Multivector};
use crate::algebraic_ops::*;
use crate::ops::*;
use crate::scalar::*;

/// A rotation, stored as `s + e20 + e01 + e12`
///
/// A rotor about the origin only populates `s` and `e12`.
/// A rotor about another center also populates `e20` and `e01`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rotor<T>(Multivector<T>);

/// A translation, stored as `1 + e20 + e01`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Translator<T>(Multivector<T>);

/// Any rigid motion of the plane, stored as `s + e20 + e01 + e12`
///
/// Motors are built by [composing](crate::ops::Compose) rotors and translators,
/// or from a bivector through the [exponential map](Motor::from_bivector).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Motor<T>(Multivector<T>);

fn even_part<T: Ring>(mv: Multivector<T>) -> Multivector<T> {
    Multivector {
        s: mv.s,
        e20: mv.e20,
        e01: mv.e01,
        e12: mv.e12,
        ..Multivector::zero()
    }
}

impl<T: Ring + Rational + Trig<Output = T>> Rotor<T> {
    /// Counterclockwise rotation about the origin
    ///
    /// ```
    /// use geoalg::r201::*;
    /// use geoalg::ops::*;
    ///
    /// let r = Rotor::new(std::f64::consts::PI);
    /// let p = Point::new(3., 4.).transform(r);
    /// assert!((p.x() + 3.).abs() < 1e-12);
    /// assert!((p.y() + 4.).abs() < 1e-12);
    /// ```
    pub fn new(radians: T) -> Self {
        let half = radians * T::one_half();
        Rotor(Multivector {
            s: half.cos(),
            e12: -half.sin(),
            ..Multivector::zero()
        })
    }

    /// Counterclockwise rotation about the point `(x, y)`
    ///
    /// This is the rotor about the origin conjugated by the translation to the center.
    pub fn with_center(radians: T, x: T, y: T) -> Self {
        let t = Translator::new(x, y).0;
        Rotor(t * Rotor::new(radians).0 * t.reverse())
    }
}

impl<T: Ring> Rotor<T> {
    /// Keep only the `s, e20, e01, e12` coefficients of `mv`
    pub fn from_multivector(mv: Multivector<T>) -> Self {
        Rotor(even_part(mv))
    }

    pub fn multivector(self) -> Multivector<T> {
        self.0
    }
}

impl<T: Ring + Rational> Translator<T> {
    /// Translation by `(dx, dy)`
    pub fn new(dx: T, dy: T) -> Self {
        let half = T::one_half();
        Translator(Multivector {
            s: T::one(),
            e20: dy * half,
            e01: -dx * half,
            ..Multivector::zero()
        })
    }

    /// Translation by `distance` in the given direction
    pub fn along(direction: Direction<T>, distance: T) -> Self
    where
        T: Sqrt<Output = T> + Recip<Output = T>,
    {
        let d = direction.normalized();
        Translator::new(d.x() * distance, d.y() * distance)
    }
}

impl<T: Ring> Translator<T> {
    /// Keep only the `s, e20, e01` coefficients of `mv`
    pub fn from_multivector(mv: Multivector<T>) -> Self {
        Translator(Multivector {
            s: mv.s,
            e20: mv.e20,
            e01: mv.e01,
            ..Multivector::zero()
        })
    }

    pub fn multivector(self) -> Multivector<T> {
        self.0
    }
}

impl<T: Ring> Motor<T> {
    /// The motor that performs no motion
    pub fn identity() -> Self {
        Motor(Multivector::scalar(T::one()))
    }

    /// Keep only the `s, e20, e01, e12` coefficients of `mv`
    pub fn from_multivector(mv: Multivector<T>) -> Self {
        Motor(even_part(mv))
    }

    pub fn multivector(self) -> Multivector<T> {
        self.0
    }

    /// The motor generated by the bivector part of `mv`
    ///
    /// `e^(-θ/2 e12)` is a rotation by θ about the origin,
    /// and `e^(dy/2 e20 - dx/2 e01)` is a translation by `(dx, dy)`.
    pub fn from_bivector(mv: Multivector<T>) -> Self
    where
        T: Trig<Output = T>,
    {
        Motor(mv.grade(2).exp())
    }
}

macro_rules! impl_motion {
    ($type:ident) => {
        impl<T: Ring> From<$type<T>> for Multivector<T> {
            fn from(m: $type<T>) -> Multivector<T> {
                m.0
            }
        }

        impl<T: Ring, M: Into<Multivector<T>>> Compose<M> for $type<T> {
            type Output = Motor<T>;

            fn compose(self, r: M) -> Motor<T> {
                let r: Multivector<T> = r.into();
                Motor(r * self.0)
            }
        }

        impl<T: Ring> InverseTransformation for $type<T> {
            type Output = $type<T>;

            fn inverse_transformation(self) -> $type<T> {
                $type(self.0.reverse())
            }
        }
    };
}

impl_motion!(Rotor);
impl_motion!(Translator);
impl_motion!(Motor);

impl<T: Ring> From<Rotor<T>> for Motor<T> {
    fn from(r: Rotor<T>) -> Motor<T> {
        Motor(r.0)
    }
}

impl<T: Ring> From<Translator<T>> for Motor<T> {
    fn from(t: Translator<T>) -> Motor<T> {
        Motor(t.0)
    }
}

/// Motors transform other motors by conjugation,
/// re-expressing the motion in the transformed frame.
impl<T: Ring, M: Into<Multivector<T>>> Transform<M> for Motor<T> {
    type Output = Motor<T>;

    fn transform(self, r: M) -> Motor<T> {
        Motor::from_multivector(self.0.sandwich(r.into()))
    }
}
