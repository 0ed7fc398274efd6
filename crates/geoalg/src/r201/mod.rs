//! Rigid Euclidean 2D geometry in the algebra R(2,0,1)
//!
//! Every element is a [Multivector] with eight coefficients,
//! ordered `s, e1, e2, e0, e20, e01, e12, e012`.
//! The basis vectors square to `e1² = e2² = 1` and `e0² = 0`.
//! The degenerate `e0` is what lets points at infinity and
//! translations live in the same algebra as everything else.
//!
//! The typed primitives ([Point], [Line], [Direction], [Rotor], [Translator], [Motor])
//! each wrap a multivector whose coefficients are restricted to a subspace:
//!
//! | type | populated coefficients |
//! |---|---|
//! | [Line] | `e1, e2, e0` (the line `e1·x + e2·y + e0 = 0`) |
//! | [Point] | `e20, e01, e12` (`x = e20 / e12`, `y = e01 / e12`) |
//! | [Direction] | `e20, e01` |
//! | [Rotor], [Translator], [Motor] | `s, e20, e01, e12` |
//!
//! Conversions between the typed primitives and [Multivector] are explicit projections.

use crate::algebraic_ops::*;
use crate::scalar::*;
use core::fmt;
use geoalg_macros::geometric_algebra;

mod direction;
mod line;
mod motor;
mod point;
mod rect;

pub use direction::Direction;
pub use line::Line;
pub use motor::{Motor, Rotor, Translator};
pub use point::Point;
pub use rect::{Rect, Segment};

geometric_algebra! {
    basis![e0, e1, e2];
    metric![0, 1, 1];

    /// A general element of the 2D algebra
    ///
    /// ```
    /// use geoalg::r201::Multivector;
    ///
    /// let e1 = Multivector::<i32> { e1: 1, ..Default::default() };
    /// let e2 = Multivector { e2: 1, ..Default::default() };
    ///
    /// // Perpendicular vectors anticommute
    /// assert_eq!(e1 * e2, -(e2 * e1));
    /// assert_eq!((e1 * e2).e12, 1);
    /// ```
    #[multivector]
    #[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
    pub struct Multivector<T> {
        pub s: T,
        pub e1: T,
        pub e2: T,
        pub e0: T,
        pub e20: T,
        pub e01: T,
        pub e12: T,
        /// The pseudoscalar, also written `i`
        pub e012: T,
    }
}

impl<T: Ring> Multivector<T> {
    /// A pure scalar
    pub fn scalar(s: T) -> Self {
        Multivector {
            s,
            ..Self::zero()
        }
    }

    /// The unit pseudoscalar `i = e012`
    pub fn pseudoscalar() -> Self {
        Multivector {
            e012: T::one(),
            ..Self::zero()
        }
    }

    /// Multiply every coefficient by `k`
    pub fn scale(self, k: T) -> Self {
        self * k
    }
}

impl<T: Ring + Finite> Multivector<T> {
    /// True if no coefficient is infinite or NaN
    pub fn is_finite(self) -> bool {
        self.coefficients().into_iter().all(|c| c.is_finite())
    }
}

impl<T: Ring> Multivector<T> {
    /// Numerator and scalar denominator of the inverse
    fn inverse_parts(self) -> (Self, T) {
        let numerator = self.reverse() * self.involute() * self.conjugate();
        let denominator = (self * self.conjugate() * self.involute() * self.reverse()).s;
        (numerator, denominator)
    }

    /// The inverse, or `None` when the element is not invertible
    ///
    /// ```
    /// use geoalg::r201::Multivector;
    ///
    /// assert_eq!(Multivector::<f64>::zero().try_inverse(), None);
    /// assert_eq!(Multivector::scalar(4.).try_inverse(), Some(Multivector::scalar(0.25)));
    /// ```
    pub fn try_inverse(self) -> Option<Self>
    where
        T: Recip<Output = T>,
    {
        let (numerator, denominator) = self.inverse_parts();
        if denominator == T::zero() {
            log::debug!("multivector has a zero norm invariant and cannot be inverted");
            return None;
        }
        Some(numerator * denominator.recip())
    }
}

/// Non-invertible elements produce non-finite coefficients
/// (e.g. `NaN` for floats); use [Multivector::try_inverse] to check first.
impl<T: Ring + Recip<Output = T>> Inverse for Multivector<T> {
    type Output = Multivector<T>;

    fn inverse(self) -> Multivector<T> {
        let (numerator, denominator) = self.inverse_parts();
        numerator * denominator.recip()
    }
}

/// Exponential of the bivector part `B = a e20 + b e01 + c e12`.
///
/// With `θ = |c|`, `B² = -θ²` and so `e^B = cos θ + B sin θ / θ`,
/// which degrades to the translator `1 + B` when `θ = 0`.
impl<T: Ring + Trig<Output = T>> Exp for Multivector<T> {
    type Output = Multivector<T>;

    fn exp(self) -> Multivector<T> {
        let b = self.grade(2);
        let theta = b.e12.abs();
        b * theta.sinc() + Multivector::scalar(theta.cos())
    }
}

impl<T: Ring + fmt::Display> fmt::Display for Multivector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LABELS: [&str; 8] = ["", "e1", "e2", "e0", "e20", "e01", "e12", "i"];

        let mut empty = true;
        for (c, label) in self.coefficients().into_iter().zip(LABELS) {
            if c == T::zero() {
                continue;
            }
            if !empty {
                f.write_str(" + ")?;
            }
            write!(f, "{}{}", c, label)?;
            empty = false;
        }
        if empty {
            f.write_str("0")?;
        }
        Ok(())
    }
}
