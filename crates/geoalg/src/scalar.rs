//! Traits that govern the scalar data type used by geoalg
//!
//! Every product in the algebra is a sum of products of coefficients,
//! so the scalar datatype needs only be a [Ring] for the products to work.
//! Inverses, norms, and the construction of rotors from angles
//! need the additional traits below.

use core::ops::{Add, Mul, Neg, Sub};

/// A scalar datatype whose absolute value can be taken.
pub trait Abs {
    type Output;

    /// Computes the absolute value of a scalar.
    fn abs(self) -> Self::Output;
}

/// A scalar datatype which is closed under addition and multiplication.
///
/// see <https://en.wikipedia.org/wiki/Ring_(mathematics)>
///
/// `Ring` is implemented for `f32`, `f64`, and `i8` through `i128`
///
/// `Ring` requires that its datatype is `Copy` so that coefficients can be
/// used freely in the generated product expressions.
pub trait Ring:
    Clone
    + Copy
    + PartialEq
    + Neg<Output = Self>
    + Abs<Output = Self>
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Default
{
    /// The additive identity
    fn zero() -> Self {
        Self::default()
    }

    /// The multiplicative identity
    fn one() -> Self {
        Self::from_integer(1)
    }

    /// Construct an integer scalar
    fn from_integer(i: isize) -> Self;
}

/// A scalar datatype which can represent fractional values such as ½.
///
/// Rotors and translators encode half of the motion they perform,
/// so building one from an angle or a distance requires halving it.
///
/// `Rational` comes implemented for `f32` and `f64`.
pub trait Rational: Ring {
    /// Construct a rational scalar
    /// from an integer numerator and integer denominator
    fn from_fraction(numerator: isize, denominator: isize) -> Self;

    /// A scalar value that when multiplied by 2 equals [one](Ring::one)
    fn one_half() -> Self {
        Self::from_fraction(1, 2)
    }
}

/// A scalar datatype which is closed under the square root function.
///
/// Used when taking the norm of a point, line or direction.
///
/// `Sqrt` comes implemented for `f32` and `f64` with the `std` feature.
///
/// ## `sqrt()` of negative numbers
///
/// When given a negative value,
/// this function must either return a valid scalar datatype (e.g. `f32::NaN`)
/// or panic.
/// All uses of `sqrt()` within the library are on sums of squares.
pub trait Sqrt: Ring {
    // The scalar datatype for the square root
    type Output;

    // This scalar's positive square root
    fn sqrt(self) -> <Self as Sqrt>::Output;
}

/// A scalar datatype which implements trigonometric functions.
///
/// Used to build [rotors](crate::r201::Rotor) from angles
/// and for the [exponential map](crate::algebraic_ops::Exp).
///
/// `Trig` comes implemented for `f32` → `f32` and `f64` → `f64` with the `std` feature.
pub trait Trig {
    // The scalar datatype for linear quantities
    // (output of `sin()` and `cos()`)
    type Output: Ring;

    // The cosine of a scalar (in radians)
    fn cos(self) -> Self::Output;

    // The sine of a scalar (in radians)
    fn sin(self) -> Self::Output;

    // Computes sin(x) / x
    // (including at `0`, where the result should be `1`)
    fn sinc(self) -> Self::Output;

    // Half a turn, in radians
    fn pi() -> Self::Output;
}

/// A scalar datatype with a two-argument arctangent.
///
/// Used to recover the angle of a [polar](crate::r301::Polar) number.
pub trait InvTrig {
    type Output;

    /// The angle (in radians) of the vector `(x, self)`
    fn atan2(self, x: Self) -> Self::Output;
}

/// A scalar datatype whose reciprocal can be taken.
///
/// Division is needed to [invert](crate::algebraic_ops::Inverse) a multivector
/// and to read Euclidean coordinates out of a homogeneous point.
///
/// `Recip` comes implemented for `f32` → `f32` and `f64` → `f64`.
///
/// ## `recip()` of `0`
///
/// When given an input of zero,
/// this function must return a valid scalar datatype (e.g. `f32::INFINITY`) or panic.
/// For floating point datatypes this operation is NOT NaN-free.
pub trait Recip {
    type Output;
    fn recip(self) -> Self::Output;
}

/// A scalar datatype that can tell whether it holds an ordinary value.
pub trait Finite {
    fn is_finite(self) -> bool;
}

macro_rules! impl_for_float {
    ($type:ident) => {
        #[cfg(feature = "std")]
        impl Abs for $type {
            type Output = $type;
            fn abs(self) -> $type {
                self.abs()
            }
        }
        #[cfg(not(feature = "std"))]
        impl Abs for $type {
            type Output = $type;
            fn abs(self) -> $type {
                if self < 0. {
                    -self
                } else {
                    self
                }
            }
        }

        impl Ring for $type {
            fn from_integer(i: isize) -> $type {
                i as $type
            }
        }

        impl Rational for $type {
            fn from_fraction(numerator: isize, denominator: isize) -> $type {
                numerator as $type / denominator as $type
            }
        }

        #[cfg(feature = "std")]
        impl Sqrt for $type {
            type Output = $type;
            fn sqrt(self) -> $type {
                self.sqrt()
            }
        }

        #[cfg(feature = "std")]
        impl Trig for $type {
            type Output = $type;

            fn cos(self) -> $type {
                self.cos()
            }
            fn sin(self) -> $type {
                self.sin()
            }
            fn sinc(self) -> $type {
                let self_adj = self.abs() + $type::EPSILON;
                self_adj.sin() / self_adj
            }
            fn pi() -> $type {
                core::$type::consts::PI
            }
        }

        #[cfg(feature = "std")]
        impl InvTrig for $type {
            type Output = $type;

            fn atan2(self, x: $type) -> $type {
                self.atan2(x)
            }
        }

        impl Recip for $type {
            type Output = $type;

            fn recip(self) -> $type {
                self.recip()
            }
        }

        impl Finite for $type {
            fn is_finite(self) -> bool {
                self.is_finite()
            }
        }
    };
}

impl_for_float!(f32);
impl_for_float!(f64);

macro_rules! impl_for_int {
    ($type:ident) => {
        impl Abs for $type {
            type Output = $type;
            fn abs(self) -> $type {
                self.abs()
            }
        }

        impl Ring for $type {
            fn from_integer(i: isize) -> $type {
                i as $type
            }
        }

        impl Finite for $type {
            fn is_finite(self) -> bool {
                true
            }
        }
    };
}

impl_for_int!(i8);
impl_for_int!(i16);
impl_for_int!(i32);
impl_for_int!(i64);
impl_for_int!(i128);
