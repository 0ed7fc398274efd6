#![cfg_attr(not(feature = "std"), no_std)]

//! geoalg is a library for rigid Euclidean geometry using plane-based geometric algebra.
//!
//! geoalg ships with modules for [2D](r201) and [3D](r301) geometry.
//! In 2D, the typed primitives are points, lines, directions,
//! and the rotors, translators and motors that move them.
//! In 3D, every element carries a [Role](r301::Role)
//! that is recovered from the coefficients an operation produces.
//!
//! geoalg uses [homogeneous coordinates](https://en.wikipedia.org/wiki/Homogeneous_coordinates)
//! so that [meet](ops::Meet) and [join](ops::Join) are exception-free:
//! parallel lines meet at an ideal point, and coincident points join into a line of zero norm.
//!
//! geoalg is generic over the [scalar] datatype.
//! The products need only [addition and multiplication](scalar::Ring),
//! so integer scalars work for everything but inverses, norms and angles.
//!
//! Operations are named for their geometric meaning in [ops].
//! The underlying [algebraic operations](algebraic_ops) are available as well,
//! along with the `*`, `^`, `|` and `&` operators on the dense multivectors.
//!
//! ```
//! use geoalg::r201::*;
//! use geoalg::ops::*;
//!
//! // The line through two points
//! let l = Point::new(20., 20.).join(Point::new(150., 80.));
//! assert_eq!((l.e1(), l.e2(), l.e0()), (60., -130., 1400.));
//!
//! // The closest point on it to (0, 100)
//! let p = Point::<f64>::new(0., 100.).project(l);
//! assert!((p.x() - 33.951).abs() < 1e-3);
//! assert!((p.y() - 26.439).abs() < 1e-3);
//! ```

/// Generate the geometric algebra products on a multivector struct
///
/// The struct must have one field per basis blade of the algebra.
/// Field names spell the blade (e.g. `e20`), and the order of the letters
/// sets the orientation of that blade.
/// A field whose name is not made of basis vectors is the scalar.
///
/// ```
/// use geoalg::geometric_algebra;
///
/// // These traits must be brought into scope before invoking the macro:
/// use geoalg::scalar::*;
/// use geoalg::algebraic_ops::*;
///
/// geometric_algebra! {
///     // The basis vectors, in order
///     basis![e1, e2];
///
///     // The square of each basis vector
///     metric![1, 1];
///
///     // Complex numbers as the even part of the Euclidean plane
///     // (fields for every blade are required)
///     #[multivector]
///     #[derive(Clone, Copy, Default, Debug, PartialEq)]
///     struct Plane2<T> {
///         s: T,
///         e1: T,
///         e2: T,
///         e12: T,
///     }
/// }
///
/// let i = Plane2 { e12: 1, ..Default::default() };
/// assert_eq!((i * i).s, -1);
/// ```
///
/// The macro emits the struct verbatim, then appends
/// the four products, their operator aliases,
/// [Reverse](algebraic_ops::Reverse), [Involute](algebraic_ops::Involute),
/// [Conjugate](algebraic_ops::Conjugate), [Dual](algebraic_ops::Dual),
/// [Sandwich](algebraic_ops::Sandwich) and linear arithmetic.
pub use geoalg_macros::geometric_algebra;

pub mod algebraic_ops;
pub mod error;
pub mod ops;
pub mod r201;
pub mod r301;
pub mod scalar;

pub use error::Error;

mod test;
