use super::{Line, Multivector, Rotor};
use crate::algebraic_ops::*;
use crate::ops::*;
use crate::scalar::*;

/// A point in the plane, or an ideal point when its weight `e12` is zero
///
/// Points are homogeneous: `Point::homogeneous(2., 4., 2.)` is the same location as
/// `Point::new(1., 2.)`.
///
/// ## Example Operations
/// * Two points [join](crate::ops::Join) into the [Line] through both.
/// * A point [projects](crate::ops::Project) onto a line at its closest point.
/// * A point can be [transformed](crate::ops::Transform) by a
///   [Rotor](super::Rotor), [Translator](super::Translator) or [Motor](super::Motor).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Point<T>(Multivector<T>);

impl<T: Ring> Point<T> {
    /// The point at `(x, y)`, with weight 1
    pub fn new(x: T, y: T) -> Self {
        Self::homogeneous(x, y, T::one())
    }

    /// The point with homogeneous coordinates `(x : y : w)`
    pub fn homogeneous(x: T, y: T, w: T) -> Self {
        Point(Multivector {
            e20: x,
            e01: y,
            e12: w,
            ..Multivector::zero()
        })
    }

    /// Keep only the `e20, e01, e12` coefficients of `mv`
    pub fn from_multivector(mv: Multivector<T>) -> Self {
        Self::homogeneous(mv.e20, mv.e01, mv.e12)
    }

    pub fn multivector(self) -> Multivector<T> {
        self.0
    }

    /// The projective coordinate `e12`
    pub fn weight(self) -> T {
        self.0.e12
    }

    /// True for a point at infinity
    pub fn is_ideal(self) -> bool {
        self.0.e12 == T::zero()
    }

    pub fn x(self) -> T
    where
        T: Recip<Output = T>,
    {
        self.0.e20 * self.0.e12.recip()
    }

    pub fn y(self) -> T
    where
        T: Recip<Output = T>,
    {
        self.0.e01 * self.0.e12.recip()
    }

    /// Rotate about the origin, counterclockwise for positive angles
    pub fn rotate(self, radians: T) -> Self
    where
        T: Rational + Trig<Output = T>,
    {
        self.transform(Rotor::new(radians))
    }
}

impl<T: Ring> From<Point<T>> for Multivector<T> {
    fn from(p: Point<T>) -> Multivector<T> {
        p.0
    }
}

impl<T: Ring> Origin for Point<T> {
    fn origin() -> Self {
        Point::new(T::zero(), T::zero())
    }
}

impl<T: Ring> Join<Point<T>> for Point<T> {
    type Output = Line<T>;

    fn join(self, r: Point<T>) -> Line<T> {
        Line::from_multivector(self.0 & r.0)
    }
}

impl<T: Ring> Project<Line<T>> for Point<T> {
    type Output = Point<T>;

    fn project(self, r: Line<T>) -> Point<T> {
        let l = r.multivector();
        Point::from_multivector((l | self.0) * l)
    }
}

impl<T: Ring> SupersetOrthogonalTo<Line<T>> for Point<T> {
    type Output = Line<T>;

    fn superset_orthogonal_to(self, r: Line<T>) -> Line<T> {
        Line::from_multivector(r.multivector() | self.0)
    }
}

impl<T: Ring> Reflect<Line<T>> for Point<T> {
    type Output = Point<T>;

    fn reflect(self, r: Line<T>) -> Point<T> {
        Point::from_multivector(self.0.sandwich(r.multivector()))
    }
}

/// `√(p p̃)`, which is `|e12|`
impl<T: Ring + Sqrt<Output = T>> Norm for Point<T> {
    type Output = T;

    fn norm(self) -> T {
        (self.0 * self.0.reverse()).s.sqrt()
    }
}

impl<T: Ring, M: Into<Multivector<T>>> Transform<M> for Point<T> {
    type Output = Point<T>;

    fn transform(self, r: M) -> Point<T> {
        Point::from_multivector(self.0.sandwich(r.into()))
    }
}
