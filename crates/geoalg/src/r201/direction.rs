use super::Multivector;
use crate::algebraic_ops::*;
use crate::ops::*;
use crate::scalar::*;

/// An ideal point: a direction in the plane, stored as `x e20 + y e01`
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Direction<T>(Multivector<T>);

impl<T: Ring> Direction<T> {
    pub fn new(x: T, y: T) -> Self {
        Direction(Multivector {
            e20: x,
            e01: y,
            ..Multivector::zero()
        })
    }

    /// Keep only the `e20, e01` coefficients of `mv`
    pub fn from_multivector(mv: Multivector<T>) -> Self {
        Self::new(mv.e20, mv.e01)
    }

    pub fn multivector(self) -> Multivector<T> {
        self.0
    }

    pub fn x(self) -> T {
        self.0.e20
    }

    pub fn y(self) -> T {
        self.0.e01
    }

    fn norm_squared(self) -> T {
        self.0.e20 * self.0.e20 + self.0.e01 * self.0.e01
    }
}

impl<T: Ring> From<Direction<T>> for Multivector<T> {
    fn from(d: Direction<T>) -> Multivector<T> {
        d.0
    }
}

impl<T: Ring + Sqrt<Output = T>> Norm for Direction<T> {
    type Output = T;

    fn norm(self) -> T {
        self.norm_squared().sqrt()
    }
}

/// A zero direction has no length to divide by and is returned unchanged,
/// as is a direction that already has unit length.
///
/// ```
/// use geoalg::r201::Direction;
/// use geoalg::ops::*;
///
/// assert_eq!(Direction::new(0., -2.).normalized(), Direction::new(0., -1.));
/// assert!((Direction::<f64>::new(3., 4.).normalized().norm() - 1.).abs() < 1e-12);
/// assert_eq!(Direction::new(0., 0.).normalized(), Direction::new(0., 0.));
/// ```
impl<T: Ring + Sqrt<Output = T> + Recip<Output = T>> Normalized for Direction<T> {
    type Output = Direction<T>;

    fn normalized(self) -> Direction<T> {
        let n2 = self.norm_squared();
        if n2 == T::zero() {
            log::trace!("cannot normalize a zero direction");
            return self;
        }
        if n2 == T::one() {
            return self;
        }
        let scale = n2.sqrt().recip();
        Direction::new(self.0.e20 * scale, self.0.e01 * scale)
    }
}

impl<T: Ring, M: Into<Multivector<T>>> Transform<M> for Direction<T> {
    type Output = Direction<T>;

    fn transform(self, r: M) -> Direction<T> {
        Direction::from_multivector(self.0.sandwich(r.into()))
    }
}
