use super::{Direction, Multivector, Point, Rect, Segment};
use crate::algebraic_ops::*;
use crate::ops::*;
use crate::scalar::*;

/// The line `a·x + b·y + c = 0`, stored as `a e1 + b e2 + c e0`
///
/// ## Example Operations
/// * Two lines [meet](crate::ops::Meet) at a [Point].
/// * A line [projects](crate::ops::Project) onto a point as the parallel line through it.
/// * The [orthogonal complement](crate::ops::OrthogonalComplement) of a line
///   is the [Direction] perpendicular to it.
/// * A line can be [clipped](Line::clip) to a rectangle for drawing.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Line<T>(Multivector<T>);

impl<T: Ring> Line<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Line(Multivector {
            e1: a,
            e2: b,
            e0: c,
            ..Multivector::zero()
        })
    }

    /// Keep only the `e1, e2, e0` coefficients of `mv`
    pub fn from_multivector(mv: Multivector<T>) -> Self {
        Self::new(mv.e1, mv.e2, mv.e0)
    }

    pub fn multivector(self) -> Multivector<T> {
        self.0
    }

    pub fn e1(self) -> T {
        self.0.e1
    }

    pub fn e2(self) -> T {
        self.0.e2
    }

    pub fn e0(self) -> T {
        self.0.e0
    }
}

impl<T: Ring> From<Line<T>> for Multivector<T> {
    fn from(l: Line<T>) -> Multivector<T> {
        l.0
    }
}

impl<T: Ring> Meet<Line<T>> for Line<T> {
    type Output = Point<T>;

    fn meet(self, r: Line<T>) -> Point<T> {
        Point::from_multivector(self.0 ^ r.0)
    }
}

impl<T: Ring> Project<Point<T>> for Line<T> {
    type Output = Line<T>;

    fn project(self, r: Point<T>) -> Line<T> {
        let p = r.multivector();
        Line::from_multivector((self.0 | p) * p)
    }
}

impl<T: Ring> OrthogonalComplement for Line<T> {
    type Output = Direction<T>;

    fn orthogonal_complement(self) -> Direction<T> {
        Direction::from_multivector(self.0 * Multivector::pseudoscalar())
    }
}

impl<T: Ring> Reflect<Line<T>> for Line<T> {
    type Output = Line<T>;

    fn reflect(self, r: Line<T>) -> Line<T> {
        Line::from_multivector(self.0.sandwich(r.0))
    }
}

/// `√(e1² + e2²)`
impl<T: Ring + Sqrt<Output = T>> Norm for Line<T> {
    type Output = T;

    fn norm(self) -> T {
        (self.0.e1 * self.0.e1 + self.0.e2 * self.0.e2).sqrt()
    }
}

impl<T: Ring, M: Into<Multivector<T>>> Transform<M> for Line<T> {
    type Output = Line<T>;

    fn transform(self, r: M) -> Line<T> {
        Line::from_multivector(self.0.sandwich(r.into()))
    }
}

impl<T: Rational + Recip<Output = T> + PartialOrd> Line<T> {
    /// The visible chord of this line inside `rect`
    ///
    /// Meets the line with the four edges of the rectangle
    /// and keeps the intersections that land on the rectangle's boundary,
    /// allowing a rounding error of 2⁻²⁰ of the rectangle's size.
    /// Intersections are snapped onto the edge they were found on.
    /// Returns `None` when the line misses the rectangle,
    /// only touches one corner,
    /// or has zero weight.
    ///
    /// ```
    /// use geoalg::r201::*;
    ///
    /// let viewport = Rect::new(0., 0., 100., 50.);
    ///
    /// // y = x
    /// let s = Line::new(1., -1., 0.).clip(viewport).unwrap();
    /// assert_eq!((s.start.x(), s.start.y()), (0., 0.));
    /// assert_eq!((s.end.x(), s.end.y()), (50., 50.));
    ///
    /// // y = 80 is outside
    /// assert_eq!(Line::new(0., 1., -80.).clip(viewport), None);
    /// ```
    pub fn clip(self, rect: Rect<T>) -> Option<Segment<T>> {
        let tolerance = ((rect.max_x - rect.min_x).abs() + (rect.max_y - rect.min_y).abs())
            * T::from_fraction(1, 1 << 20);
        let within = |v: T, lo: T, hi: T| v >= lo - tolerance && v <= hi + tolerance;
        let clamp = |v: T, lo: T, hi: T| {
            if v < lo {
                lo
            } else if v > hi {
                hi
            } else {
                v
            }
        };

        let edges = [
            (rect.min_x, true),
            (rect.max_x, true),
            (rect.min_y, false),
            (rect.max_y, false),
        ];

        let mut found: [Option<(T, T)>; 2] = [None, None];
        let mut count = 0;
        for (k, vertical) in edges {
            let edge = if vertical {
                Line::new(T::one(), T::zero(), -k)
            } else {
                Line::new(T::zero(), T::one(), -k)
            };
            let p = self.meet(edge);
            if p.is_ideal() {
                continue;
            }
            let (x, y) = if vertical { (k, p.y()) } else { (p.x(), k) };
            let on_edge = if vertical {
                within(y, rect.min_y, rect.max_y)
            } else {
                within(x, rect.min_x, rect.max_x)
            };
            if !on_edge {
                continue;
            }
            let (x, y) = (
                clamp(x, rect.min_x, rect.max_x),
                clamp(y, rect.min_y, rect.max_y),
            );
            // A chord through a corner hits two edges at the same point
            let seen = found[..count].iter().flatten().any(|&(fx, fy)| {
                (fx - x).abs() <= tolerance && (fy - y).abs() <= tolerance
            });
            if seen {
                continue;
            }
            if count == 2 {
                break;
            }
            found[count] = Some((x, y));
            count += 1;
        }

        match found {
            [Some((x0, y0)), Some((x1, y1))] => Some(Segment {
                start: Point::new(x0, y0),
                end: Point::new(x1, y1),
            }),
            _ => {
                log::trace!("line has no visible chord in the rectangle");
                None
            }
        }
    }
}
