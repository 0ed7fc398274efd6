//! Geometric operations
//!
//! These traits name operations by their geometric meaning.
//! Each is a short expression of the [algebraic operations](crate::algebraic_ops)
//! on the underlying multivectors.

/// The higher-dimensional geometry containing both operands, i.e. union.
///
/// In 2D, two points join into the line through both.
/// In 3D, two points join into a line, and a line and a point join into a plane.
///
/// `Join` is exception-free.
/// Joining coincident points results in a line whose [norm](Norm) is zero.
///
/// ```
/// use geoalg::r201::*;
/// use geoalg::ops::*;
///
/// let l = Point::new(0., 1.).join(Point::new(2., 1.));
///
/// // The line y = 1
/// assert_eq!(l.e1(), 0.);
/// assert_eq!(l.e0() / l.e2(), -1.);
/// ```
pub trait Join<T> {
    type Output;
    fn join(self, r: T) -> Self::Output;
}

/// The lower-dimensional geometry shared between its two operands, i.e. intersection.
///
/// In 2D, two lines meet at a point.
/// In 3D, two planes meet at a line, and a plane and a line meet at a point.
///
/// `Meet` is exception-free.
/// Meeting parallel lines results in an ideal point (point at infinity).
///
/// ```
/// use geoalg::r201::*;
/// use geoalg::ops::*;
///
/// let x_axis = Line::new(0., 1., 0.);
/// let y_axis = Line::new(1., 0., 0.);
/// assert_eq!(y_axis.meet(x_axis), Point::homogeneous(0., 0., 1.));
///
/// // Parallel lines meet at infinity
/// let p = x_axis.meet(Line::new(0., 1., -5.));
/// assert!(p.is_ideal());
/// ```
pub trait Meet<T> {
    type Output;
    fn meet(self, r: T) -> Self::Output;
}

/// Orthogonal projection of A onto B.
///
/// Projecting a point onto a line gives the closest point on the line.
/// Projecting a line onto a point gives the parallel line through the point.
pub trait Project<T> {
    type Output;
    fn project(self, r: T) -> Self::Output;
}

/// Retrieve the higher-dimensional geometry that contains A and is orthogonal to B.
///
/// In 2D, given a point and a line,
/// find the line through the point that crosses the given line at a right angle.
///
/// [Meeting](Meet) B with the result produces the [projection](Project) of A onto B.
pub trait SupersetOrthogonalTo<T> {
    type Output;
    fn superset_orthogonal_to(self, r: T) -> Self::Output;
}

/// Get the ideal element orthogonal to the given element.
///
/// Given a line in 2D, get the direction perpendicular to it.
pub trait OrthogonalComplement {
    type Output;
    fn orthogonal_complement(self) -> Self::Output;
}

/// Transform element A by the rotor, translator or motor B
///
/// The result has the same geometric type as A.
///
/// ```
/// use geoalg::r201::*;
/// use geoalg::ops::*;
///
/// let p = Point::new(1., 2.).transform(Translator::new(3., 4.));
/// assert_eq!((p.x(), p.y()), (4., 6.));
/// ```
pub trait Transform<T> {
    type Output;
    fn transform(self, r: T) -> Self::Output;
}

/// Reflect element A across the line (2D) or plane (3D) B
pub trait Reflect<T> {
    type Output;
    fn reflect(self, r: T) -> Self::Output;
}

/// Compose motions A and B into a new motor whose motion is the result of applying A then B
///
/// Note that motions are composed left-to-right.
/// This is the opposite convention of matrices, which compose right-to-left.
pub trait Compose<T> {
    type Output;
    fn compose(self, r: T) -> Self::Output;
}

/// The motion that undoes the given one
pub trait InverseTransformation {
    type Output;
    fn inverse_transformation(self) -> Self::Output;
}

/// The magnitude of an element
///
/// * For a point, the magnitude of its projective coordinate `e12`
/// * For a line, `√(e1² + e2²)`
/// * For a direction, its Euclidean length
pub trait Norm {
    type Output;
    fn norm(self) -> Self::Output;
}

/// Homogeneously scale an element so that its [norm](Norm) is 1.
///
/// Elements whose norm is zero are returned unchanged.
pub trait Normalized {
    type Output;
    fn normalized(self) -> Self::Output;
}

/// Constructor for the point at the origin
pub trait Origin {
    fn origin() -> Self;
}
