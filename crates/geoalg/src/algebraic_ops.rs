//! Low-level geometric algebra operations
//!
//! These follow the classical plane-based conventions:
//! vectors are lines (2D) or planes (3D),
//! the inner product keeps the grade |r - s| part of the geometric product (scalars included),
//! and the dual is the reversal of the coefficient list.
//!
//! Consider using the aliases in the [ops](crate::ops) module when available,
//! for code that reflects the geometric interpretation.
//! (e.g. when intersecting two lines, prefer `l1.meet(l2)` over `l1.outer_product(l2)`)

/// The geometric product A B
///
/// Also available as the `*` operator on multivectors.
pub trait GeometricProduct<T> {
    type Output;
    fn geometric_product(self, r: T) -> Self::Output;
}

/// The outer (wedge) product A ∧ B, keeping grade r + s
///
/// Also available as the `^` operator on multivectors.
pub trait OuterProduct<T> {
    type Output;
    fn outer_product(self, r: T) -> Self::Output;
}

/// The inner product A · B, keeping grade |r - s|
///
/// Also available as the `|` operator on multivectors.
pub trait InnerProduct<T> {
    type Output;
    fn inner_product(self, r: T) -> Self::Output;
}

/// The regressive (vee) product A ∨ B = (A* ∧ B*)*
///
/// Also available as the `&` operator on multivectors.
pub trait RegressiveProduct<T> {
    type Output;
    fn regressive_product(self, r: T) -> Self::Output;
}

/// The dual A*, mapping grade k onto grade n - k
pub trait Dual {
    type Output;
    fn dual(self) -> Self::Output;
}

/// The reverse Ã, negating grades whose blade factors reverse with an odd permutation
/// (grades 2 and 3)
pub trait Reverse {
    type Output;
    fn reverse(self) -> Self::Output;
}

/// The grade involution Â, negating odd grades
pub trait Involute {
    type Output;
    fn involute(self) -> Self::Output;
}

/// The Clifford conjugate A̅ = reverse(involute(A)), negating grades 1 and 2
pub trait Conjugate {
    type Output;
    fn conjugate(self) -> Self::Output;
}

/// The multiplicative inverse A⁻¹ such that A A⁻¹ = 1
pub trait Inverse {
    type Output;
    fn inverse(self) -> Self::Output;
}

/// The sandwich product R A R̃, applying the versor R to A
///
/// `a.sandwich(r)` transforms `a` by `r`.
pub trait Sandwich<T> {
    type Output;
    fn sandwich(self, r: T) -> Self::Output;
}

/// The exponential e^A of a bivector generator
///
/// Maps an infinitesimal rotation or translation to the finite motor that performs it.
pub trait Exp {
    type Output;
    fn exp(self) -> Self::Output;
}
