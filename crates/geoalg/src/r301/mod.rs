//! Rigid Euclidean 3D geometry in the algebra R(3,0,1)
//!
//! The dense [Multivector] has sixteen coefficients, ordered
//!
//! `s, e0, e1, e2, e3, e01, e02, e03, e12, e31, e23, e021, e013, e032, e123, e0123`
//!
//! so that the [dual](crate::algebraic_ops::Dual) (the reversal of this list)
//! takes the plane `a e1 + b e2 + c e3 + d e0` to the point
//! `a e032 + b e013 + c e021 + d e123`.
//!
//! Most 3D work happens through [Element],
//! which tags a multivector with the geometric [Role] it plays
//! and stores only the coefficients that role uses.
//! Products between elements are computed densely
//! and the role of the result is recovered from the coefficients it populates.

use crate::algebraic_ops::*;
use crate::scalar::*;
use geoalg_macros::geometric_algebra;

mod element;
mod polar;

pub use element::{Element, Role};
pub use polar::Polar;

geometric_algebra! {
    basis![e0, e1, e2, e3];
    metric![0, 1, 1, 1];

    #[multivector]
    #[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
    pub struct Multivector<T> {
        pub s: T,
        pub e0: T,
        pub e1: T,
        pub e2: T,
        pub e3: T,
        pub e01: T,
        pub e02: T,
        pub e03: T,
        pub e12: T,
        pub e31: T,
        pub e23: T,
        pub e021: T,
        pub e013: T,
        pub e032: T,
        pub e123: T,
        pub e0123: T,
    }
}

impl<T: Ring> Multivector<T> {
    /// Bit `i` is set when coefficient `i` is nonzero
    pub fn populated_blades(self) -> u16 {
        self.coefficients()
            .into_iter()
            .enumerate()
            .filter(|&(_, c)| c != T::zero())
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }
}
