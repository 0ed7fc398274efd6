//! Errors from the typed 3D operations
//!
//! The numeric core is exception-free:
//! degenerate joins and meets produce ideal or zero-weight elements
//! rather than errors.
//! Only operations that must assign a geometric [Role] to their result can fail.

use crate::r301::{Multivector, Role};
use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The populated blades of a result (bit `i` for coefficient `i`)
    /// do not fit any [Role]
    Unclassified { blades: u16 },
    /// The operation is only defined for elements of the `expected` role
    RoleMismatch { expected: Role, found: Role },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unclassified { blades } => {
                f.write_str("no geometric role covers the blades [")?;
                let names = Multivector::<f64>::BLADES
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| *blades & (1u16 << i) != 0);
                for (count, (_, name)) in names.enumerate() {
                    if count > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(name)?;
                }
                f.write_str("]")
            }
            Error::RoleMismatch { expected, found } => {
                write!(f, "expected a {} but found a {}", expected, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
