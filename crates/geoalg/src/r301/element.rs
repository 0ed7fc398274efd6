use super::Multivector;
use crate::algebraic_ops::*;
use crate::error::Error;
use crate::ops::*;
use crate::scalar::*;
use core::fmt;

// Coefficient indices within the dense multivector
const S: usize = 0;
const E0: usize = 1;
const E1: usize = 2;
const E2: usize = 3;
const E3: usize = 4;
const E01: usize = 5;
const E02: usize = 6;
const E03: usize = 7;
const E12: usize = 8;
const E31: usize = 9;
const E23: usize = 10;
const E021: usize = 11;
const E013: usize = 12;
const E032: usize = 13;
const E123: usize = 14;
const E0123: usize = 15;

const fn mask(indices: &[usize]) -> u16 {
    let mut m = 0;
    let mut i = 0;
    while i < indices.len() {
        m |= 1 << indices[i];
        i += 1;
    }
    m
}

/// The geometric meaning of an [Element]
///
/// Each role uses a fixed set of coefficients of the dense [Multivector].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// `e1, e2, e3, e0`
    Plane,
    /// `s, e1`
    Hyperbolic,
    /// `s, e0`
    Dual,
    /// `e032, e013, e021, e123`
    Point,
    /// `e032, e013, e021`
    Direction,
    /// `e01, e02, e03, e23, e31, e12`
    Line,
    /// `e01, e02, e03`
    IdealLine,
    /// `e23, e31, e12`, a line through the origin
    Branch,
    /// `s, e01, e02, e03, e23, e31, e12, e0123`
    Motor,
    /// `s, e01, e02, e03`
    Translator,
    /// `s, e23, e31, e12`
    Rotor,
    /// `s, e12`
    Complex,
}

impl Role {
    pub const ALL: [Role; 12] = [
        Role::Plane,
        Role::Hyperbolic,
        Role::Dual,
        Role::Point,
        Role::Direction,
        Role::Line,
        Role::IdealLine,
        Role::Branch,
        Role::Motor,
        Role::Translator,
        Role::Rotor,
        Role::Complex,
    ];

    // Single-grade geometry first, then the numbers and motions.
    // Within each group, roles with fewer blades come first.
    const BY_PREFERENCE: [Role; 12] = [
        Role::Branch,
        Role::IdealLine,
        Role::Direction,
        Role::Plane,
        Role::Point,
        Role::Line,
        Role::Complex,
        Role::Hyperbolic,
        Role::Dual,
        Role::Rotor,
        Role::Translator,
        Role::Motor,
    ];

    /// Bit `i` is set when the role uses coefficient `i`
    pub fn blades(self) -> u16 {
        match self {
            Role::Plane => mask(&[E1, E2, E3, E0]),
            Role::Hyperbolic => mask(&[S, E1]),
            Role::Dual => mask(&[S, E0]),
            Role::Point => mask(&[E032, E013, E021, E123]),
            Role::Direction => mask(&[E032, E013, E021]),
            Role::Line => mask(&[E01, E02, E03, E23, E31, E12]),
            Role::IdealLine => mask(&[E01, E02, E03]),
            Role::Branch => mask(&[E23, E31, E12]),
            Role::Motor => mask(&[S, E01, E02, E03, E23, E31, E12, E0123]),
            Role::Translator => mask(&[S, E01, E02, E03]),
            Role::Rotor => mask(&[S, E23, E31, E12]),
            Role::Complex => mask(&[S, E12]),
        }
    }

    /// True if every blade in the mask is one this role uses
    pub fn covers(self, blades: u16) -> bool {
        self.blades() & blades == blades
    }

    /// The grade of a role made of a single grade
    pub fn grade(self) -> Option<usize> {
        match self {
            Role::Plane => Some(1),
            Role::Line | Role::IdealLine | Role::Branch => Some(2),
            Role::Point | Role::Direction => Some(3),
            _ => None,
        }
    }

    /// The most general role of the given single grade
    pub fn of_grade(k: usize) -> Option<Role> {
        match k {
            1 => Some(Role::Plane),
            2 => Some(Role::Line),
            3 => Some(Role::Point),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Plane => "plane",
            Role::Hyperbolic => "hyperbolic number",
            Role::Dual => "dual number",
            Role::Point => "point",
            Role::Direction => "direction",
            Role::Line => "line",
            Role::IdealLine => "ideal line",
            Role::Branch => "branch",
            Role::Motor => "motor",
            Role::Translator => "translator",
            Role::Rotor => "rotor",
            Role::Complex => "complex number",
        })
    }
}

/// A 3D multivector tagged with its geometric [Role]
///
/// Each variant stores only the coefficients its role uses.
/// Binary operations multiply the dense multivectors
/// and then [classify](Element::classify) the result,
/// failing with [Error::Unclassified] if no role covers its nonzero coefficients.
///
/// ```
/// use geoalg::r301::*;
/// use geoalg::ops::*;
///
/// // Two points join into a line
/// let l = Element::point(0., 0., 0.).join(Element::point(1., 0., 0.)).unwrap();
/// assert_eq!(l.role(), Role::Branch);
///
/// // Two planes meet in a line
/// let l = Element::plane(1., 0., 0., 0.).meet(Element::plane(0., 1., 0., -2.)).unwrap();
/// assert_eq!(l.role(), Role::Line);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element<T> {
    /// The plane `a·x + b·y + c·z + d = 0`, stored as `a e1 + b e2 + c e3 + d e0`
    Plane { a: T, b: T, c: T, d: T },
    /// `re + hy e1`, where `e1² = 1`
    Hyperbolic { re: T, hy: T },
    /// `re + du e0`, where `e0² = 0`
    Dual { re: T, du: T },
    /// The point `(x/w, y/w, z/w)`, stored as `x e032 + y e013 + z e021 + w e123`
    Point { x: T, y: T, z: T, w: T },
    /// A point at infinity, stored as `x e032 + y e013 + z e021`
    Direction { x: T, y: T, z: T },
    Line {
        e01: T,
        e02: T,
        e03: T,
        e23: T,
        e31: T,
        e12: T,
    },
    IdealLine { e01: T, e02: T, e03: T },
    Branch { e23: T, e31: T, e12: T },
    /// A rigid motion (dual quaternion)
    Motor {
        s: T,
        e01: T,
        e02: T,
        e03: T,
        e23: T,
        e31: T,
        e12: T,
        e0123: T,
    },
    Translator { s: T, e01: T, e02: T, e03: T },
    /// A rotation about an axis through the origin (quaternion)
    Rotor { s: T, e23: T, e31: T, e12: T },
    /// `re + im e12`, where `e12² = -1`
    Complex { re: T, im: T },
}

impl<T: Ring> Element<T> {
    pub fn plane(a: T, b: T, c: T, d: T) -> Self {
        Element::Plane { a, b, c, d }
    }

    pub fn point(x: T, y: T, z: T) -> Self {
        Element::Point {
            x,
            y,
            z,
            w: T::one(),
        }
    }

    pub fn direction(x: T, y: T, z: T) -> Self {
        Element::Direction { x, y, z }
    }

    /// A line from its ideal part `e01, e02, e03` and its direction part `e23, e31, e12`
    ///
    /// Returns a [Branch](Element::Branch) when the ideal part is zero
    /// and an [IdealLine](Element::IdealLine) when the direction part is zero.
    pub fn line(e01: T, e02: T, e03: T, e23: T, e31: T, e12: T) -> Self {
        let zero = T::zero();
        if e01 == zero && e02 == zero && e03 == zero {
            Element::branch(e23, e31, e12)
        } else if e23 == zero && e31 == zero && e12 == zero {
            Element::ideal_line(e01, e02, e03)
        } else {
            Element::Line {
                e01,
                e02,
                e03,
                e23,
                e31,
                e12,
            }
        }
    }

    pub fn ideal_line(e01: T, e02: T, e03: T) -> Self {
        Element::IdealLine { e01, e02, e03 }
    }

    pub fn branch(e23: T, e31: T, e12: T) -> Self {
        Element::Branch { e23, e31, e12 }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn motor(s: T, e01: T, e02: T, e03: T, e23: T, e31: T, e12: T, e0123: T) -> Self {
        Element::Motor {
            s,
            e01,
            e02,
            e03,
            e23,
            e31,
            e12,
            e0123,
        }
    }

    pub fn translator(s: T, e01: T, e02: T, e03: T) -> Self {
        Element::Translator { s, e01, e02, e03 }
    }

    pub fn rotor(s: T, e23: T, e31: T, e12: T) -> Self {
        Element::Rotor { s, e23, e31, e12 }
    }

    pub fn hyperbolic(re: T, hy: T) -> Self {
        Element::Hyperbolic { re, hy }
    }

    pub fn complex(re: T, im: T) -> Self {
        Element::Complex { re, im }
    }

    pub fn dual_number(re: T, du: T) -> Self {
        Element::Dual { re, du }
    }

    /// Translation by `distance` along `(x, y, z)`
    pub fn translator_along(distance: T, x: T, y: T, z: T) -> Self
    where
        T: Rational,
    {
        let d = -distance * T::one_half();
        Element::Translator {
            s: T::one(),
            e01: x * d,
            e02: y * d,
            e03: z * d,
        }
    }

    /// Right-handed rotation about the axis `(x, y, z)` through the origin
    ///
    /// ```
    /// use geoalg::r301::*;
    /// use geoalg::ops::*;
    ///
    /// let r = Element::rotor_radians(std::f64::consts::FRAC_PI_2, 0., 0., 1.);
    /// let Element::Point { x, y, z, w } = Element::point(1., 0., 0.).transform(r).unwrap() else {
    ///     panic!("rotating a point gives a point");
    /// };
    /// assert!(x.abs() < 1e-12 && (y - 1.).abs() < 1e-12 && z == 0. && (w - 1.).abs() < 1e-12);
    /// ```
    pub fn rotor_radians(radians: T, x: T, y: T, z: T) -> Self
    where
        T: Rational + Trig<Output = T>,
    {
        let half = radians * T::one_half();
        let (c, s) = (half.cos(), half.sin());
        Element::Rotor {
            s: c,
            e23: -x * s,
            e31: -y * s,
            e12: -z * s,
        }
    }

    pub fn rotor_degrees(degrees: T, x: T, y: T, z: T) -> Self
    where
        T: Rational + Trig<Output = T>,
    {
        let radians = degrees * <T as Trig>::pi() * T::from_fraction(1, 180);
        Element::rotor_radians(radians, x, y, z)
    }

    pub fn role(self) -> Role {
        match self {
            Element::Plane { .. } => Role::Plane,
            Element::Hyperbolic { .. } => Role::Hyperbolic,
            Element::Dual { .. } => Role::Dual,
            Element::Point { .. } => Role::Point,
            Element::Direction { .. } => Role::Direction,
            Element::Line { .. } => Role::Line,
            Element::IdealLine { .. } => Role::IdealLine,
            Element::Branch { .. } => Role::Branch,
            Element::Motor { .. } => Role::Motor,
            Element::Translator { .. } => Role::Translator,
            Element::Rotor { .. } => Role::Rotor,
            Element::Complex { .. } => Role::Complex,
        }
    }

    pub fn to_multivector(self) -> Multivector<T> {
        let zero = Multivector::zero();
        match self {
            Element::Plane { a, b, c, d } => Multivector {
                e1: a,
                e2: b,
                e3: c,
                e0: d,
                ..zero
            },
            Element::Hyperbolic { re, hy } => Multivector {
                s: re,
                e1: hy,
                ..zero
            },
            Element::Dual { re, du } => Multivector {
                s: re,
                e0: du,
                ..zero
            },
            Element::Point { x, y, z, w } => Multivector {
                e032: x,
                e013: y,
                e021: z,
                e123: w,
                ..zero
            },
            Element::Direction { x, y, z } => Multivector {
                e032: x,
                e013: y,
                e021: z,
                ..zero
            },
            Element::Line {
                e01,
                e02,
                e03,
                e23,
                e31,
                e12,
            } => Multivector {
                e01,
                e02,
                e03,
                e23,
                e31,
                e12,
                ..zero
            },
            Element::IdealLine { e01, e02, e03 } => Multivector {
                e01,
                e02,
                e03,
                ..zero
            },
            Element::Branch { e23, e31, e12 } => Multivector {
                e23,
                e31,
                e12,
                ..zero
            },
            Element::Motor {
                s,
                e01,
                e02,
                e03,
                e23,
                e31,
                e12,
                e0123,
            } => Multivector {
                s,
                e01,
                e02,
                e03,
                e23,
                e31,
                e12,
                e0123,
                ..zero
            },
            Element::Translator { s, e01, e02, e03 } => Multivector {
                s,
                e01,
                e02,
                e03,
                ..zero
            },
            Element::Rotor { s, e23, e31, e12 } => Multivector {
                s,
                e23,
                e31,
                e12,
                ..zero
            },
            Element::Complex { re, im } => Multivector {
                s: re,
                e12: im,
                ..zero
            },
        }
    }

    /// Keep only the coefficients of `mv` that `role` uses
    pub fn from_role(role: Role, mv: Multivector<T>) -> Self {
        match role {
            Role::Plane => Element::Plane {
                a: mv.e1,
                b: mv.e2,
                c: mv.e3,
                d: mv.e0,
            },
            Role::Hyperbolic => Element::Hyperbolic {
                re: mv.s,
                hy: mv.e1,
            },
            Role::Dual => Element::Dual {
                re: mv.s,
                du: mv.e0,
            },
            Role::Point => Element::Point {
                x: mv.e032,
                y: mv.e013,
                z: mv.e021,
                w: mv.e123,
            },
            Role::Direction => Element::Direction {
                x: mv.e032,
                y: mv.e013,
                z: mv.e021,
            },
            Role::Line => Element::Line {
                e01: mv.e01,
                e02: mv.e02,
                e03: mv.e03,
                e23: mv.e23,
                e31: mv.e31,
                e12: mv.e12,
            },
            Role::IdealLine => Element::IdealLine {
                e01: mv.e01,
                e02: mv.e02,
                e03: mv.e03,
            },
            Role::Branch => Element::Branch {
                e23: mv.e23,
                e31: mv.e31,
                e12: mv.e12,
            },
            Role::Motor => Element::Motor {
                s: mv.s,
                e01: mv.e01,
                e02: mv.e02,
                e03: mv.e03,
                e23: mv.e23,
                e31: mv.e31,
                e12: mv.e12,
                e0123: mv.e0123,
            },
            Role::Translator => Element::Translator {
                s: mv.s,
                e01: mv.e01,
                e02: mv.e02,
                e03: mv.e03,
            },
            Role::Rotor => Element::Rotor {
                s: mv.s,
                e23: mv.e23,
                e31: mv.e31,
                e12: mv.e12,
            },
            Role::Complex => Element::Complex {
                re: mv.s,
                im: mv.e12,
            },
        }
    }

    /// Assign a role to a dense multivector.
    ///
    /// `expected` is the role the operation normally produces:
    /// the left operand's role for the geometric product and the sandwich,
    /// and the role of the resulting grade for the outer, inner and regressive products and the dual.
    ///
    /// * A zero multivector takes the `expected` role.
    /// * Otherwise the first role that covers every nonzero coefficient is chosen,
    ///   trying the roles of the expected grade (or the expected role itself, if it has no single grade) first.
    /// * Failing that, roles are tried in the order
    ///   branch, ideal line, direction, plane, point, line,
    ///   complex, hyperbolic, dual, rotor, translator, motor,
    ///   so that a single-grade result is read as geometry rather than as a number.
    ///
    /// ```
    /// use geoalg::r301::*;
    ///
    /// let mv = Multivector { s: 1, e12: 2, ..Multivector::zero() };
    /// assert_eq!(Element::classify(mv, None).map(Element::role), Ok(Role::Complex));
    /// assert_eq!(Element::classify(mv, Some(Role::Rotor)).map(Element::role), Ok(Role::Rotor));
    ///
    /// let mv = Multivector { e12: 2, ..Multivector::zero() };
    /// assert_eq!(Element::classify(mv, None).map(Element::role), Ok(Role::Branch));
    /// ```
    pub fn classify(mv: Multivector<T>, expected: Option<Role>) -> Result<Self, Error> {
        let blades = mv.populated_blades();
        if let Some(expected) = expected {
            if blades == 0 {
                return Ok(Element::from_role(expected, mv));
            }
            let preferred = Role::BY_PREFERENCE.into_iter().find(|role| {
                let related = match expected.grade() {
                    Some(k) => role.grade() == Some(k),
                    None => *role == expected,
                };
                related && role.covers(blades)
            });
            if let Some(role) = preferred {
                return Ok(Element::from_role(role, mv));
            }
        }
        match Role::BY_PREFERENCE
            .into_iter()
            .find(|role| role.covers(blades))
        {
            Some(role) => Ok(Element::from_role(role, mv)),
            None => {
                log::debug!("no role covers the blade mask {:#06x}", blades);
                Err(Error::Unclassified { blades })
            }
        }
    }

    /// The role a grade-combining operation produces from the operand grades
    fn expected_role<F: Fn(usize, usize) -> Option<usize>>(self, r: Self, grade: F) -> Role {
        self.role()
            .grade()
            .zip(r.role().grade())
            .and_then(|(a, b)| grade(a, b))
            .and_then(Role::of_grade)
            .unwrap_or(self.role())
    }
}

impl<T: Ring> From<Element<T>> for Multivector<T> {
    fn from(e: Element<T>) -> Multivector<T> {
        e.to_multivector()
    }
}

impl<T: Ring> TryFrom<Multivector<T>> for Element<T> {
    type Error = Error;

    fn try_from(mv: Multivector<T>) -> Result<Self, Error> {
        Element::classify(mv, None)
    }
}

impl<T: Ring> GeometricProduct<Element<T>> for Element<T> {
    type Output = Result<Element<T>, Error>;

    fn geometric_product(self, r: Element<T>) -> Result<Element<T>, Error> {
        Element::classify(self.to_multivector() * r.to_multivector(), Some(self.role()))
    }
}

impl<T: Ring> OuterProduct<Element<T>> for Element<T> {
    type Output = Result<Element<T>, Error>;

    fn outer_product(self, r: Element<T>) -> Result<Element<T>, Error> {
        let expected = self.expected_role(r, |a, b| Some(a + b));
        Element::classify(self.to_multivector() ^ r.to_multivector(), Some(expected))
    }
}

impl<T: Ring> InnerProduct<Element<T>> for Element<T> {
    type Output = Result<Element<T>, Error>;

    fn inner_product(self, r: Element<T>) -> Result<Element<T>, Error> {
        let expected = self.expected_role(r, |a, b| Some(a.abs_diff(b)));
        Element::classify(self.to_multivector() | r.to_multivector(), Some(expected))
    }
}

impl<T: Ring> RegressiveProduct<Element<T>> for Element<T> {
    type Output = Result<Element<T>, Error>;

    fn regressive_product(self, r: Element<T>) -> Result<Element<T>, Error> {
        let expected = self.expected_role(r, |a, b| (a + b).checked_sub(4));
        Element::classify(self.to_multivector() & r.to_multivector(), Some(expected))
    }
}

impl<T: Ring> Dual for Element<T> {
    type Output = Result<Element<T>, Error>;

    fn dual(self) -> Result<Element<T>, Error> {
        let expected = self
            .role()
            .grade()
            .and_then(|k| Role::of_grade(4 - k))
            .unwrap_or(self.role());
        Element::classify(self.to_multivector().dual(), Some(expected))
    }
}

impl<T: Ring> Reverse for Element<T> {
    type Output = Element<T>;

    fn reverse(self) -> Element<T> {
        Element::from_role(self.role(), self.to_multivector().reverse())
    }
}

impl<T: Ring> Sandwich<Element<T>> for Element<T> {
    type Output = Result<Element<T>, Error>;

    fn sandwich(self, r: Element<T>) -> Result<Element<T>, Error> {
        Element::classify(
            self.to_multivector().sandwich(r.to_multivector()),
            Some(self.role()),
        )
    }
}

impl<T: Ring> Join<Element<T>> for Element<T> {
    type Output = Result<Element<T>, Error>;

    fn join(self, r: Element<T>) -> Result<Element<T>, Error> {
        self.regressive_product(r)
    }
}

impl<T: Ring> Meet<Element<T>> for Element<T> {
    type Output = Result<Element<T>, Error>;

    fn meet(self, r: Element<T>) -> Result<Element<T>, Error> {
        self.outer_product(r)
    }
}

impl<T: Ring> Transform<Element<T>> for Element<T> {
    type Output = Result<Element<T>, Error>;

    fn transform(self, r: Element<T>) -> Result<Element<T>, Error> {
        self.sandwich(r)
    }
}

/// Scaling keeps the role
impl<T: Ring> core::ops::Mul<T> for Element<T> {
    type Output = Element<T>;

    fn mul(self, r: T) -> Element<T> {
        Element::from_role(self.role(), self.to_multivector() * r)
    }
}
