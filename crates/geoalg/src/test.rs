#![cfg(all(test, feature = "std"))]

use crate::algebraic_ops::*;
use crate::ops::*;
use crate::{r201, r301, Error};

macro_rules! assert_close {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                assert!(
                    (*left_val).is_close(*right_val),
                    "{:?} !~= {:?}",
                    left_val,
                    right_val
                );
            }
        }
    };
}

trait IsClose {
    fn is_close(self, rhs: Self) -> bool;
}

impl IsClose for f64 {
    fn is_close(self, rhs: f64) -> bool {
        (self - rhs).abs() < 1e-9
    }
}

impl IsClose for r201::Multivector<f64> {
    fn is_close(self, rhs: Self) -> bool {
        (self - rhs).coefficients().into_iter().all(|c| c.abs() < 1e-9)
    }
}

impl IsClose for r201::Point<f64> {
    fn is_close(self, rhs: Self) -> bool {
        self.x().is_close(rhs.x()) && self.y().is_close(rhs.y())
    }
}

fn mv2(c: [i64; 8]) -> r201::Multivector<i64> {
    r201::Multivector::from_coefficients(c)
}

// One multivector per basis blade, in coefficient order
fn basis2() -> [r201::Multivector<i64>; 8] {
    core::array::from_fn(|i| {
        let mut c = [0; 8];
        c[i] = 1;
        mv2(c)
    })
}

fn a2() -> r201::Multivector<i64> {
    mv2([11, 12, 13, 14, 15, 16, 17, 18])
}

fn b2() -> r201::Multivector<i64> {
    mv2([1, 2, 3, 4, 5, 6, 7, 8])
}

#[test]
fn test_geometric_product_2d() {
    let b = b2();
    let expected = [
        [1, 2, 3, 4, 5, 6, 7, 8],
        [2, 1, 7, -6, 8, -4, 3, 5],
        [3, -7, 1, 5, 4, 8, -2, 6],
        [0, 0, 0, 1, -3, 2, 0, 7],
        [0, 0, 0, -3, 1, 7, 0, 2],
        [0, 0, 0, 2, -7, 1, 0, 3],
        [-7, 3, -2, -8, 6, -5, 1, 4],
        [0, 0, 0, -7, 2, 3, 0, 1],
    ];
    for (e, expected) in basis2().into_iter().zip(expected) {
        assert_eq!(e * b, mv2(expected), "{} * b", e);
    }
    assert_eq!(a2() * b, mv2([-45, -6, 96, -224, 202, 240, 104, 488]));
}

#[test]
fn test_outer_product_2d() {
    let b = b2();
    let expected = [
        [1, 2, 3, 4, 5, 6, 7, 8],
        [0, 1, 0, 0, 0, -4, 3, 5],
        [0, 0, 1, 0, 4, 0, -2, 6],
        [0, 0, 0, 1, -3, 2, 0, 7],
        [0, 0, 0, 0, 1, 0, 0, 2],
        [0, 0, 0, 0, 0, 1, 0, 3],
        [0, 0, 0, 0, 0, 0, 1, 4],
        [0, 0, 0, 0, 0, 0, 0, 1],
    ];
    for (e, expected) in basis2().into_iter().zip(expected) {
        assert_eq!(e ^ b, mv2(expected), "{} ^ b", e);
    }
    assert_eq!(a2() ^ b, mv2([11, 34, 46, 58, 80, 62, 104, 488]));
}

#[test]
fn test_inner_product_2d() {
    let b = b2();
    let expected = [
        [1, 2, 3, 4, 5, 6, 7, 8],
        [2, 1, 7, -6, 8, 0, 0, 0],
        [3, -7, 1, 5, 0, 8, 0, 0],
        [0, 0, 0, 1, 0, 0, 0, 0],
        [0, 0, 0, -3, 1, 0, 0, 0],
        [0, 0, 0, 2, 0, 1, 0, 0],
        [-7, 3, -2, -8, 0, 0, 1, 0],
        [0, 0, 0, -7, 2, 3, 0, 1],
    ];
    for (e, expected) in basis2().into_iter().zip(expected) {
        assert_eq!(e | b, mv2(expected), "{} | b", e);
    }
    assert_eq!(a2() | b, mv2([-45, -6, 96, -224, 202, 240, 94, 106]));
}

#[test]
fn test_regressive_product_2d() {
    let b = b2();
    let expected = [
        [8, 0, 0, 0, 0, 0, 0, 0],
        [5, 8, 0, 0, 0, 0, 0, 0],
        [6, 0, 8, 0, 0, 0, 0, 0],
        [7, 0, 0, 8, 0, 0, 0, 0],
        [2, 0, 7, -6, 8, 0, 0, 0],
        [3, -7, 0, 5, 0, 8, 0, 0],
        [4, 6, -5, 0, 0, 0, 8, 0],
        [1, 2, 3, 4, 5, 6, 7, 8],
    ];
    for (e, expected) in basis2().into_iter().zip(expected) {
        assert_eq!(e & b, mv2(expected), "{} & b", e);
    }
    assert_eq!(a2() & b, mv2([488, 122, 178, 174, 210, 236, 262, 144]));
}

#[test]
fn test_sandwich_2d() {
    let b = b2();
    let expected = [
        [1, 2, 3, 4, 5, 6, 7, 8],
        [1, 2, -3, -4, 5, -6, -7, 8],
        [1, -2, 3, -4, -5, 6, -7, 8],
        [0; 8],
        [0; 8],
        [0; 8],
        [1, -2, -3, 4, -5, -6, 7, 8],
        [0; 8],
    ];
    for (e, expected) in basis2().into_iter().zip(expected) {
        assert_eq!(b.sandwich(e), mv2(expected), "b sandwiched by {}", e);
    }
    assert_eq!(
        b.sandwich(a2()),
        mv2([2449, 2378, -675, 5792, 15533, 3498, 679, 15540])
    );
}

#[test]
fn test_unary_2d() {
    let b = b2();
    assert_eq!(b.reverse(), mv2([1, 2, 3, 4, -5, -6, -7, -8]));
    assert_eq!(b.involute(), mv2([1, -2, -3, -4, 5, 6, 7, -8]));
    assert_eq!(b.conjugate(), mv2([1, -2, -3, -4, -5, -6, -7, 8]));
    assert_eq!(b.dual(), mv2([8, 7, 6, 5, 4, 3, 2, 1]));
    assert_eq!(b.grade(1), mv2([0, 2, 3, 4, 0, 0, 0, 0]));
}

#[test]
fn test_display_2d() {
    assert_eq!(mv2([1, 2, 0, 0, 0, 0, 0, -3]).to_string(), "1 + 2e1 + -3i");
    assert_eq!(r201::Multivector::<i64>::zero().to_string(), "0");
    assert_eq!(
        r201::Line::new(1, -1, 0).multivector().to_string(),
        "1e1 + -1e2"
    );
}

#[test]
fn test_inverse_2d() {
    let b = r201::Multivector::<f64>::from_coefficients([1., 2., 3., 4., 5., 6., 7., 8.]);
    assert_close!(b * b.inverse(), r201::Multivector::scalar(1.));
    assert_close!(b.inverse() * b, r201::Multivector::scalar(1.));

    // A unit rotor inverts to its reverse
    let r = r201::Rotor::new(0.7).multivector();
    assert_close!(r.inverse(), r.reverse());

    // Points square to a negative scalar and so invert to themselves, rescaled
    let p = r201::Point::new(3., 4.).multivector();
    assert_close!(p * p.inverse(), r201::Multivector::scalar(1.));

    assert!(!r201::Multivector::<f64>::zero().inverse().is_finite());
    assert_eq!(r201::Multivector::<f64>::zero().try_inverse(), None);

    // Ideal elements are not invertible
    let d = r201::Direction::new(1., 0.).multivector();
    assert_eq!(d.try_inverse(), None);
}

#[test]
fn test_join_meet_2d() {
    let p1 = r201::Point::new(20., 20.);
    let p2 = r201::Point::new(150., 80.);
    let l = p1.join(p2);
    assert_eq!(l, r201::Line::new(60., -130., 1400.));

    let m = r201::Point::origin().join(p1);
    assert_eq!(m, r201::Line::new(20., -20., 0.));
    let p = l.meet(m);
    assert_eq!(p, r201::Point::homogeneous(28000., 28000., 1400.));
    assert_close!(p, p1);

    // Coincident points join into a line of zero norm
    assert_eq!(p1.join(p1).norm(), 0.);

    // Parallel lines meet at an ideal point
    let q = l.meet(r201::Line::new(60., -130., 0.));
    assert!(q.is_ideal());
    assert_eq!(q.weight(), 0.);
}

#[test]
fn test_projection_2d() {
    let l = r201::Point::new(20., 20.).join(r201::Point::new(150., 80.));
    let p = r201::Point::new(0., 100.);

    let foot = p.project(l);
    assert_eq!(
        foot,
        r201::Point::homogeneous(-696000., -542000., -20500.)
    );
    // The foot lies on the line
    assert_close!(
        60. * foot.x() - 130. * foot.y() + 1400.,
        0.
    );

    let perpendicular = p.superset_orthogonal_to(l);
    assert_eq!(perpendicular, r201::Line::new(130., 60., -6000.));
    assert_close!(perpendicular.meet(l), foot);

    assert_eq!(l.project(p), r201::Line::new(-60., 130., -13000.));
    assert_eq!(l.orthogonal_complement(), r201::Direction::new(60., -130.));
}

#[test]
fn test_reflection_2d() {
    let l = r201::Point::new(20., 20.).join(r201::Point::new(150., 80.));
    let m = r201::Point::origin().join(r201::Point::new(20., 20.));

    let reflected = l.reflect(m);
    assert_eq!(reflected, r201::Line::new(104000., -48000., -1120000.));
    // The mirror image still passes through the point on the mirror
    assert_close!(l.meet(reflected), r201::Point::new(20., 20.));

    let p = r201::Point::new(3., 4.).reflect(r201::Line::new(1., 0., 0.));
    assert_eq!(p, r201::Point::homogeneous(3., -4., -1.));
    assert_close!(p, r201::Point::new(-3., 4.));
}

#[test]
fn test_norms_2d() {
    assert_eq!(r201::Point::homogeneous(2., 4., 2.).norm(), 2.);
    assert_eq!(r201::Point::homogeneous(2., 4., -3.).norm(), 3.);
    assert_eq!(r201::Line::new(3., 4., 5.).norm(), 5.);
    assert_eq!(r201::Direction::new(3., 4.).norm(), 5.);
}

#[test]
fn test_motions_2d() {
    use core::f64::consts::{FRAC_PI_2, PI};

    let p = r201::Point::new(1., 0.);
    assert_close!(p.rotate(FRAC_PI_2), r201::Point::new(0., 1.));
    assert_close!(p.rotate(-FRAC_PI_2), r201::Point::new(0., -1.));
    assert_close!(p.rotate(PI), r201::Point::new(-1., 0.));

    let r = r201::Rotor::with_center(FRAC_PI_2, 2., 1.);
    assert_close!(r201::Point::new(3., 1.).transform(r), r201::Point::new(2., 2.));
    // The center is fixed
    assert_close!(r201::Point::new(2., 1.).transform(r), r201::Point::new(2., 1.));

    let t = r201::Translator::new(3., 4.);
    assert_eq!(r201::Point::new(1., 2.).transform(t), r201::Point::new(4., 6.));
    // Directions are unaffected by translation
    let d = r201::Direction::new(1., 1.);
    assert_eq!(d.transform(t), d);

    let t = r201::Translator::along(r201::Direction::new(0., 2.), 5.);
    assert_close!(r201::Point::origin().transform(t), r201::Point::new(0., 5.));

    // Lines move with their points
    let l = r201::Point::new(0., 0.).join(r201::Point::new(1., 0.));
    let moved = l.transform(r201::Translator::new(0., 3.));
    assert_close!(moved.meet(r201::Line::new(1., 0., 0.)), r201::Point::new(0., 3.));
}

#[test]
fn test_compose_2d() {
    use core::f64::consts::FRAC_PI_2;

    let r = r201::Rotor::new(FRAC_PI_2);
    let t = r201::Translator::new(1., 0.);
    let p = r201::Point::new(1., 0.);

    // Rotate, then translate
    assert_close!(p.transform(r.compose(t)), r201::Point::new(1., 1.));
    // Translate, then rotate
    assert_close!(p.transform(t.compose(r)), r201::Point::new(0., 2.));

    let m = r.compose(t);
    assert_close!(
        p.transform(m).transform(m.inverse_transformation()),
        p
    );
    assert_close!(
        p.transform(t).transform(t.inverse_transformation()),
        p
    );
    assert_eq!(
        r201::Motor::identity().compose(t).multivector(),
        t.multivector()
    );
}

#[test]
fn test_exp_2d() {
    let theta = 0.9;
    let generator = r201::Multivector {
        e12: -theta / 2.,
        ..r201::Multivector::zero()
    };
    assert_close!(
        r201::Motor::from_bivector(generator).multivector(),
        r201::Rotor::new(theta).multivector()
    );

    let generator = r201::Multivector {
        e20: 4. / 2.,
        e01: -3. / 2.,
        ..r201::Multivector::zero()
    };
    assert_close!(
        r201::Motor::from_bivector(generator).multivector(),
        r201::Translator::new(3., 4.).multivector()
    );

    // Non-bivector parts are ignored
    assert_close!(
        r201::Multivector::scalar(5.).exp(),
        r201::Multivector::scalar(1.)
    );
}

#[test]
fn test_clip_2d() {
    let viewport = r201::Rect::new(0., 0., 100., 50.);

    let chord = r201::Line::new(0., 1., -25.).clip(viewport).unwrap();
    assert_close!(chord.start, r201::Point::new(0., 25.));
    assert_close!(chord.end, r201::Point::new(100., 25.));

    // Through a corner only
    assert_eq!(r201::Line::new(1., 1., 0.).clip(viewport), None);

    // Along the diagonal, corner to corner
    let chord = r201::Line::new(1., -2., 0.).clip(viewport).unwrap();
    assert_close!(chord.start, r201::Point::new(0., 0.));
    assert_close!(chord.end, r201::Point::new(100., 50.));

    // The ideal line has no chord
    assert_eq!(r201::Line::new(0., 0., 1.).clip(viewport), None);
}

#[test]
fn test_clip_diagonals_2d() {
    // Corner-to-corner chords survive rounding in the edge intersections
    for i in 1..=199 {
        for j in 1..=199 {
            let (x0, y0) = (0.1, 0.2);
            let (x1, y1) = (x0 + i as f64 * 0.37, y0 + j as f64 * 0.13);
            let rect = r201::Rect::new(x0, y0, x1, y1);

            let diagonal = r201::Point::new(x0, y0).join(r201::Point::new(x1, y1));
            let chord = diagonal
                .clip(rect)
                .unwrap_or_else(|| panic!("no chord for the diagonal of {:?}", rect));
            assert_close!(chord.start, r201::Point::new(x0, y0));
            assert_close!(chord.end, r201::Point::new(x1, y1));

            let anti = r201::Point::new(x0, y1).join(r201::Point::new(x1, y0));
            let chord = anti
                .clip(rect)
                .unwrap_or_else(|| panic!("no chord for the anti-diagonal of {:?}", rect));
            assert_close!(chord.start, r201::Point::new(x0, y1));
            assert_close!(chord.end, r201::Point::new(x1, y0));
        }
    }
}

fn dense3(role: r301::Role, seed: i64) -> r301::Element<i64> {
    let mut c = [0; 16];
    for (i, c) in c.iter_mut().enumerate() {
        let i = i as i64;
        *c = (seed + 3 * i) * if i % 2 == 0 { 1 } else { -1 };
    }
    r301::Element::from_role(role, r301::Multivector::from_coefficients(c))
}

fn check_classified(
    result: Result<r301::Element<i64>, Error>,
    dense: r301::Multivector<i64>,
) {
    match result {
        Ok(e) => {
            assert_eq!(e.to_multivector(), dense);
            assert_eq!(e.role().blades() & dense.populated_blades(), dense.populated_blades());
        }
        Err(Error::Unclassified { blades }) => {
            assert_eq!(blades, dense.populated_blades());
            assert!(r301::Role::ALL
                .into_iter()
                .all(|role| role.blades() & blades != blades));
        }
        Err(e) => panic!("unexpected error {:?}", e),
    }
}

#[test]
fn test_element_products_match_dense() {
    for lhs in r301::Role::ALL {
        for rhs in r301::Role::ALL {
            let a = dense3(lhs, 1);
            let b = dense3(rhs, 2);
            let (ma, mb) = (a.to_multivector(), b.to_multivector());

            check_classified(a.geometric_product(b), ma * mb);
            check_classified(a.outer_product(b), ma ^ mb);
            check_classified(a.inner_product(b), ma | mb);
            check_classified(a.regressive_product(b), ma & mb);
            check_classified(a.sandwich(b), ma.sandwich(mb));
        }
    }
}

#[test]
fn test_element_constructors() {
    use r301::Element;

    let p = Element::point(2, 3, 4).to_multivector();
    assert_eq!((p.e032, p.e013, p.e021, p.e123), (2, 3, 4, 1));

    let d = Element::direction(2, 3, 4).to_multivector();
    assert_eq!((d.e032, d.e013, d.e021, d.e123), (2, 3, 4, 0));

    let pl = Element::plane(1, 2, 3, 4).to_multivector();
    assert_eq!((pl.e1, pl.e2, pl.e3, pl.e0), (1, 2, 3, 4));

    assert_eq!(Element::line(0, 0, 0, 1, 2, 3), Element::branch(1, 2, 3));
    assert_eq!(Element::line(1, 2, 3, 0, 0, 0), Element::ideal_line(1, 2, 3));
    assert_eq!(Element::line(1, 0, 0, 0, 0, 1).role(), r301::Role::Line);

    let angle = core::f64::consts::FRAC_PI_2;
    let Element::Rotor { s, e23, e31, e12 } = Element::rotor_radians(angle, 1., 2., 3.) else {
        panic!("expected a rotor");
    };
    let (c, sn) = ((angle / 2.).cos(), (angle / 2.).sin());
    assert_close!(s, c);
    assert_close!(e23, -sn);
    assert_close!(e31, -2. * sn);
    assert_close!(e12, -3. * sn);

    let radians = Element::rotor_radians(angle, 0., 0., 1.);
    let Element::Rotor { s, e12, .. } = Element::rotor_degrees(90., 0., 0., 1.) else {
        panic!("expected a rotor");
    };
    let Element::Rotor { s: s2, e12: e12_2, .. } = radians else {
        panic!("expected a rotor");
    };
    assert_close!(s, s2);
    assert_close!(e12, e12_2);

    assert_eq!(
        Element::translator_along(1., 2., 3., 4.),
        Element::translator(1., -1., -1.5, -2.)
    );
}

#[test]
fn test_element_motions() {
    use core::f64::consts::FRAC_PI_2;
    use r301::Element;

    let p = Element::point(1., 0., 0.);
    let Ok(Element::Point { x, y, z, w }) = p.transform(Element::rotor_radians(FRAC_PI_2, 0., 0., 1.)) else {
        panic!("rotating a point gives a point");
    };
    assert_close!(x / w, 0.);
    assert_close!(y / w, 1.);
    assert_close!(z / w, 0.);

    let t = Element::translator_along(2., 1., 0., 0.);
    assert_eq!(p.transform(t), Ok(Element::point(3., 0., 0.)));

    // Directions ignore translation
    let d = Element::direction(0., 1., 0.);
    assert_eq!(d.transform(t), Ok(d));
}

#[test]
fn test_element_incidence() {
    use r301::{Element, Role};

    assert_eq!(
        Element::point(0, 0, 0).join(Element::point(1, 0, 0)),
        Ok(Element::branch(1, 0, 0))
    );
    assert_eq!(
        Element::plane(1, 0, 0, 0).meet(Element::plane(0, 1, 0, -2)),
        Ok(Element::line(2, 0, 0, 0, 0, 1))
    );
    // Parallel planes meet in a line at infinity
    assert_eq!(
        Element::plane(1, 0, 0, 0).meet(Element::plane(1, 0, 0, -1)),
        Ok(Element::ideal_line(1, 0, 0))
    );

    // Axis-aligned elements
    assert_eq!(
        Element::plane(1, 0, 0, 0).meet(Element::plane(0, 1, 0, 0)),
        Ok(Element::branch(0, 0, 1))
    );
    assert_eq!(
        Element::point(0, 0, 0).join(Element::point(0, 0, 1)),
        Ok(Element::branch(0, 0, 1))
    );
    let z = Element::point(0, 0, 0).join(Element::point(0, 1, 0)).unwrap();
    assert_eq!(z.join(Element::point(0, 0, 1)), Ok(Element::plane(-1, 0, 0, 0)));

    // A zero result keeps the role the operation produces
    let zero = Element::point(1, 2, 3).join(Element::point(1, 2, 3)).unwrap();
    assert_eq!(zero.role(), Role::Line);
    assert_eq!(zero.to_multivector(), r301::Multivector::zero());

    // A point joined with a line through it vanishes
    let l = Element::point(0, 0, 0).join(Element::point(1, 0, 0)).unwrap();
    let on_line = l.join(Element::point(5, 0, 0)).unwrap();
    assert_eq!(on_line.role(), Role::Plane);
    assert_eq!(on_line.to_multivector(), r301::Multivector::zero());
}

#[test]
fn test_element_numbers() {
    use r301::Element;

    assert_eq!(
        Element::complex(1, 2).geometric_product(Element::complex(3, 4)),
        Ok(Element::complex(-5, 10))
    );
    assert_eq!(
        Element::dual_number(1, 2).geometric_product(Element::dual_number(3, 4)),
        Ok(Element::dual_number(3, 10))
    );
    assert_eq!(
        Element::hyperbolic(1, 2).geometric_product(Element::hyperbolic(3, 4)),
        Ok(Element::hyperbolic(11, 10))
    );

    // Two points multiply into a translator
    assert_eq!(
        Element::point(1, 2, 3).geometric_product(Element::point(4, 5, 6)),
        Ok(Element::translator(-1, -3, -3, -3))
    );

    // Dual of a plane is a point
    assert_eq!(
        Element::plane(1, 2, 3, 4).dual(),
        Ok(r301::Element::Point { x: 1, y: 2, z: 3, w: 4 })
    );

    assert_eq!(Element::point(1, 2, 3) * 2, Element::Point { x: 2, y: 4, z: 6, w: 2 });
}

#[test]
fn test_element_classification() {
    use r301::{Element, Multivector, Role};

    let mv = Multivector {
        e1: 1,
        e123: 1,
        ..Multivector::zero()
    };
    let err = Element::try_from(mv).unwrap_err();
    assert_eq!(err, Error::Unclassified { blades: (1 << 2) | (1 << 14) });
    assert_eq!(err.to_string(), "no geometric role covers the blades [e1, e123]");

    // Single-grade results read as geometry, the rest as the smallest number or motion
    let mv = Multivector { s: 2, ..Multivector::zero() };
    assert_eq!(Element::try_from(mv).map(Element::role), Ok(Role::Complex));
    let mv = Multivector { e12: 2, ..Multivector::zero() };
    assert_eq!(Element::try_from(mv).map(Element::role), Ok(Role::Branch));
    let mv = Multivector { e1: 2, ..Multivector::zero() };
    assert_eq!(Element::try_from(mv).map(Element::role), Ok(Role::Plane));
    let mv = Multivector { e0: 2, ..Multivector::zero() };
    assert_eq!(Element::try_from(mv).map(Element::role), Ok(Role::Plane));
    let mv = Multivector { s: 1, e0: 2, ..Multivector::zero() };
    assert_eq!(Element::try_from(mv).map(Element::role), Ok(Role::Dual));
    let mv = Multivector { e23: 2, ..Multivector::zero() };
    assert_eq!(Element::try_from(mv).map(Element::role), Ok(Role::Branch));
    let mv = Multivector { e0123: 2, ..Multivector::zero() };
    assert_eq!(Element::try_from(mv).map(Element::role), Ok(Role::Motor));

    // The expected role is tried first
    let mv = Multivector { e12: 2, ..Multivector::zero() };
    assert_eq!(Element::classify(mv, Some(Role::Complex)).map(Element::role), Ok(Role::Complex));
    assert_eq!(Element::classify(mv, Some(Role::Rotor)).map(Element::role), Ok(Role::Rotor));
    assert_eq!(Element::classify(mv, Some(Role::Line)).map(Element::role), Ok(Role::Branch));
    // and skipped when it does not cover the result
    assert_eq!(Element::classify(mv, Some(Role::Dual)).map(Element::role), Ok(Role::Branch));

    // A rotor squared stays a rotor even when only e12 survives
    assert_eq!(
        Element::rotor(1, 0, 0, 1).geometric_product(Element::rotor(1, 0, 0, 1)),
        Ok(Element::Rotor { s: 0, e23: 0, e31: 0, e12: 2 })
    );
}

#[test]
fn test_element_dual() {
    use r301::Element;

    // Points and planes
    assert_eq!(
        Element::point(0, 0, 0).dual(),
        Ok(Element::Plane { a: 0, b: 0, c: 0, d: 1 })
    );
    assert_eq!(
        Element::point(1, 2, 3).dual(),
        Ok(Element::Plane { a: 1, b: 2, c: 3, d: 1 })
    );
    assert_eq!(
        Element::plane(0, 0, 0, 1).dual(),
        Ok(Element::Point { x: 0, y: 0, z: 0, w: 1 })
    );
    assert_eq!(
        Element::plane(0, 0, 0, 1).dual().and_then(|p| p.dual()),
        Ok(Element::plane(0, 0, 0, 1))
    );
    assert_eq!(
        Element::point(1, 2, 3).dual().and_then(|p| p.dual()),
        Ok(Element::point(1, 2, 3))
    );

    // Directions and planes through the origin
    assert_eq!(Element::direction(1, 0, 0).dual(), Ok(Element::plane(1, 0, 0, 0)));
    assert_eq!(Element::direction(0, 0, 3).dual(), Ok(Element::plane(0, 0, 3, 0)));
    assert_eq!(Element::plane(1, 0, 0, 0).dual(), Ok(Element::direction(1, 0, 0)));
    assert_eq!(Element::plane(0, 2, 0, 0).dual(), Ok(Element::direction(0, 2, 0)));

    // Lines
    assert_eq!(Element::branch(1, 2, 3).dual(), Ok(Element::ideal_line(1, 2, 3)));
    assert_eq!(Element::ideal_line(1, 2, 3).dual(), Ok(Element::branch(1, 2, 3)));
}

#[test]
fn test_polar() {
    use core::f64::consts::FRAC_PI_2;
    use r301::{Element, Polar, Role};

    let p = Element::complex(3., 4.).to_polar().unwrap();
    assert_close!(p.norm, 5.);
    assert_close!(p.angle, 4f64.atan2(3.));

    let Element::Complex { re, im } = Polar::new(2., FRAC_PI_2).euler() else {
        panic!("expected a complex number");
    };
    assert_close!(re, 0.);
    assert_close!(im, 2.);

    let q = Polar::new(2., 0.5) * Polar::new(3., 0.25);
    assert_eq!(q, Polar::new(6., 0.75));
    assert_eq!(2. * Polar::new(1.5, 1.), Polar::new(3., 1.));

    let err = Element::rotor(1., 0., 0., 0.).to_polar().unwrap_err();
    assert_eq!(
        err,
        Error::RoleMismatch {
            expected: Role::Complex,
            found: Role::Rotor
        }
    );
    assert_eq!(err.to_string(), "expected a complex number but found a rotor");
}
