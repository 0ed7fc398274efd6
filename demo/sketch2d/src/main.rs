//! geoalg sketch demo
//!
//! Builds a small construction in the plane and writes it to stdout as SVG:
//! the line through two points, the projection of a third point onto it,
//! the perpendicular through that point, and the line mirrored and rotated about the first point.
//!
//! `cargo run -p sketch2d > sketch.svg`

use geoalg::ops::*;
use geoalg::r201::{Line, Point, Rect, Rotor};
use std::fmt::{self, Write as _};
use std::io::{self, Write};

const WIDTH: f64 = 200.;
const HEIGHT: f64 = 150.;

struct Svg {
    body: String,
    viewport: Rect<f64>,
}

impl Svg {
    fn new(viewport: Rect<f64>) -> Self {
        Svg {
            body: String::new(),
            viewport,
        }
    }

    // SVG's y axis points down
    fn flip(&self, p: Point<f64>) -> (f64, f64) {
        (p.x(), self.viewport.max_y - p.y())
    }

    fn line(&mut self, l: Line<f64>, color: &str) {
        let Some(segment) = l.clip(self.viewport) else {
            log::debug!("{:?} is outside the viewport", l);
            return;
        };
        let (x1, y1) = self.flip(segment.start);
        let (x2, y2) = self.flip(segment.end);
        self.push(format_args!(
            r#"  <line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{color}" />"#
        ));
    }

    fn point(&mut self, p: Point<f64>, color: &str) {
        if p.is_ideal() {
            log::debug!("{:?} is at infinity", p);
            return;
        }
        let (x, y) = self.flip(p);
        self.push(format_args!(
            r#"  <circle cx="{x:.2}" cy="{y:.2}" r="2" fill="{color}" />"#
        ));
    }

    fn push(&mut self, element: fmt::Arguments<'_>) {
        // Writing to a String cannot fail
        let _ = self.body.write_fmt(element);
        self.body.push('\n');
    }

    fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
            self.viewport.max_x - self.viewport.min_x,
            self.viewport.max_y - self.viewport.min_y
        )?;
        out.write_all(self.body.as_bytes())?;
        writeln!(out, "</svg>")
    }
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut svg = Svg::new(Rect::new(0., 0., WIDTH, HEIGHT));

    for i in 1..10 {
        let k = i as f64 * 20.;
        svg.line(Line::new(1., 0., -k), "#eee");
        svg.line(Line::new(0., 1., -k), "#eee");
    }

    let p1 = Point::new(20., 20.);
    let p2 = Point::new(150., 80.);
    let p3 = Point::new(0., 100.);

    let l = p1.join(p2);
    svg.line(l, "black");

    let foot = p3.project(l);
    log::info!("foot of the perpendicular at ({:.3}, {:.3})", foot.x(), foot.y());
    svg.line(p3.superset_orthogonal_to(l), "steelblue");
    svg.point(foot, "steelblue");

    let mirror = Point::origin().join(p1);
    svg.line(mirror, "gray");
    let reflected = l.reflect(mirror);
    svg.line(reflected, "darkorange");
    let crossing = l.meet(reflected);
    log::info!("mirrored line crosses at ({:.3}, {:.3})", crossing.x(), crossing.y());

    let rotated = l.transform(Rotor::with_center(std::f64::consts::FRAC_PI_6, p1.x(), p1.y()));
    svg.line(rotated, "seagreen");

    for p in [p1, p2, p3] {
        svg.point(p, "black");
    }

    svg.write_to(&mut io::stdout().lock())
}
