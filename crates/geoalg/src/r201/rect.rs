use super::Point;

/// An axis-aligned rectangle, e.g. a viewport
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Rect<T> {
    pub min_x: T,
    pub min_y: T,
    pub max_x: T,
    pub max_y: T,
}

impl<T> Rect<T> {
    pub fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Rect {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

/// A finite piece of a line, as produced by [Line::clip](super::Line::clip)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<T> {
    pub start: Point<T>,
    pub end: Point<T>,
}
