//! Axis-aligned rectangle type.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::point::Point;
use super::segment::{Segment, CONTAINS_EPSILON};

/// An axis-aligned rectangle, normalized at construction.
///
/// Built from any two opposite corners; stores the lower-left and
/// upper-right corners, so equality depends only on the spanned area,
/// not on which diagonal the caller supplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Lower-left corner.
    pub lower_left: Point,
    /// Upper-right corner.
    pub upper_right: Point,
}

impl Rect {
    /// Create the rectangle spanning two corners diagonally.
    pub fn new(corner1: impl Into<Point>, corner2: impl Into<Point>) -> Self {
        let corner1 = corner1.into();
        let corner2 = corner2.into();
        Self {
            lower_left: Point::new(corner1.x.min(corner2.x), corner1.y.min(corner2.y)),
            upper_right: Point::new(corner1.x.max(corner2.x), corner1.y.max(corner2.y)),
        }
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper_right.x - self.lower_left.x
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.upper_right.y - self.lower_left.y
    }

    /// Lower-right corner.
    #[inline]
    pub fn lower_right(&self) -> Point {
        Point::new(self.upper_right.x, self.lower_left.y)
    }

    /// Upper-left corner.
    #[inline]
    pub fn upper_left(&self) -> Point {
        Point::new(self.lower_left.x, self.upper_right.y)
    }

    /// The four corner points.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.upper_left(),
            self.upper_right,
            self.lower_left,
            self.lower_right(),
        ]
    }

    /// The four boundary segments, in a fixed winding: top, right,
    /// bottom, left. Drawn in order they trace a closed outline.
    pub fn edges(&self) -> [Segment; 4] {
        [
            Segment::new(self.upper_left(), self.upper_right),
            Segment::new(self.upper_right, self.lower_right()),
            Segment::new(self.lower_right(), self.lower_left),
            Segment::new(self.lower_left, self.upper_left()),
        ]
    }

    /// Inclusive bounding-box containment, within [`CONTAINS_EPSILON`]
    /// on each bound.
    pub fn contains(&self, point: &Point) -> bool {
        self.lower_left.x - CONTAINS_EPSILON <= point.x
            && point.x <= self.upper_right.x + CONTAINS_EPSILON
            && self.lower_left.y - CONTAINS_EPSILON <= point.y
            && point.y <= self.upper_right.y + CONTAINS_EPSILON
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower_left, self.upper_right)
    }
}
