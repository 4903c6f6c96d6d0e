//! Line segment type with cached derived attributes.
//!
//! Segments cache their slope, y-intercept, and axis-aligned bounds at
//! construction, since the visibility predicates evaluate them repeatedly
//! during neighbor generation.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::point::Point;

/// Tolerance for point containment tests.
///
/// Repeated geometric construction accumulates floating-point error; a
/// tolerance of zero produces false negatives on axis-aligned and grazing
/// cases. Split across both sides of a bound this yields a 1e-3 window.
pub const CONTAINS_EPSILON: f64 = 5e-4;

/// Tolerance for segment intersection bound checks.
///
/// Wider than [`CONTAINS_EPSILON`] because the homogeneous-coordinate
/// intersection point carries the error of two cross products.
pub const INTERSECT_EPSILON: f64 = 5e-3;

/// A line segment defined by an unordered pair of endpoints.
///
/// Equality and hashing ignore endpoint order:
/// `Segment::new(a, b) == Segment::new(b, a)`.
///
/// A degenerate segment (equal endpoints) is permitted but has undefined
/// slope behavior; callers must not rely on containment or intersection
/// results for degenerate segments.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(from = "(Point, Point)", into = "(Point, Point)")]
pub struct Segment {
    /// First endpoint.
    pub point1: Point,
    /// Second endpoint.
    pub point2: Point,
    /// Slope of the carrying line; `f64::INFINITY` when vertical.
    pub slope: f64,
    /// Y-intercept of the carrying line; meaningless when vertical.
    pub y_intercept: f64,
    /// Leftmost x coordinate reached.
    pub x_left: f64,
    /// Rightmost x coordinate reached.
    pub x_right: f64,
    /// Topmost y coordinate reached.
    pub y_top: f64,
    /// Bottom-most y coordinate reached.
    pub y_bottom: f64,
}

impl Segment {
    /// Create a segment between two points, caching derived attributes.
    pub fn new(point1: impl Into<Point>, point2: impl Into<Point>) -> Self {
        let point1 = point1.into();
        let point2 = point2.into();

        let slope = if point1.x == point2.x {
            f64::INFINITY
        } else {
            (point2.y - point1.y) / (point2.x - point1.x)
        };
        let y_intercept = point1.y - slope * point1.x;

        Self {
            point1,
            point2,
            slope,
            y_intercept,
            x_left: point1.x.min(point2.x),
            x_right: point1.x.max(point2.x),
            y_top: point1.y.max(point2.y),
            y_bottom: point1.y.min(point2.y),
        }
    }

    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.point1.distance(&self.point2)
    }

    /// Horizontal extent (`x_right - x_left`).
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_right - self.x_left
    }

    /// Vertical extent (`y_top - y_bottom`).
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_top - self.y_bottom
    }

    /// Y coordinate of the carrying line at the given x (`y = mx + b`).
    ///
    /// Returns NaN for vertical segments.
    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.y_intercept
    }

    /// Whether a point lies on this segment, within [`CONTAINS_EPSILON`].
    ///
    /// The x coordinate must fall within the segment's x-bounds (each side
    /// widened by the tolerance). For non-vertical segments, the point's y
    /// must be within the tolerance of the carrying line at that x; for
    /// vertical segments, the y must lie within the segment's y-bounds.
    pub fn contains(&self, point: &Point) -> bool {
        if !(self.x_left - CONTAINS_EPSILON <= point.x
            && point.x <= self.x_right + CONTAINS_EPSILON)
        {
            return false;
        }
        if self.slope.is_infinite() {
            return self.y_bottom <= point.y && point.y <= self.y_top;
        }
        (self.y_at(point.x) - point.y).abs() < CONTAINS_EPSILON
    }

    /// Intersection of the two *carrying lines*, extended infinitely.
    ///
    /// Returns `None` when the slopes are equal (parallel or coincident).
    /// The returned point need not lie on either segment.
    pub fn point_of_intersection(&self, other: &Segment) -> Option<Point> {
        if self.slope == other.slope {
            return None;
        }
        if self.slope.is_infinite() {
            return Some(Point::new(self.point1.x, other.y_at(self.point1.x)));
        }
        if other.slope.is_infinite() {
            return Some(Point::new(other.point1.x, self.y_at(other.point1.x)));
        }
        let x = (self.y_intercept - other.y_intercept) / (other.slope - self.slope);
        Some(Point::new(x, self.y_at(x)))
    }

    /// Whether the two *segments* (not infinite lines) cross.
    ///
    /// Computes the carrying lines' intersection via homogeneous-coordinate
    /// cross products (no slope division, so verticals and near-parallels
    /// are safe), then checks that the intersection point falls within both
    /// segments' bounds, each widened by [`INTERSECT_EPSILON`].
    ///
    /// Exactly parallel lines never intersect under this predicate, even
    /// when collinear and overlapping. This is a documented limitation that
    /// visibility callers rely on: a path edge sliding along an obstacle
    /// edge does not count as a crossing.
    pub fn intersects(&self, other: &Segment) -> bool {
        // Lines through each endpoint pair, as homogeneous cross products.
        let l1 = homogeneous_line(&self.point1, &self.point2);
        let l2 = homogeneous_line(&other.point1, &other.point2);

        let (x, y, z) = cross(l1, l2);
        if z == 0.0 {
            // Parallel lines.
            return false;
        }
        let x = x / z;
        let y = y / z;

        self.x_left.max(other.x_left) - INTERSECT_EPSILON <= x
            && x <= self.x_right.min(other.x_right) + INTERSECT_EPSILON
            && self.y_bottom.max(other.y_bottom) - INTERSECT_EPSILON <= y
            && y <= self.y_top.min(other.y_top) + INTERSECT_EPSILON
    }

    /// Endpoints ordered canonically, for order-independent hashing.
    fn canonical(&self) -> (&Point, &Point) {
        let cmp = self
            .point1
            .x
            .total_cmp(&self.point2.x)
            .then(self.point1.y.total_cmp(&self.point2.y));
        if cmp == Ordering::Greater {
            (&self.point2, &self.point1)
        } else {
            (&self.point1, &self.point2)
        }
    }
}

/// Homogeneous coordinates of the line through two points.
fn homogeneous_line(a: &Point, b: &Point) -> (f64, f64, f64) {
    cross((a.x, a.y, 1.0), (b.x, b.y, 1.0))
}

fn cross(a: (f64, f64, f64), b: (f64, f64, f64)) -> (f64, f64, f64) {
    (
        a.1 * b.2 - a.2 * b.1,
        a.2 * b.0 - a.0 * b.2,
        a.0 * b.1 - a.1 * b.0,
    )
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.point1 == other.point1 && self.point2 == other.point2)
            || (self.point1 == other.point2 && self.point2 == other.point1)
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (a, b) = self.canonical();
        a.hash(state);
        b.hash(state);
    }
}

impl From<(Point, Point)> for Segment {
    fn from((a, b): (Point, Point)) -> Self {
        Segment::new(a, b)
    }
}

impl From<Segment> for (Point, Point) {
    fn from(segment: Segment) -> Self {
        (segment.point1, segment.point2)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.point1, self.point2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_cached_attributes() {
        let s = seg(0.0, 0.0, 2.0, 4.0);
        assert_relative_eq!(s.slope, 2.0);
        assert_relative_eq!(s.y_intercept, 0.0);
        assert_relative_eq!(s.x_left, 0.0);
        assert_relative_eq!(s.x_right, 2.0);
        assert_relative_eq!(s.y_bottom, 0.0);
        assert_relative_eq!(s.y_top, 4.0);
        assert_relative_eq!(s.width(), 2.0);
        assert_relative_eq!(s.height(), 4.0);
        assert_relative_eq!(s.length(), 20.0_f64.sqrt());
    }

    #[test]
    fn test_vertical_slope() {
        let s = seg(1.0, 0.0, 1.0, 5.0);
        assert!(s.slope.is_infinite());
        assert!(s.y_at(1.0).is_nan());
    }

    #[test]
    fn test_equality_ignores_endpoint_order() {
        assert_eq!(seg(1.0, 2.0, 3.0, 4.0), seg(3.0, 4.0, 1.0, 2.0));
        assert_ne!(seg(1.0, 2.0, 3.0, 4.0), seg(2.0, 1.0, 4.0, 3.0));

        let mut set = HashSet::new();
        set.insert(seg(1.0, 2.0, 3.0, 4.0));
        set.insert(seg(3.0, 4.0, 1.0, 2.0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_contains_endpoint_and_midpoint() {
        let s = seg(0.0, 0.0, 4.0, 4.0);
        assert!(s.contains(&Point::new(0.0, 0.0)));
        assert!(s.contains(&Point::new(4.0, 4.0)));
        assert!(s.contains(&Point::new(2.0, 2.0)));
        assert!(!s.contains(&Point::new(2.0, 2.5)));
        assert!(!s.contains(&Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_contains_vertical() {
        let s = seg(1.0, -1.0, 1.0, 3.0);
        assert!(s.contains(&Point::new(1.0, 0.0)));
        assert!(s.contains(&Point::new(1.0, 3.0)));
        assert!(!s.contains(&Point::new(1.0, 3.5)));
        assert!(!s.contains(&Point::new(1.5, 0.0)));
    }

    #[test]
    fn test_contains_tolerance() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        assert!(s.contains(&Point::new(2.0, 0.0004)));
        assert!(!s.contains(&Point::new(2.0, 0.001)));
    }

    #[test]
    fn test_point_of_intersection() {
        let a = seg(0.0, 0.0, 2.0, 2.0);
        let b = seg(0.0, 2.0, 2.0, 0.0);
        let p = a.point_of_intersection(&b).unwrap();
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 1.0);

        // Parallel lines have no intersection.
        assert!(a.point_of_intersection(&seg(0.0, 1.0, 2.0, 3.0)).is_none());

        // Off-segment intersections are still reported (infinite lines).
        let c = seg(0.0, 0.0, 1.0, 1.0);
        let d = seg(10.0, 0.0, 11.0, -1.0);
        let p = c.point_of_intersection(&d).unwrap();
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, 5.0);
    }

    #[test]
    fn test_point_of_intersection_vertical() {
        let v = seg(1.0, 0.0, 1.0, 5.0);
        let h = seg(0.0, 2.0, 3.0, 2.0);
        let p = v.point_of_intersection(&h).unwrap();
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 2.0);

        let p = h.point_of_intersection(&v).unwrap();
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 2.0);

        // Two verticals are parallel.
        assert!(v.point_of_intersection(&seg(2.0, 0.0, 2.0, 5.0)).is_none());
    }

    #[test]
    fn test_intersects_crossing() {
        let a = seg(0.0, 0.0, 2.0, 2.0);
        let b = seg(0.0, 2.0, 2.0, 0.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_disjoint() {
        let a = seg(0.0, 0.0, 1.0, 1.0);
        let b = seg(3.0, 0.0, 4.0, 1.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_intersects_lines_cross_but_segments_do_not() {
        // Carrying lines cross at (5, 5), far outside both segments.
        let a = seg(0.0, 0.0, 1.0, 1.0);
        let b = seg(10.0, 0.0, 11.0, -1.0);
        assert!(a.point_of_intersection(&b).is_some());
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_intersects_vertical_horizontal() {
        let v = seg(1.0, -1.0, 1.0, 1.0);
        let h = seg(0.0, 0.0, 2.0, 0.0);
        assert!(v.intersects(&h));
        assert!(h.intersects(&v));
    }

    #[test]
    fn test_intersects_at_shared_endpoint() {
        let a = seg(0.0, 0.0, 2.0, 0.0);
        let b = seg(2.0, 0.0, 2.0, 3.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_collinear_overlap_reports_no_intersection() {
        // Parallel (here collinear and overlapping) segments never
        // intersect under this predicate.
        let a = seg(0.0, 0.0, 4.0, 0.0);
        let b = seg(2.0, 0.0, 6.0, 0.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_serde_round_trip_endpoints() {
        let s = seg(0.0, 0.0, 2.0, 4.0);
        let back = Segment::from(<(Point, Point)>::from(s));
        assert_eq!(s, back);
        assert_relative_eq!(back.slope, 2.0);
    }
}
