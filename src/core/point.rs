//! Point type for the planning plane.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

/// A position in the 2D plane (f64 coordinates).
///
/// Equality and hashing are structural over the coordinate bit patterns,
/// which lets `Point` serve as a `HashMap`/`HashSet` key throughout the
/// search code. [`Point::new`] folds `-0.0` into `0.0`, so both zero
/// signs name the same point. Coordinates are expected to be finite.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point, normalizing `-0.0` coordinates to `0.0`.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        // Adding 0.0 maps -0.0 to 0.0 and leaves every other value alone.
        Self {
            x: x + 0.0,
            y: y + 0.0,
        }
    }

    /// Origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared distance (avoids sqrt).
    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Euclidean distance between two points.
///
/// The default edge-cost function for the search algorithms.
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    a.distance(b)
}

// Equality matches Hash bit for bit, so points that bypass `new`
// (struct literals, deserialization) still uphold the Eq/Hash contract.
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Add<(f64, f64)> for Point {
    type Output = Self;

    #[inline]
    fn add(self, (dx, dy): (f64, f64)) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Sub<(f64, f64)> for Point {
    type Output = Self;

    #[inline]
    fn sub(self, (dx, dy): (f64, f64)) -> Self {
        Point::new(self.x - dx, self.y - dy)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_relative_eq!(a.distance(&b), 5.0);
        assert_relative_eq!(distance(&a, &b), 5.0);
        assert_relative_eq!(a.distance_squared(&b), 25.0);
    }

    #[test]
    fn test_vector_ops() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(p + Point::new(3.0, 4.0), Point::new(4.0, 6.0));
        assert_eq!(p + (3.0, 4.0), Point::new(4.0, 6.0));
        assert_eq!(p - (3.0, 5.0), Point::new(-2.0, -3.0));
        assert_eq!(Point::from((1.0, 2.0)), p);
    }

    #[test]
    fn test_structural_equality_and_hash() {
        let mut set = HashSet::new();
        set.insert(Point::new(1.0, 2.0));
        set.insert(Point::new(1.0, 2.0));
        set.insert(Point::new(2.0, 1.0));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Point::new(1.0, 2.0)));
    }

    #[test]
    fn test_zero_signs_share_one_key() {
        assert_eq!(Point::new(-0.0, -0.0), Point::ZERO);

        let mut set = HashSet::new();
        set.insert(Point::new(0.0, 0.0));
        set.insert(Point::new(-0.0, 0.0));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Point::ZERO));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}
