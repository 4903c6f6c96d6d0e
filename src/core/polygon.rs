//! Closed polygon type and geometry construction errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::point::Point;
use super::segment::Segment;

/// Geometry construction error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A polygon was built from too few points to form a closed shape.
    #[error("polygon needs at least 3 edges, got {edges} from {points} input points")]
    DegeneratePolygon {
        /// Number of input points supplied.
        points: usize,
        /// Number of edges that resulted.
        edges: usize,
    },
}

/// A closed polygon: an ordered point sequence plus the boundary segments
/// connecting consecutive points, closing back to the first.
///
/// If the caller's last point equals the first it is treated as an
/// explicit closure and dropped rather than duplicated, so
/// `Polygon::new([a, b, c])` equals `Polygon::new([a, b, c, a])`.
///
/// Equality is ordered: the stored point sequences must match exactly.
/// Two polygons over the same point set in a different order (or with a
/// rotated starting point) are not equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    points: Vec<Point>,
    edges: Vec<Segment>,
}

impl Polygon {
    /// Build a polygon from an ordered point sequence.
    ///
    /// Fails with [`GeometryError::DegeneratePolygon`] when fewer than 3
    /// edges result.
    pub fn new(
        points: impl IntoIterator<Item = impl Into<Point>>,
    ) -> Result<Self, GeometryError> {
        let mut points: Vec<Point> = points.into_iter().map(Into::into).collect();
        let input_len = points.len();

        // Explicitly closed input: drop the duplicated closing point.
        if points.len() >= 2 && points.last() == points.first() {
            points.pop();
        }

        let mut edges: Vec<Segment> = points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect();
        if points.len() >= 2 {
            edges.push(Segment::new(points[points.len() - 1], points[0]));
        }

        if edges.len() < 3 {
            return Err(GeometryError::DegeneratePolygon {
                points: input_len,
                edges: edges.len(),
            });
        }

        Ok(Self { points, edges })
    }

    /// Vertices in order, without the closing duplicate.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Boundary segments in order, including the closing edge.
    #[inline]
    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = GeometryError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Polygon::new(points)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.points
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for point in &self.points {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "{point}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_triangle() {
        let poly = Polygon::new([p(0.0, 0.0), p(2.0, 0.0), p(1.0, 2.0)]).unwrap();
        assert_eq!(poly.points().len(), 3);
        assert_eq!(poly.edges().len(), 3);
        // Closing edge returns to the first point.
        assert_eq!(poly.edges()[2], Segment::new(p(1.0, 2.0), p(0.0, 0.0)));
    }

    #[test]
    fn test_explicit_closure_not_duplicated() {
        let open = Polygon::new([p(0.0, 0.0), p(2.0, 0.0), p(1.0, 2.0)]).unwrap();
        let closed =
            Polygon::new([p(0.0, 0.0), p(2.0, 0.0), p(1.0, 2.0), p(0.0, 0.0)]).unwrap();
        assert_eq!(open, closed);
        assert_eq!(closed.points().len(), 3);
        assert_eq!(closed.edges().len(), 3);
    }

    #[test]
    fn test_too_few_points() {
        let err = Polygon::new([p(0.0, 0.0), p(1.0, 1.0)]).unwrap_err();
        assert_eq!(err, GeometryError::DegeneratePolygon { points: 2, edges: 2 });

        // A closed pair collapses to a single edge.
        assert!(Polygon::new([p(0.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)]).is_err());
        assert!(Polygon::new([p(0.0, 0.0)]).is_err());
        assert!(Polygon::new(Vec::<Point>::new()).is_err());
    }

    #[test]
    fn test_ordered_equality() {
        let a = Polygon::new([p(0.0, 0.0), p(2.0, 0.0), p(1.0, 2.0)]).unwrap();
        let rotated = Polygon::new([p(2.0, 0.0), p(1.0, 2.0), p(0.0, 0.0)]).unwrap();
        assert_ne!(a, rotated);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_hex_edge_chain() {
        // Outline from the demo scenario: a C-shaped hexagon.
        let poly = Polygon::new([
            p(4.0, 6.0),
            p(6.0, 6.0),
            p(6.0, 4.0),
            p(7.0, 4.0),
            p(7.0, 7.0),
            p(4.0, 7.0),
        ])
        .unwrap();
        assert_eq!(poly.edges().len(), 6);
        for window in poly.edges().windows(2) {
            assert_eq!(window[0].point2, window[1].point1);
        }
    }
}
