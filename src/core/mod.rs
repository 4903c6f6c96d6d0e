//! Geometry kernel for the planning plane.
//!
//! Value types with structural equality and hashing, plus the intersection
//! and containment predicates a visibility-based neighbor function needs:
//!
//! - [`Point`]: a position in the plane (hashable, usable as a map key)
//! - [`Segment`]: an unordered endpoint pair with cached slope/bounds
//! - [`Rect`]: a normalized axis-aligned rectangle
//! - [`Polygon`]: a closed ordered point sequence with boundary edges

mod point;
mod polygon;
mod rect;
mod segment;

pub use point::{distance, Point};
pub use polygon::{GeometryError, Polygon};
pub use rect::Rect;
pub use segment::{Segment, CONTAINS_EPSILON, INTERSECT_EPSILON};
