//! Obstacle collections and visibility-filtered neighbor generation.
//!
//! The search algorithms are agnostic about what a "neighbor" is; this
//! module provides the common case of a plane littered with polygonal
//! obstacles, where candidate moves are rejected when they land on or
//! cross an obstacle boundary.

use std::collections::HashSet;

use crate::core::{Point, Polygon, Rect, Segment};

/// A set of obstacle boundary segments gathered from shapes.
///
/// Only boundaries matter for visibility: a segment-based test cannot
/// distinguish the inside of a shape from the outside, so callers that
/// need solid obstacles should keep start/goal outside the outlines.
#[derive(Clone, Debug, Default)]
pub struct ObstacleSet {
    segments: Vec<Segment>,
}

impl ObstacleSet {
    /// Create an empty obstacle set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a polygon's boundary edges.
    pub fn add_polygon(&mut self, polygon: &Polygon) {
        self.segments.extend_from_slice(polygon.edges());
    }

    /// Add a rectangle's boundary edges.
    pub fn add_rect(&mut self, rect: &Rect) {
        self.segments.extend_from_slice(&rect.edges());
    }

    /// Add a bare boundary segment.
    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// All boundary segments added so far.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether a point lies on any obstacle boundary.
    pub fn blocks(&self, point: &Point) -> bool {
        self.segments.iter().any(|s| s.contains(point))
    }

    /// Whether a candidate path edge crosses any obstacle boundary.
    pub fn blocks_segment(&self, segment: &Segment) -> bool {
        self.segments.iter().any(|s| s.intersects(segment))
    }

    /// Whether two points can see each other (the segment joining them
    /// crosses no obstacle boundary). The visibility-graph adjacency test.
    pub fn visible(&self, a: &Point, b: &Point) -> bool {
        !self.blocks_segment(&Segment::new(*a, *b))
    }

    /// Unit-step grid candidates around `point`, minus blocked ones.
    ///
    /// Returns the 4-connected (or, with `diagonal`, 8-connected)
    /// neighbors whose positions do not lie on an obstacle boundary.
    /// Usable directly as a neighbor function for the search algorithms.
    pub fn grid_neighbors(&self, point: &Point, diagonal: bool) -> HashSet<Point> {
        let mut candidates: HashSet<Point> = HashSet::new();
        candidates.insert(*point + (1.0, 0.0));
        candidates.insert(*point + (-1.0, 0.0));
        candidates.insert(*point + (0.0, 1.0));
        candidates.insert(*point + (0.0, -1.0));
        if diagonal {
            candidates.insert(*point + (1.0, 1.0));
            candidates.insert(*point + (1.0, -1.0));
            candidates.insert(*point + (-1.0, 1.0));
            candidates.insert(*point + (-1.0, -1.0));
        }
        candidates.retain(|c| !self.blocks(c));
        candidates
    }
}
