//! Search configuration, result, and state types.

use std::collections::HashMap;

use crate::core::Point;

/// A* configuration.
#[derive(Clone, Debug, Default)]
pub struct AStarConfig {
    /// Prune any node whose f-cost exceeds this bound (a search radius).
    /// Unset means unbounded.
    pub max_cost: Option<f64>,
}

impl AStarConfig {
    /// Bound the search to nodes whose f-cost stays within `max_cost`.
    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = Some(max_cost);
        self
    }
}

/// ARA* configuration.
#[derive(Clone, Debug)]
pub struct AraConfig {
    /// Heuristic inflation factors, consumed front to back. Each factor
    /// drives one weighted pass; the sequence should decrease toward 1,
    /// where the search becomes plain admissible A*.
    pub inflation_factors: Vec<f64>,
}

impl Default for AraConfig {
    fn default() -> Self {
        Self {
            inflation_factors: vec![3.0, 2.0, 1.5, 1.0],
        }
    }
}

impl AraConfig {
    /// Use a custom inflation schedule.
    pub fn with_factors(factors: impl Into<Vec<f64>>) -> Self {
        Self {
            inflation_factors: factors.into(),
        }
    }
}

/// Reason a search produced no path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// The frontier exhausted without reaching the goal. An unreachable
    /// goal is an expected outcome of valid input, not an error.
    NoPath,
}

/// Result of a single search pass.
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Points from start to goal inclusive, in travel order. Empty when
    /// no path was found.
    pub path: Vec<Point>,
    /// Total path cost (`f64::INFINITY` when no path was found).
    pub cost: f64,
    /// Number of nodes expanded during the search.
    pub nodes_expanded: usize,
    /// Why no path was produced, if it wasn't.
    pub failure: Option<PathFailure>,
}

impl PathResult {
    pub(crate) fn found(path: Vec<Point>, cost: f64, nodes_expanded: usize) -> Self {
        Self {
            path,
            cost,
            nodes_expanded,
            failure: None,
        }
    }

    pub(crate) fn failed(failure: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: f64::INFINITY,
            nodes_expanded,
            failure: Some(failure),
        }
    }

    /// Whether a path was found.
    #[inline]
    pub fn success(&self) -> bool {
        self.failure.is_none()
    }

    /// Number of points on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path is empty (always true on failure).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Per-pass search bookkeeping: predecessor links and g-costs.
///
/// Exclusively owned by one search invocation; never shared.
#[derive(Clone, Debug, Default)]
pub(crate) struct SearchState {
    prev: HashMap<Point, Point>,
    g: HashMap<Point, f64>,
}

impl SearchState {
    pub(crate) fn new(start: Point) -> Self {
        let mut state = Self::default();
        state.g.insert(start, 0.0);
        state
    }

    /// g-cost of a point; unseen points default to +infinity.
    pub(crate) fn g(&self, point: &Point) -> f64 {
        self.g.get(point).copied().unwrap_or(f64::INFINITY)
    }

    /// Record that `point` is best reached from `from` at cost `g`.
    pub(crate) fn relax(&mut self, point: Point, from: Point, g: f64) {
        self.prev.insert(point, from);
        self.g.insert(point, g);
    }

    pub(crate) fn predecessor(&self, point: &Point) -> Option<&Point> {
        self.prev.get(point)
    }

    /// Walk predecessor links back from `end` and return the path in
    /// travel order. The start has no predecessor, so the walk stops
    /// there.
    pub(crate) fn build_path(&self, end: Point) -> Vec<Point> {
        let mut path = vec![end];
        let mut current = end;
        while let Some(&prev) = self.prev.get(&current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}
