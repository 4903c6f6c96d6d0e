//! A* search over a caller-defined graph of plane points.

use log::{debug, trace};
use std::collections::HashSet;

use super::frontier::Frontier;
use super::types::{AStarConfig, PathFailure, PathResult, SearchState};
use crate::core::{distance, Point};

/// Single-pass best-first shortest-path search.
///
/// The graph is implicit: the planner holds a neighbor function from a
/// point to its candidate successors, an edge-cost function (Euclidean
/// distance by default), and a heuristic (zero by default, which reduces
/// the search to Dijkstra).
///
/// The returned path cost is optimal as long as the heuristic never
/// overestimates the true remaining cost and the neighbor/cost functions
/// are consistent across calls for the same point. If the neighbor
/// function expands an unbounded frontier and no goal is reachable, the
/// search does not terminate; bounding the space (or setting
/// [`AStarConfig::max_cost`]) is the caller's responsibility.
pub struct AStarPlanner<'f> {
    neighbors: Box<dyn FnMut(&Point) -> Vec<Point> + 'f>,
    edge_cost: Box<dyn FnMut(&Point, &Point) -> f64 + 'f>,
    heuristic: Box<dyn FnMut(&Point) -> f64 + 'f>,
    observer: Option<Box<dyn FnMut(&[Point]) + 'f>>,
    config: AStarConfig,
}

impl<'f> AStarPlanner<'f> {
    /// Create a planner over the given neighbor function, with Euclidean
    /// edge costs and a zero heuristic.
    pub fn new<I>(mut neighbors: impl FnMut(&Point) -> I + 'f) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Self {
            neighbors: Box::new(move |p| neighbors(p).into_iter().collect()),
            edge_cost: Box::new(|a, b| distance(a, b)),
            heuristic: Box::new(|_| 0.0),
            observer: None,
            config: AStarConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: AStarConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the edge-cost function. Costs must be non-negative.
    pub fn with_edge_cost(mut self, edge_cost: impl FnMut(&Point, &Point) -> f64 + 'f) -> Self {
        self.edge_cost = Box::new(edge_cost);
        self
    }

    /// Replace the heuristic. Must not overestimate the remaining cost if
    /// the optimal path is needed.
    pub fn with_heuristic(mut self, heuristic: impl FnMut(&Point) -> f64 + 'f) -> Self {
        self.heuristic = Box::new(heuristic);
        self
    }

    /// Install an exploration observer, called with the partial path from
    /// the start to every expanded point, in expansion order.
    ///
    /// Reconstructing each partial path is linear in its length, so an
    /// observed search runs measurably slower. Intended for external
    /// instrumentation and animation, not for the search itself.
    pub fn with_observer(mut self, observer: impl FnMut(&[Point]) + 'f) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Search for a path from `start` to `goal`.
    pub fn find_path(&mut self, start: Point, goal: Point) -> PathResult {
        trace!("[AStar] find_path: start={start} goal={goal}");

        let mut state = SearchState::new(start);
        let mut frontier = Frontier::new();
        let mut searched: HashSet<Point> = HashSet::new();
        let mut nodes_expanded = 0usize;

        frontier.insert_or_merge((self.heuristic)(&start), start);

        while let Some((_, current)) = frontier.pop_min_point() {
            // A point can be re-filed at a better priority before its old
            // entry drains; the stale pop is skipped, not re-expanded.
            if searched.contains(&current) {
                continue;
            }
            nodes_expanded += 1;

            if let Some(observer) = self.observer.as_mut() {
                observer(&state.build_path(current));
            }

            if current == goal {
                let cost = state.g(&goal);
                let path = state.build_path(goal);
                trace!(
                    "[AStar] SUCCESS: path length={} cost={:.3} nodes_expanded={}",
                    path.len(),
                    cost,
                    nodes_expanded
                );
                return PathResult::found(path, cost, nodes_expanded);
            }

            for neighbor in (self.neighbors)(&current) {
                if searched.contains(&neighbor) {
                    continue;
                }
                let tentative = state.g(&current) + (self.edge_cost)(&current, &neighbor);
                if tentative < state.g(&neighbor) {
                    let f = tentative + (self.heuristic)(&neighbor);
                    if let Some(max_cost) = self.config.max_cost {
                        if f > max_cost {
                            continue;
                        }
                    }
                    state.relax(neighbor, current, tentative);
                    frontier.insert_or_merge(f, neighbor);
                }
            }
            searched.insert(current);
        }

        debug!("[AStar] FAILED: NoPath after expanding {nodes_expanded} nodes");
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }
}
