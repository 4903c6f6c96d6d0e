//! Anytime Repairing A* (ARA*).
//!
//! Runs weighted A* repeatedly with a shrinking heuristic-inflation
//! factor, reusing the g-costs, predecessor links, and unexpanded
//! frontier between passes instead of restarting from scratch. Each pass
//! yields a complete path no worse than the previous one; when the final
//! factor is 1 the last path is truly optimal.

use log::{debug, trace};
use std::collections::VecDeque;

use super::frontier::Frontier;
use super::types::{AraConfig, PathResult, SearchState};
use crate::core::{distance, Point};

/// Anytime planner producing a sequence of improving paths.
///
/// Configured like [`AStarPlanner`](super::AStarPlanner), plus an
/// inflation schedule ([`AraConfig`]). The heuristic must be admissible.
/// Pruning compares the un-inflated estimate against the best cost found
/// so far, and that bound only holds when the estimate never
/// overestimates. An inadmissible heuristic leaves the yielded sequence
/// unspecified.
pub struct AraPlanner<'f> {
    neighbors: Box<dyn FnMut(&Point) -> Vec<Point> + 'f>,
    edge_cost: Box<dyn FnMut(&Point, &Point) -> f64 + 'f>,
    heuristic: Box<dyn FnMut(&Point) -> f64 + 'f>,
    observer: Option<Box<dyn FnMut(&Point, &Point) + 'f>>,
    config: AraConfig,
}

impl<'f> AraPlanner<'f> {
    /// Create a planner over the given neighbor function, with Euclidean
    /// edge costs, a zero heuristic, and the default inflation schedule.
    pub fn new<I>(mut neighbors: impl FnMut(&Point) -> I + 'f) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Self {
            neighbors: Box::new(move |p| neighbors(p).into_iter().collect()),
            edge_cost: Box::new(|a, b| distance(a, b)),
            heuristic: Box::new(|_| 0.0),
            observer: None,
            config: AraConfig::default(),
        }
    }

    /// Replace the configuration (inflation schedule).
    pub fn with_config(mut self, config: AraConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the edge-cost function. Costs must be non-negative.
    pub fn with_edge_cost(mut self, edge_cost: impl FnMut(&Point, &Point) -> f64 + 'f) -> Self {
        self.edge_cost = Box::new(edge_cost);
        self
    }

    /// Replace the heuristic. Must be admissible for the anytime
    /// guarantees to hold.
    pub fn with_heuristic(mut self, heuristic: impl FnMut(&Point) -> f64 + 'f) -> Self {
        self.heuristic = Box::new(heuristic);
        self
    }

    /// Install an expansion observer, called with `(predecessor, point)`
    /// for every expanded point that has a predecessor.
    pub fn with_observer(mut self, observer: impl FnMut(&Point, &Point) + 'f) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Begin the anytime search. The returned iterator lazily yields a
    /// finite sequence of complete paths with non-increasing costs, one
    /// per inflation factor at most. Dropping the iterator early simply
    /// leaves the remaining factors unexplored.
    pub fn improving_paths(mut self, start: Point, goal: Point) -> AraSearch<'f> {
        let factors: VecDeque<f64> = self.config.inflation_factors.iter().copied().collect();
        let state = SearchState::new(start);
        let mut frontier = Frontier::new();

        let done = match factors.front() {
            Some(&factor) => {
                frontier.insert_or_merge(factor * (self.heuristic)(&start), start);
                false
            }
            None => true,
        };

        AraSearch {
            planner: self,
            factors,
            frontier,
            state,
            best_cost: f64::INFINITY,
            goal,
            nodes_expanded: 0,
            done,
        }
    }
}

/// In-flight ARA* search: an iterator over improving paths.
///
/// `next()` resumes the expansion loop exactly where the previous yield
/// suspended it, with the frontier, g-costs, and predecessor links
/// intact. The iterator ends when the inflation schedule is exhausted or
/// the frontier empties.
pub struct AraSearch<'f> {
    planner: AraPlanner<'f>,
    factors: VecDeque<f64>,
    frontier: Frontier,
    state: SearchState,
    best_cost: f64,
    goal: Point,
    nodes_expanded: usize,
    done: bool,
}

impl AraSearch<'_> {
    /// Best path cost found so far (`f64::INFINITY` before the first
    /// yield).
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// Total nodes expanded across all passes so far.
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Re-key every point still resident in the frontier for the next
    /// pass: new priority = g + factor * h, installed into a freshly
    /// built frontier at once.
    fn reweight(&mut self, factor: f64) {
        let points: Vec<Point> = self.frontier.points().copied().collect();
        let mut rebuilt = Frontier::new();
        for point in points {
            let h = (self.planner.heuristic)(&point);
            rebuilt.insert_or_merge(self.state.g(&point) + factor * h, point);
        }
        trace!(
            "[AraStar] reweighted {} frontier points at inflation {:.2}",
            rebuilt.points().count(),
            factor
        );
        self.frontier = rebuilt;
    }
}

impl Iterator for AraSearch<'_> {
    type Item = PathResult;

    fn next(&mut self) -> Option<PathResult> {
        if self.done {
            return None;
        }

        loop {
            let Some((_, current)) = self.frontier.pop_min_point() else {
                debug!(
                    "[AraStar] frontier exhausted after expanding {} nodes",
                    self.nodes_expanded
                );
                self.done = true;
                return None;
            };

            if let Some(observer) = self.planner.observer.as_mut() {
                if let Some(prev) = self.state.predecessor(&current) {
                    observer(prev, &current);
                }
            }

            if current == self.goal {
                let cost = self.state.g(&self.goal);
                if cost < self.best_cost {
                    self.nodes_expanded += 1;
                    self.best_cost = cost;
                    let path = self.state.build_path(self.goal);
                    self.factors.pop_front();
                    match self.factors.front().copied() {
                        Some(next_factor) => self.reweight(next_factor),
                        None => self.done = true,
                    }
                    trace!(
                        "[AraStar] yield: cost={:.3} nodes_expanded={}",
                        cost,
                        self.nodes_expanded
                    );
                    return Some(PathResult::found(path, cost, self.nodes_expanded));
                }
                // A stale goal entry that cannot improve on the best
                // path; discarded, not counted as an expansion.
                continue;
            }
            self.nodes_expanded += 1;

            // factors is non-empty whenever we are still expanding.
            let factor = self.factors.front().copied().unwrap_or(1.0);
            let g_current = self.state.g(&current);

            for neighbor in (self.planner.neighbors)(&current) {
                let tentative = g_current + (self.planner.edge_cost)(&current, &neighbor);
                if tentative >= self.state.g(&neighbor) {
                    continue;
                }
                let h = (self.planner.heuristic)(&neighbor);
                // Admissible (un-inflated) bound: branches that cannot
                // beat the best path already found are pruned. The
                // inflated value below is used only for ordering.
                if tentative + h >= self.best_cost {
                    continue;
                }
                self.state.relax(neighbor, current, tentative);
                self.frontier.insert_or_merge(tentative + factor * h, neighbor);
            }
        }
    }
}
