//! Best-first path search over caller-defined graphs.
//!
//! Two algorithms over the same [`Frontier`] structure:
//!
//! - [`AStarPlanner`]: single-pass A* with an optional search-radius
//!   cutoff and exploration observer
//! - [`AraPlanner`]: Anytime Repairing A*, yielding a lazy sequence of
//!   monotonically non-worsening paths as the heuristic inflation shrinks
//!
//! Both take the graph implicitly as a neighbor function from a point to
//! its candidate successors; what a "neighbor" means physically is the
//! caller's decision (see [`crate::obstacles`] for the visibility-based
//! case).

mod ara;
mod astar;
mod frontier;
mod types;

pub use ara::{AraPlanner, AraSearch};
pub use astar::AStarPlanner;
pub use frontier::Frontier;
pub use types::{AStarConfig, AraConfig, PathFailure, PathResult};

use crate::core::Point;

/// Shortest-path search with default configuration: Euclidean edge costs
/// and a zero heuristic (Dijkstra).
pub fn a_star<I>(
    start: Point,
    goal: Point,
    neighbors: impl FnMut(&Point) -> I,
) -> PathResult
where
    I: IntoIterator<Item = Point>,
{
    AStarPlanner::new(neighbors).find_path(start, goal)
}

/// Whether any path exists between the two points.
pub fn path_exists<I>(start: Point, goal: Point, neighbors: impl FnMut(&Point) -> I) -> bool
where
    I: IntoIterator<Item = Point>,
{
    a_star(start, goal, neighbors).success()
}
