//! # Marga: anytime 2D path planning over polygonal obstacle geometry
//!
//! Computes shortest (or progressively-improving) paths between two
//! points in a plane whose obstacles are described by polygonal geometry,
//! using best-first search guided by a heuristic. Callers supply a
//! neighbor function, typically derived from line-segment visibility
//! against obstacle boundaries, and receive either a single optimal path
//! or a lazy sequence of anytime-improving paths.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::{a_star, ObstacleSet, Point, Polygon};
//!
//! // A square obstacle between start and goal.
//! let block = Polygon::new([
//!     (2.0, -1.0),
//!     (2.0, 1.0),
//!     (3.0, 1.0),
//!     (3.0, -1.0),
//! ]).unwrap();
//! let mut obstacles = ObstacleSet::new();
//! obstacles.add_polygon(&block);
//!
//! let result = a_star(
//!     Point::new(0.0, 0.0),
//!     Point::new(5.0, 0.0),
//!     |point| obstacles.grid_neighbors(point, true),
//! );
//! assert!(result.success());
//! assert_eq!(result.path.first(), Some(&Point::new(0.0, 0.0)));
//! assert_eq!(result.path.last(), Some(&Point::new(5.0, 0.0)));
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: geometry kernel ([`Point`], [`Segment`], [`Rect`],
//!   [`Polygon`]) with the intersection and containment predicates that
//!   visibility reasoning needs
//! - [`obstacles`]: obstacle boundary sets and visibility-filtered
//!   neighbor generation
//! - [`search`]: the cost-bucketed [`Frontier`], A* ([`AStarPlanner`]),
//!   and Anytime Repairing A* ([`AraPlanner`])
//!
//! Everything runs single-threaded and synchronously; each search call
//! exclusively owns its frontier and cost maps, so independent searches
//! from separate threads are safe by construction. The library emits
//! structured diagnostics through the `log` facade; callers pick the
//! logger implementation.

pub mod core;
pub mod obstacles;
pub mod search;

pub use crate::core::{distance, GeometryError, Point, Polygon, Rect, Segment};
pub use obstacles::ObstacleSet;
pub use search::{
    a_star, path_exists, AStarConfig, AStarPlanner, AraConfig, AraPlanner, AraSearch, Frontier,
    PathFailure, PathResult,
};
