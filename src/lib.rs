//! # crucible_pathfinding
//!
//! Minimum-cost pathfinding across a weighted grid for a mover that has to keep going
//! straight for at least `min_run` and at most `max_run` steps before turning, and that can
//! never reverse. Every cell entered adds its cost; the start cell is free.
//!
//! The search runs over states made of position, heading and run length, expanding each
//! such identity at most once. Solvers pick the frontier ordering: [DijkstraSolver] orders by
//! accumulated cost alone, [AstarSolver] adds a Manhattan estimate scaled by the cheapest cell.
//!
//! ```
//! use crucible_pathfinding::{CostGrid, GridSolver, AstarSolver, MoveConstraintPolicy};
//!
//! let grid: CostGrid = "11\n11".parse().unwrap();
//! let cost = AstarSolver::new()
//!     .minimal_cost(&grid, MoveConstraintPolicy::standard())
//!     .unwrap();
//! assert_eq!(cost, 2);
//! ```
pub mod cost_grid;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod heading;
pub mod policy;
pub mod solver;
pub mod state;

pub use cost_grid::CostGrid;
pub use engine::{PathSearchEngine, SearchStatus, Solution};
pub use error::SearchError;
pub use heading::Heading;
pub use policy::MoveConstraintPolicy;
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};
pub use state::{SearchState, StateKey};

/// Inline capacity for successor headings; a state never has more than three.
pub const N_SMALLVEC_SIZE: usize = 3;
pub const DEFAULT_MIN_RUN: usize = 1;
pub const DEFAULT_MAX_RUN: usize = 3;

/// Minimum cost of crossing `grid` from its top-left to its bottom-right cell with runs of
/// `min_run..=max_run` steps, using A*.
pub fn minimal_cost(grid: &CostGrid, min_run: usize, max_run: usize) -> Result<u64, SearchError> {
    let policy = MoveConstraintPolicy::new(min_run, max_run)?;
    AstarSolver::new().minimal_cost(grid, policy)
}
