use crate::{
    cost_grid::CostGrid,
    engine::{PathSearchEngine, Solution},
    error::SearchError,
    policy::MoveConstraintPolicy,
};
use grid_util::Point;

pub mod astar;
pub mod dijkstra;

/// A search strategy over a [CostGrid]. Implementors only choose the cost-to-go estimate;
/// the provided methods run a [PathSearchEngine] from the top-left to the bottom-right cell.
pub trait GridSolver {
    /// Lower bound on the cost of moving from `p1` to `p2`. Must never overestimate for
    /// the reported cost to be optimal.
    fn heuristic(&self, grid: &CostGrid, p1: &Point, p2: &Point) -> u64;

    fn solve(
        &self,
        grid: &CostGrid,
        policy: MoveConstraintPolicy,
    ) -> Result<Solution, SearchError>
    where
        Self: Sized,
    {
        PathSearchEngine::new(grid, policy, self).search(grid.start(), grid.goal())
    }

    /// Minimum total cost of crossing the grid; the start cell is not charged.
    fn minimal_cost(
        &self,
        grid: &CostGrid,
        policy: MoveConstraintPolicy,
    ) -> Result<u64, SearchError>
    where
        Self: Sized,
    {
        self.solve(grid, policy).map(|solution| solution.cost)
    }

    /// Every cell of a cheapest path, start and goal included.
    fn get_path(
        &self,
        grid: &CostGrid,
        policy: MoveConstraintPolicy,
    ) -> Result<Vec<Point>, SearchError>
    where
        Self: Sized,
    {
        self.solve(grid, policy).map(|solution| solution.path())
    }

    fn get_path_cost(&self, path: &[Point], grid: &CostGrid) -> u64 {
        grid.path_cost(path)
    }
}
