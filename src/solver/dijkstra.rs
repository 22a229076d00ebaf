use grid_util::Point;

use crate::{cost_grid::CostGrid, solver::GridSolver};

/// Uninformed search: orders the frontier by accumulated cost alone.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &CostGrid, _: &Point, _: &Point) -> u64 {
        0
    }
}
