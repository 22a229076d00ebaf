use grid_util::Point;

use crate::{cost_grid::CostGrid, solver::GridSolver};

#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl GridSolver for AstarSolver {
    /// Manhattan distance times the cheapest cell cost. Every step enters a cell costing at
    /// least that much, so the estimate is admissible (also when cells cost 0) as long as the
    /// factor is at most 1. Larger factors give Weighted A*.
    fn heuristic(&self, grid: &CostGrid, p1: &Point, p2: &Point) -> u64 {
        let distance = p1.manhattan_distance(p2) as u64 * u64::from(grid.min_cost());
        (distance as f64 * f64::from(self.heuristic_factor)) as u64
    }
}

#[cfg(test)]
mod tests {
    use grid_util::ValueGrid;

    use crate::{error::SearchError, policy::MoveConstraintPolicy};

    use super::*;

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let grid: CostGrid = "7".parse().unwrap();
        let solver = AstarSolver::new();
        let solution = solver.solve(&grid, MoveConstraintPolicy::standard()).unwrap();
        assert_eq!(solution.cost, 0);
        assert_eq!(solution.path(), vec![Point::new(0, 0)]);
        assert!(solution.headings().is_empty());
    }

    #[test]
    fn solve_two_by_two() {
        let grid: CostGrid = "11\n11".parse().unwrap();
        let solver = AstarSolver::new();
        let path = solver
            .get_path(&grid, MoveConstraintPolicy::standard())
            .unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(solver.get_path_cost(&path, &grid), 2);
    }

    /// The only cheap route hugs the left and bottom edges.
    #[test]
    fn follows_cheap_corridor() {
        let grid: CostGrid = "1999\n1999\n1999\n1111".parse().unwrap();
        let solver = AstarSolver::new();
        let cost = solver
            .minimal_cost(&grid, MoveConstraintPolicy::standard())
            .unwrap();
        // Three steps down then three right
        assert_eq!(cost, 6);
    }

    #[test]
    fn heuristic_scales_with_cheapest_cell() {
        let mut grid = CostGrid::new(4, 4, 3);
        let solver = AstarSolver::new();
        let (a, b) = (Point::new(0, 0), Point::new(3, 3));
        assert_eq!(solver.heuristic(&grid, &a, &b), 18);
        grid.set(2, 2, 0);
        assert_eq!(solver.heuristic(&grid, &a, &b), 0);
    }

    #[test]
    fn ultra_runs_cannot_fit_small_grid() {
        let grid: CostGrid = "111\n111\n111".parse().unwrap();
        let result = AstarSolver::new().minimal_cost(&grid, MoveConstraintPolicy::ultra());
        assert!(matches!(result, Err(SearchError::UnreachableGoal { .. })));
    }
}
