use grid_util::Point;
use thiserror::Error;

/// Everything that can go wrong between reading a grid and reporting its cheapest path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid grid input: {character:?} at line {line}, column {column} is not a digit")]
    InvalidGridInput {
        line: usize,
        column: usize,
        character: char,
    },
    #[error("ragged grid: line {line} has {found} cells, expected {expected}")]
    RaggedGrid {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid input contains no rows")]
    EmptyGrid,
    #[error("invalid run constraint {min_run}..={max_run}: need 1 <= min_run <= max_run")]
    InvalidConstraint { min_run: usize, max_run: usize },
    #[error("{0} lies outside the grid")]
    OutOfBounds(Point),
    #[error("{goal} cannot be reached from {start} under the run constraints")]
    UnreachableGoal { start: Point, goal: Point },
    #[error("search gave up after expanding {expanded} states")]
    BudgetExhausted { expanded: usize },
}
