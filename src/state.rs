use crate::cost_grid::CostGrid;
use crate::heading::Heading;
use grid_util::Point;

/// Identity of a search node. Two nodes with the same position, heading and run length
/// have the same set of continuations, whatever path led to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateKey {
    pub position: Point,
    pub heading: Heading,
    /// Consecutive steps already taken in `heading`, at least 1.
    pub run_length: usize,
}

impl StateKey {
    /// The state after the first step out of `start` in `heading`.
    pub fn seed(start: Point, heading: Heading) -> StateKey {
        StateKey {
            position: heading.step(start),
            heading,
            run_length: 1,
        }
    }

    /// The state after one more step in `heading`. Continuing straight extends the run,
    /// any turn starts a new run of 1.
    pub fn advance(&self, heading: Heading) -> StateKey {
        let run_length = if heading == self.heading {
            self.run_length + 1
        } else {
            1
        };
        StateKey {
            position: heading.step(self.position),
            heading,
            run_length,
        }
    }
}

/// A [StateKey] together with the cost accumulated to reach it. The cost orders the
/// frontier but takes no part in identity. Cell costs are `u32`, sums are kept in `u64`.
#[derive(Clone, Copy, Debug)]
pub struct SearchState {
    pub key: StateKey,
    pub cost: u64,
}

impl SearchState {
    /// One of the initial states; the start cell itself is never charged.
    pub fn seed(grid: &CostGrid, start: Point, heading: Heading) -> SearchState {
        let key = StateKey::seed(start, heading);
        SearchState {
            cost: u64::from(grid.cost(&key.position)),
            key,
        }
    }

    pub fn expand(&self, heading: Heading, grid: &CostGrid) -> SearchState {
        let key = self.key.advance(heading);
        SearchState {
            cost: self.cost + u64::from(grid.cost(&key.position)),
            key,
        }
    }
}
