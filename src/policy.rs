use crate::cost_grid::CostGrid;
use crate::error::SearchError;
use crate::heading::Heading;
use crate::state::StateKey;
use crate::{DEFAULT_MAX_RUN, DEFAULT_MIN_RUN, N_SMALLVEC_SIZE};
use smallvec::SmallVec;

/// Movement rules for the mover: at least `min_run` and at most `max_run` consecutive
/// steps in one heading before turning, and never a reversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveConstraintPolicy {
    min_run: usize,
    max_run: usize,
}

impl Default for MoveConstraintPolicy {
    fn default() -> MoveConstraintPolicy {
        MoveConstraintPolicy {
            min_run: DEFAULT_MIN_RUN,
            max_run: DEFAULT_MAX_RUN,
        }
    }
}

impl MoveConstraintPolicy {
    pub fn new(min_run: usize, max_run: usize) -> Result<MoveConstraintPolicy, SearchError> {
        if min_run == 0 || min_run > max_run {
            return Err(SearchError::InvalidConstraint { min_run, max_run });
        }
        Ok(MoveConstraintPolicy { min_run, max_run })
    }

    /// Up to three steps in a row, turning whenever.
    pub fn standard() -> MoveConstraintPolicy {
        MoveConstraintPolicy::default()
    }

    /// Four to ten steps in a row.
    pub fn ultra() -> MoveConstraintPolicy {
        MoveConstraintPolicy {
            min_run: 4,
            max_run: 10,
        }
    }

    pub fn min_run(&self) -> usize {
        self.min_run
    }

    pub fn max_run(&self) -> usize {
        self.max_run
    }

    /// Headings the mover may take next from `state` without breaking a rule or leaving
    /// the grid. An empty result is a dead end, not an error.
    pub fn legal_headings(
        &self,
        state: &StateKey,
        grid: &CostGrid,
    ) -> SmallVec<[Heading; N_SMALLVEC_SIZE]> {
        let candidates: SmallVec<[Heading; N_SMALLVEC_SIZE]> = if state.run_length < self.min_run {
            smallvec::smallvec![state.heading]
        } else {
            Heading::ALL
                .into_iter()
                .filter(|&h| h != state.heading.opposite())
                .filter(|&h| h != state.heading || state.run_length < self.max_run)
                .collect()
        };
        candidates
            .into_iter()
            .filter(|h| grid.in_bounds(&h.step(state.position)))
            .collect()
    }

    /// Whether the mover may come to rest in `state`, which requires a completed minimum run.
    pub fn can_stop(&self, state: &StateKey) -> bool {
        state.run_length >= self.min_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_util::Point;

    fn key(x: i32, y: i32, heading: Heading, run_length: usize) -> StateKey {
        StateKey {
            position: Point::new(x, y),
            heading,
            run_length,
        }
    }

    #[test]
    fn rejects_bad_bounds() {
        assert!(MoveConstraintPolicy::new(0, 3).is_err());
        assert!(MoveConstraintPolicy::new(5, 4).is_err());
        assert!(MoveConstraintPolicy::new(4, 4).is_ok());
    }

    #[test]
    fn never_reverses() {
        let grid = "11111\n11111\n11111\n11111\n11111".parse::<CostGrid>().unwrap();
        let policy = MoveConstraintPolicy::standard();
        let legal = policy.legal_headings(&key(2, 2, Heading::Right, 1), &grid);
        assert_eq!(legal.len(), 3);
        assert!(!legal.contains(&Heading::Left));
    }

    #[test]
    fn forced_turn_at_max_run() {
        let grid = "11111\n11111\n11111\n11111\n11111".parse::<CostGrid>().unwrap();
        let policy = MoveConstraintPolicy::standard();
        let legal = policy.legal_headings(&key(2, 2, Heading::Down, 3), &grid);
        assert_eq!(legal.as_slice(), &[Heading::Left, Heading::Right]);
    }

    #[test]
    fn forced_straight_below_min_run() {
        let grid = "11111\n11111\n11111\n11111\n11111".parse::<CostGrid>().unwrap();
        let policy = MoveConstraintPolicy::ultra();
        let legal = policy.legal_headings(&key(1, 2, Heading::Right, 2), &grid);
        assert_eq!(legal.as_slice(), &[Heading::Right]);
        assert!(!policy.can_stop(&key(1, 2, Heading::Right, 3)));
        assert!(policy.can_stop(&key(1, 2, Heading::Right, 4)));
    }

    #[test]
    fn dead_end_in_corner() {
        let grid = "111\n111\n111".parse::<CostGrid>().unwrap();
        // At max run in the bottom-right corner only the upward turn stays on the grid.
        let policy = MoveConstraintPolicy::standard();
        let legal = policy.legal_headings(&key(2, 2, Heading::Right, 3), &grid);
        assert_eq!(legal.as_slice(), &[Heading::Up]);
        // Below the minimum run with the wall straight ahead there is nothing to do.
        let policy = MoveConstraintPolicy::ultra();
        assert!(policy
            .legal_headings(&key(2, 1, Heading::Right, 2), &grid)
            .is_empty());
    }
}
