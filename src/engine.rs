use crate::{
    cost_grid::CostGrid,
    error::SearchError,
    frontier::{Frontier, NO_PARENT},
    heading::Heading,
    policy::MoveConstraintPolicy,
    solver::GridSolver,
    state::{SearchState, StateKey},
};
use core::fmt;
use fxhash::FxHashSet;
use grid_util::Point;
use log::{debug, info, warn};

/// Progress of a single search, advanced one expansion at a time by [SearchRun::step].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    /// The goal was popped; `index` identifies its state in the frontier.
    Found { index: usize, cost: u64 },
    Exhausted,
}

/// Runs the constrained search over a borrowed grid. The solver only contributes the
/// heuristic, the policy decides which moves exist.
#[derive(Clone, Debug)]
pub struct PathSearchEngine<'a, S> {
    grid: &'a CostGrid,
    policy: MoveConstraintPolicy,
    solver: &'a S,
    step_budget: Option<usize>,
}

impl<'a, S: GridSolver> PathSearchEngine<'a, S> {
    pub fn new(grid: &'a CostGrid, policy: MoveConstraintPolicy, solver: &'a S) -> Self {
        PathSearchEngine {
            grid,
            policy,
            solver,
            step_budget: None,
        }
    }

    /// Gives up with [SearchError::BudgetExhausted] once more than `budget` states have
    /// been expanded.
    pub fn with_step_budget(mut self, budget: usize) -> Self {
        self.step_budget = Some(budget);
        self
    }

    /// Finds the cheapest way from `start` to `goal`. The start cell is never charged and
    /// the goal only counts once it is reached with a completed minimum run.
    pub fn search(&self, start: Point, goal: Point) -> Result<Solution, SearchError> {
        for p in [start, goal] {
            if !self.grid.in_bounds(&p) {
                return Err(SearchError::OutOfBounds(p));
            }
        }
        info!(
            "Searching from {} to {} with runs of {}..={}",
            start,
            goal,
            self.policy.min_run(),
            self.policy.max_run()
        );
        if start == goal {
            return Ok(Solution::stationary(start));
        }
        let mut run = SearchRun::new(self, start, goal);
        loop {
            match run.step() {
                SearchStatus::Running => {
                    if let Some(budget) = self.step_budget {
                        if run.expanded > budget {
                            warn!("Step budget of {} exceeded", budget);
                            return Err(SearchError::BudgetExhausted {
                                expanded: run.expanded,
                            });
                        }
                    }
                }
                SearchStatus::Found { index, cost } => {
                    info!(
                        "Reached {} at cost {} after expanding {} states",
                        goal, cost, run.expanded
                    );
                    return Ok(run.into_solution(index, cost));
                }
                SearchStatus::Exhausted => {
                    warn!(
                        "Frontier exhausted after expanding {} states, {} is unreachable",
                        run.expanded, goal
                    );
                    return Err(SearchError::UnreachableGoal { start, goal });
                }
            }
        }
    }
}

/// Mutable bookkeeping of one search: the open set and the identities already expanded.
pub struct SearchRun<'e, 'a, S> {
    engine: &'e PathSearchEngine<'a, S>,
    start: Point,
    goal: Point,
    frontier: Frontier<StateKey, u64>,
    visited: FxHashSet<StateKey>,
    expanded: usize,
}

impl<'e, 'a, S: GridSolver> SearchRun<'e, 'a, S> {
    /// Queues the first step out of `start` in every heading that stays on the grid, each
    /// with a run length of 1. From the top-left corner these are [Heading::Right] and
    /// [Heading::Down].
    pub fn new(engine: &'e PathSearchEngine<'a, S>, start: Point, goal: Point) -> Self {
        let mut run = SearchRun {
            engine,
            start,
            goal,
            frontier: Frontier::new(),
            visited: FxHashSet::default(),
            expanded: 0,
        };
        let grid = engine.grid;
        for heading in Heading::ALL {
            if !grid.in_bounds(&heading.step(start)) {
                continue;
            }
            let seed = SearchState::seed(grid, start, heading);
            debug!("Seeding {} heading {} at cost {}", seed.key.position, heading, seed.cost);
            run.frontier.push(NO_PARENT, seed.key, seed.cost, |key| {
                engine.solver.heuristic(grid, &key.position, &goal)
            });
        }
        run
    }

    /// Pops the cheapest state and either reports the goal or expands it.
    pub fn step(&mut self) -> SearchStatus {
        let engine = self.engine;
        let (grid, policy, goal) = (engine.grid, engine.policy, self.goal);
        let Some((index, cost)) = self.frontier.pop() else {
            return SearchStatus::Exhausted;
        };
        let Some(&key) = self.frontier.node(index) else {
            return SearchStatus::Running;
        };
        if key.position == goal && policy.can_stop(&key) {
            return SearchStatus::Found { index, cost };
        }
        if !self.visited.insert(key) {
            return SearchStatus::Running;
        }
        self.expanded += 1;
        let state = SearchState { key, cost };
        for heading in policy.legal_headings(&key, grid) {
            let next = state.expand(heading, grid);
            if self.visited.contains(&next.key) {
                continue;
            }
            self.frontier.push(index, next.key, next.cost, |key| {
                engine.solver.heuristic(grid, &key.position, &goal)
            });
        }
        SearchStatus::Running
    }

    /// Number of distinct states expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    fn into_solution(self, index: usize, cost: u64) -> Solution {
        Solution {
            cost,
            expanded: self.expanded,
            start: self.start,
            goal_index: Some(index),
            trail: self.frontier,
        }
    }
}

/// Outcome of a successful search. The path is only rebuilt from the predecessor map when
/// asked for.
pub struct Solution {
    pub cost: u64,
    pub expanded: usize,
    start: Point,
    goal_index: Option<usize>,
    trail: Frontier<StateKey, u64>,
}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Solution")
            .field("cost", &self.cost)
            .field("expanded", &self.expanded)
            .field("start", &self.start)
            .finish_non_exhaustive()
    }
}

impl Solution {
    fn stationary(start: Point) -> Solution {
        Solution {
            cost: 0,
            expanded: 0,
            start,
            goal_index: None,
            trail: Frontier::new(),
        }
    }

    fn states(&self) -> Vec<StateKey> {
        self.goal_index
            .map(|index| self.trail.path_to(index))
            .unwrap_or_default()
    }

    /// Every cell visited, from the start to the goal inclusive.
    pub fn path(&self) -> Vec<Point> {
        std::iter::once(self.start)
            .chain(self.states().into_iter().map(|key| key.position))
            .collect()
    }

    /// The heading of every step taken, in order.
    pub fn headings(&self) -> Vec<Heading> {
        self.states().into_iter().map(|key| key.heading).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{astar::AstarSolver, dijkstra::DijkstraSolver};

    #[test]
    fn status_moves_from_running_to_found() {
        let grid: CostGrid = "11\n11".parse().unwrap();
        let engine = PathSearchEngine::new(&grid, MoveConstraintPolicy::standard(), &DijkstraSolver);
        let mut run = SearchRun::new(&engine, grid.start(), grid.goal());
        let mut status = SearchStatus::Running;
        while status == SearchStatus::Running {
            status = run.step();
        }
        assert!(matches!(status, SearchStatus::Found { cost: 2, .. }));
        assert_eq!(run.expanded(), 2);
    }

    #[test]
    fn rejects_points_off_the_grid() {
        let grid: CostGrid = "11\n11".parse().unwrap();
        let engine = PathSearchEngine::new(&grid, MoveConstraintPolicy::standard(), &DijkstraSolver);
        assert_eq!(
            engine.search(Point::new(0, 0), Point::new(2, 1)).unwrap_err(),
            SearchError::OutOfBounds(Point::new(2, 1))
        );
    }

    #[test]
    fn budget_stops_search() {
        let grid: CostGrid = "1234\n5678\n9123\n4567".parse().unwrap();
        let engine = PathSearchEngine::new(&grid, MoveConstraintPolicy::standard(), &DijkstraSolver)
            .with_step_budget(1);
        assert_eq!(
            engine.search(grid.start(), grid.goal()).unwrap_err(),
            SearchError::BudgetExhausted { expanded: 2 }
        );
    }

    #[test]
    fn path_and_headings_agree() {
        let grid: CostGrid = "2413\n3215\n3255\n3446".parse().unwrap();
        let solver = AstarSolver::new();
        let engine = PathSearchEngine::new(&grid, MoveConstraintPolicy::standard(), &solver);
        let solution = engine.search(grid.start(), grid.goal()).unwrap();
        let path = solution.path();
        let headings = solution.headings();
        assert_eq!(path.len(), headings.len() + 1);
        assert_eq!(path.first(), Some(&grid.start()));
        assert_eq!(path.last(), Some(&grid.goal()));
        for (pair, heading) in path.windows(2).zip(&headings) {
            assert_eq!(heading.step(pair[0]), pair[1]);
        }
        assert_eq!(grid.path_cost(&path), solution.cost);
    }

    #[test]
    fn runs_are_exact_when_bounds_match() {
        let grid: CostGrid = "11111\n21111\n21111\n21111\n21111".parse().unwrap();
        let policy = MoveConstraintPolicy::new(4, 4).unwrap();
        let engine = PathSearchEngine::new(&grid, policy, &DijkstraSolver);
        let solution = engine.search(grid.start(), grid.goal()).unwrap();
        assert_eq!(solution.cost, 8);
        assert_eq!(
            solution.headings(),
            vec![
                Heading::Right,
                Heading::Right,
                Heading::Right,
                Heading::Right,
                Heading::Down,
                Heading::Down,
                Heading::Down,
                Heading::Down
            ]
        );
    }

    #[test]
    fn goal_needs_completed_run() {
        let grid: CostGrid = "111".parse().unwrap();
        let reach = |min_run| {
            let policy = MoveConstraintPolicy::new(min_run, 5).unwrap();
            PathSearchEngine::new(&grid, policy, &DijkstraSolver).search(grid.start(), grid.goal())
        };
        assert_eq!(reach(2).unwrap().cost, 2);
        assert!(matches!(
            reach(3),
            Err(SearchError::UnreachableGoal { .. })
        ));
    }
}
