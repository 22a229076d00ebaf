use crucible_pathfinding::{
    solver::{astar::AstarSolver, GridSolver},
    CostGrid, MoveConstraintPolicy, SearchError,
};
use crucible_pathfinding_benchmark::REFERENCE_GRID;
use grid_util::ValueGrid;
use std::error::Error;
use std::fs;
use std::time::Instant;

// Reads a grid of digits from the file given as first argument (or uses the built-in
// reference grid) and prints the cheapest crossing for both run presets:
//
//     cargo run --example heat_loss -- grid.txt
//
// Set RUST_LOG=info to see the search log.

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let input = match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => REFERENCE_GRID.to_owned(),
    };
    let grid: CostGrid = input.parse()?;
    println!("Grid {}x{}", grid.width(), grid.height());
    let solver = AstarSolver::new();
    for (name, policy) in [
        ("Standard", MoveConstraintPolicy::standard()),
        ("Ultra", MoveConstraintPolicy::ultra()),
    ] {
        let start = Instant::now();
        match solver.solve(&grid, policy) {
            Ok(solution) => {
                println!(
                    "{name}: cost {} ({} states, {:?})",
                    solution.cost,
                    solution.expanded,
                    start.elapsed()
                );
                println!("{}", grid.render_path(&solution.path()));
            }
            Err(SearchError::UnreachableGoal { .. }) => println!("{name}: goal unreachable"),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
