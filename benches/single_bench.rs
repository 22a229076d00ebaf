use criterion::{criterion_group, criterion_main, Criterion};
use crucible_pathfinding::{
    solver::{astar::AstarSolver, GridSolver},
    CostGrid, MoveConstraintPolicy,
};
use crucible_pathfinding_benchmark::*;
use std::hint::black_box;

fn large_bench_single(c: &mut Criterion) {
    let grid = CostGrid::from_lines(random_grid_lines(141, 141, 17)).unwrap();
    let solver = AstarSolver::new();
    c.bench_function("random 141x141, A* with path 4..=10", |b| {
        b.iter(|| {
            let solution = solver.solve(&grid, MoveConstraintPolicy::ultra()).unwrap();
            black_box(solution.path())
        })
    });
}

criterion_group!(benches, large_bench_single);
criterion_main!(benches);
