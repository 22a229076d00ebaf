use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The 13x13 reference grid. Cheapest crossing costs 102 with runs of 1..=3 and 94 with
/// runs of 4..=10.
pub const REFERENCE_GRID: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

/// A grid whose cheap top row is longer than a run of 10, punishing a mover that has to
/// turn into the expensive rows. Cheapest crossing with runs of 4..=10 costs 71.
pub const UNFORTUNATE_GRID: &str = "\
111111111111
999999999991
999999999991
999999999991
999999999991
";

/// A named grid together with the expected cheapest crossing per run constraint.
pub struct Scenario {
    pub name: &'static str,
    pub grid: &'static str,
    /// `(min_run, max_run, cost)`
    pub expected: &'static [(usize, usize, u64)],
}

pub fn get_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "reference",
            grid: REFERENCE_GRID,
            expected: &[(1, 3, 102), (4, 10, 94)],
        },
        Scenario {
            name: "unfortunate",
            grid: UNFORTUNATE_GRID,
            expected: &[(4, 10, 71)],
        },
        Scenario {
            name: "two_by_two",
            grid: "11\n11\n",
            expected: &[(1, 3, 2)],
        },
    ]
}

/// Rows of random digits in `1..=9`, reproducible from `seed`.
pub fn random_grid_lines(width: usize, height: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_grid_lines_with(width, height, 1..=9, &mut rng)
}

/// Rows of random digits drawn from `digits`, which must lie within `0..=9`.
pub fn random_grid_lines_with(
    width: usize,
    height: usize,
    digits: std::ops::RangeInclusive<u32>,
    rng: &mut StdRng,
) -> Vec<String> {
    (0..height)
        .map(|_| {
            (0..width)
                .map(|_| char::from_digit(rng.gen_range(digits.clone()), 10).unwrap_or('9'))
                .collect()
        })
        .collect()
}
