use crate::error::SearchError;
use crate::heading::Heading;
use core::fmt;
use grid_util::{Point, SimpleValueGrid, ValueGrid};
use std::str::FromStr;

/// [CostGrid] stores the cost of entering each cell of a fully populated rectangular grid.
/// The grid is read-only during a search; it implements [ValueGrid] so it can be built up
/// cell by cell as well as parsed from digit rows. Writes go through [ValueGrid::set] so
/// the cached cheapest cost stays in step with the cells.
#[derive(Clone, Debug)]
pub struct CostGrid {
    grid: SimpleValueGrid<u32>,
    min_cost: u32,
}

impl Default for CostGrid {
    fn default() -> CostGrid {
        CostGrid {
            grid: SimpleValueGrid::new(0, 0, 0),
            min_cost: 0,
        }
    }
}

impl CostGrid {
    /// Parses rows of decimal digits. Line index is the row (`y`), character index the
    /// column (`x`) and the digit the cost of entering that cell. Trailing blank lines are
    /// ignored, every other row must have the width of the first.
    pub fn from_lines<I, S>(lines: I) -> Result<CostGrid, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows: Vec<Vec<u32>> = Vec::new();
        for (y, line) in lines.into_iter().enumerate() {
            let line = line.as_ref().trim_end_matches('\r');
            let row = line
                .chars()
                .enumerate()
                .map(|(x, c)| {
                    c.to_digit(10).ok_or(SearchError::InvalidGridInput {
                        line: y,
                        column: x,
                        character: c,
                    })
                })
                .collect::<Result<Vec<u32>, _>>()?;
            rows.push(row);
        }
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(SearchError::EmptyGrid),
        };
        if let Some((line, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(SearchError::RaggedGrid {
                line,
                expected: width,
                found: row.len(),
            });
        }
        let mut cost_grid = CostGrid::new(width, rows.len(), 0);
        for (y, row) in rows.iter().enumerate() {
            for (x, &cost) in row.iter().enumerate() {
                cost_grid.grid.set(x as i32, y as i32, cost);
            }
        }
        cost_grid.recompute_min_cost();
        Ok(cost_grid)
    }

    /// Cost of entering `pos`. Positions outside the grid cost 0; callers are expected to
    /// check [in_bounds](Self::in_bounds) first.
    pub fn cost(&self, pos: &Point) -> u32 {
        if self.in_bounds(pos) {
            self.grid.get_point(*pos)
        } else {
            0
        }
    }

    pub fn in_bounds(&self, pos: &Point) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width()
            && (pos.y as usize) < self.height()
    }

    /// The top-left cell.
    pub fn start(&self) -> Point {
        Point::new(0, 0)
    }

    /// The bottom-right cell.
    pub fn goal(&self) -> Point {
        Point::new(self.width() as i32 - 1, self.height() as i32 - 1)
    }

    /// Smallest cost of any cell, used to scale distance heuristics.
    pub fn min_cost(&self) -> u32 {
        self.min_cost
    }

    fn recompute_min_cost(&mut self) {
        let (w, h) = (self.width() as i32, self.height() as i32);
        self.min_cost = (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .map(|(x, y)| self.grid.get(x, y))
            .min()
            .unwrap_or(0);
    }

    /// Sum of the costs of every cell entered along `path`. The first point is where the
    /// path starts and is not charged.
    pub fn path_cost(&self, path: &[Point]) -> u64 {
        path.iter().skip(1).map(|p| u64::from(self.cost(p))).sum()
    }

    /// Read-only view of the underlying cells.
    pub fn cells(&self) -> &SimpleValueGrid<u32> {
        &self.grid
    }

    /// Draws the grid with every cell entered along `path` replaced by the arrow of the
    /// heading it was entered with.
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut cells: Vec<Vec<char>> = (0..self.height() as i32)
            .map(|y| {
                (0..self.width() as i32)
                    .map(|x| digit_char(self.grid.get(x, y)))
                    .collect()
            })
            .collect();
        for pair in path.windows(2) {
            if let (Some(h), true) = (Heading::between(&pair[0], &pair[1]), self.in_bounds(&pair[1])) {
                cells[pair[1].y as usize][pair[1].x as usize] =
                    h.to_string().chars().next().unwrap_or('#');
            }
        }
        let mut out = String::with_capacity(self.width() * self.height() + self.height());
        for row in cells {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

fn digit_char(cost: u32) -> char {
    char::from_digit(cost, 10).unwrap_or('+')
}

impl FromStr for CostGrid {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CostGrid::from_lines(s.lines())
    }
}

impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            let row = (0..self.width() as i32)
                .map(|x| digit_char(self.grid.get(x, y)))
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl ValueGrid<u32> for CostGrid {
    fn new(width: usize, height: usize, default_value: u32) -> Self {
        CostGrid {
            grid: SimpleValueGrid::new(width, height, default_value),
            min_cost: default_value,
        }
    }
    fn get(&self, x: i32, y: i32) -> u32 {
        self.grid.get(x, y)
    }
    /// Updates the cost of a cell, keeping the cached minimum cost current.
    fn set(&mut self, x: i32, y: i32, cost: u32) {
        let old = self.grid.get(x, y);
        self.grid.set(x, y, cost);
        if cost < self.min_cost {
            self.min_cost = cost;
        } else if old == self.min_cost && cost > old {
            self.recompute_min_cost();
        }
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
