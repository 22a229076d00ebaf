use core::fmt;
use grid_util::Point;

/// One of the four cardinal headings on a screen-oriented grid, where [Heading::Down]
/// increases `y` and [Heading::Right] increases `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    pub fn opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// Counter-clockwise quarter turn.
    pub fn turn_left(self) -> Heading {
        match self {
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Down => Heading::Right,
            Heading::Right => Heading::Up,
        }
    }

    /// Clockwise quarter turn.
    pub fn turn_right(self) -> Heading {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    /// Unit offset as `(dx, dy)`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    /// The point one step away from `point` in this heading. Bounds are not checked.
    pub fn step(self, point: Point) -> Point {
        let (dx, dy) = self.delta();
        Point::new(point.x + dx, point.y + dy)
    }

    /// The heading leading from `from` to the orthogonally adjacent `to`, if any.
    pub fn between(from: &Point, to: &Point) -> Option<Heading> {
        Heading::ALL.into_iter().find(|h| h.step(*from) == *to)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = match self {
            Heading::Up => '^',
            Heading::Down => 'v',
            Heading::Left => '<',
            Heading::Right => '>',
        };
        write!(f, "{}", c)
    }
}
