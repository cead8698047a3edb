use crate::location::Location;

/// One of the four unit vectors the snake can move along.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The cell delta one movement step applies.
    pub(super) fn delta(self) -> Location {
        match self {
            Direction::North => Location::new(0, -1),
            Direction::East => Location::new(1, 0),
            Direction::South => Location::new(0, 1),
            Direction::West => Location::new(-1, 0),
        }
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}
