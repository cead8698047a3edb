use std::ops::Add;

/// A cell coordinate on the board.
///
/// Coordinates are signed so that a position one step past the left or top
/// edge is still representable; the board decides what is in bounds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Location {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Location {
    pub(crate) const fn new(x: i32, y: i32) -> Location {
        Location { x, y }
    }
}

impl Add for Location {
    type Output = Location;

    fn add(self, rhs: Location) -> Location {
        Location {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Location::new(10, 10), Location::new(1, 0), Location::new(11, 10))]
    #[case(Location::new(0, 0), Location::new(-1, 0), Location::new(-1, 0))]
    #[case(Location::new(3, 7), Location::new(0, -1), Location::new(3, 6))]
    #[case(Location::new(-2, 5), Location::new(2, -5), Location::new(0, 0))]
    fn test_add(#[case] lhs: Location, #[case] rhs: Location, #[case] sum: Location) {
        assert_eq!(lhs + rhs, sum);
    }

    #[test]
    fn equality_is_componentwise() {
        assert_eq!(Location::new(4, 9), Location::new(4, 9));
        assert_ne!(Location::new(4, 9), Location::new(9, 4));
    }
}
