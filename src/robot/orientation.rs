use std::fmt;
use std::str::FromStr;

use crate::error::UnknownOrientation;

/// Compass heading of a robot. Rotation follows N -> E -> S -> W -> N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    pub fn all() -> [Self; 4] {
        [
            Orientation::North,
            Orientation::East,
            Orientation::South,
            Orientation::West,
        ]
    }

    pub fn left(self) -> Self {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    pub fn right(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    /// Unit step for one move in the faced direction. North is +y.
    pub fn forward_delta(self) -> (i32, i32) {
        match self {
            Orientation::North => (0, 1),
            Orientation::East => (1, 0),
            Orientation::South => (0, -1),
            Orientation::West => (-1, 0),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }
}

impl FromStr for Orientation {
    type Err = UnknownOrientation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Orientation::North),
            "E" => Ok(Orientation::East),
            "S" => Ok(Orientation::South),
            "W" => Ok(Orientation::West),
            other => Err(UnknownOrientation(other.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_right_are_inverses() {
        for o in Orientation::all() {
            assert_eq!(o.left().right(), o);
            assert_eq!(o.right().left(), o);
        }
    }

    #[test]
    fn four_turns_return_to_start() {
        for o in Orientation::all() {
            assert_eq!(o.left().left().left().left(), o);
            assert_eq!(o.right().right().right().right(), o);
        }
    }

    #[test]
    fn right_follows_compass_order() {
        assert_eq!(Orientation::North.right(), Orientation::East);
        assert_eq!(Orientation::East.right(), Orientation::South);
        assert_eq!(Orientation::South.right(), Orientation::West);
        assert_eq!(Orientation::West.right(), Orientation::North);
    }

    #[test]
    fn forward_delta_is_a_single_axis_unit_step() {
        for o in Orientation::all() {
            let (dx, dy) = o.forward_delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{o:?} moves diagonally");
        }
        assert_eq!(Orientation::North.forward_delta(), (0, 1));
        assert_eq!(Orientation::West.forward_delta(), (-1, 0));
    }

    #[test]
    fn letter_round_trip() {
        for o in Orientation::all() {
            assert_eq!(o.to_string().parse::<Orientation>().unwrap(), o);
        }
    }

    #[test]
    fn rejects_unknown_letters() {
        for bad in ["X", "n", "", "NE"] {
            let err = bad.parse::<Orientation>().unwrap_err();
            assert_eq!(err, UnknownOrientation(bad.to_string()));
        }
    }
}
