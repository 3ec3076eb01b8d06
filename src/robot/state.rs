use std::fmt;

use crate::robot::orientation::Orientation;

/// A single robot: where it stands, which way it faces, and whether it fell off.
///
/// Once `lost` is set the position is the last cell the robot stood on
/// inside the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robot {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
    pub lost: bool,
}

impl Robot {
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self {
            x,
            y,
            orientation,
            lost: false,
        }
    }

    /// Cell one step ahead in the faced direction. Does not move the robot.
    ///
    /// Widened to `i64` so a step past `i32::MAX` or `i32::MIN` is still a
    /// plain out-of-bounds cell.
    pub fn next_position(&self) -> (i64, i64) {
        let (dx, dy) = self.orientation.forward_delta();
        (
            i64::from(self.x) + i64::from(dx),
            i64::from(self.y) + i64::from(dy),
        )
    }

    /// Overwrites the position; the caller has already checked the destination.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn mark_lost(&mut self) {
        self.lost = true;
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.orientation)?;
        if self.lost {
            write!(f, " LOST")?;
        }
        Ok(())
    }
}
