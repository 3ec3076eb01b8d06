use log::debug;
use std::collections::HashSet;
use std::fmt;

/// The rectangular grid robots move on, `[0, max_x] x [0, max_y]` inclusive,
/// plus the cells where earlier robots fell off.
#[derive(Debug, Clone)]
pub struct World {
    max_x: i32,
    max_y: i32,
    scents: HashSet<(i32, i32)>,
}

impl World {
    /// Bounds must be non-negative; the parser rejects anything else.
    pub fn new(max_x: i32, max_y: i32) -> Self {
        debug_assert!(max_x >= 0 && max_y >= 0, "world bounds must be non-negative");
        Self {
            max_x,
            max_y,
            scents: HashSet::new(),
        }
    }

    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Takes `i64` so a destination one step beyond the `i32` range can be judged.
    pub fn is_within_bounds(&self, x: i64, y: i64) -> bool {
        (0..=i64::from(self.max_x)).contains(&x) && (0..=i64::from(self.max_y)).contains(&y)
    }

    pub fn has_scent(&self, x: i32, y: i32) -> bool {
        self.scents.contains(&(x, y))
    }

    pub fn add_scent(&mut self, x: i32, y: i32) {
        if self.scents.insert((x, y)) {
            debug!("Scent left at ({}, {})", x, y);
        }
    }

    pub fn scent_count(&self) -> usize {
        self.scents.len()
    }

    /// Judges a forward move from `from` to `to` and returns `true` if the robot is lost.
    ///
    /// - destination inside the grid: safe, nothing changes.
    /// - destination outside, `from` already scented: safe, the robot stays put.
    /// - destination outside, `from` unscented: `from` gets scented and the robot is lost.
    ///
    /// The robot's position is never touched here.
    pub fn process_move(&mut self, from_x: i32, from_y: i32, to_x: i64, to_y: i64) -> bool {
        if self.is_within_bounds(to_x, to_y) {
            return false;
        }
        if self.has_scent(from_x, from_y) {
            debug!(
                "Move ({}, {}) -> ({}, {}) ignored, cell is scented",
                from_x, from_y, to_x, to_y
            );
            return false;
        }
        self.add_scent(from_x, from_y);
        true
    }
}

/// Draws the grid top row first: `#` for a scented cell, `.` otherwise.
impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..=self.max_y).rev() {
            for x in 0..=self.max_x {
                let symbol = if self.has_scent(x, y) { '#' } else { '.' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
