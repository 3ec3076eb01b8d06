//! Reads the text protocol into a [`World`] and a list of [`RobotRun`]s.
//!
//! ```text
//! 5 3          <- max_x max_y
//! 1 1 E        <- x y orientation
//! RFRFRFRF     <- instructions
//!
//! 3 2 N
//! FRRFLLFFRRFLL
//! ```
//!
//! Any error aborts the whole input; nothing is simulated from a partial parse.

use log::{debug, warn};
use std::iter::Enumerate;
use std::num::{IntErrorKind, ParseIntError};
use std::str::Lines;

use crate::error::ParseError;
use crate::map::world::World;
use crate::robot::instruction::Instruction;
use crate::robot::orientation::Orientation;
use crate::robot::state::Robot;
use crate::simulator::RobotRun;

/// Line cursor that remembers 1-based line numbers for error reporting.
pub struct InputLines<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> InputLines<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
        }
    }

    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        self.lines.next().map(|(idx, line)| (idx + 1, line))
    }

    fn next_non_blank(&mut self) -> Option<(usize, &'a str)> {
        self.lines
            .by_ref()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .find(|(_, line)| !line.is_empty())
    }
}

/// Parses the world bounds from the first line.
pub fn parse_world(input: &mut InputLines<'_>) -> Result<World, ParseError> {
    let (line, text) = input.next_line().ok_or(ParseError::MissingBounds)?;
    let invalid = |reason| ParseError::InvalidBounds {
        line,
        value: text.to_string(),
        reason,
    };

    let parts: Vec<&str> = text.split_whitespace().collect();
    let [max_x, max_y] = parts.as_slice() else {
        return Err(invalid("expected two integers"));
    };
    let max_x: i32 = max_x
        .parse()
        .map_err(|e| invalid(int_reason(&e, "not an integer", "out of range")))?;
    let max_y: i32 = max_y
        .parse()
        .map_err(|e| invalid(int_reason(&e, "not an integer", "out of range")))?;
    if max_x < 0 || max_y < 0 {
        return Err(invalid("bounds must be non-negative"));
    }

    debug!("World bounds {}x{}", max_x, max_y);
    Ok(World::new(max_x, max_y))
}

/// Parses every remaining robot block until the input runs out.
pub fn parse_robots(input: &mut InputLines<'_>) -> Result<Vec<RobotRun>, ParseError> {
    let mut runs = Vec::new();
    while let Some(run) = parse_robot(input)? {
        runs.push(run);
    }
    Ok(runs)
}

fn parse_robot(input: &mut InputLines<'_>) -> Result<Option<RobotRun>, ParseError> {
    let Some((line, text)) = input.next_non_blank() else {
        return Ok(None);
    };
    let invalid = |reason| ParseError::InvalidPosition {
        line,
        value: text.to_string(),
        reason,
    };

    let parts: Vec<&str> = text.split_whitespace().collect();
    let [x, y, orientation] = parts.as_slice() else {
        return Err(invalid("expected `x y orientation`"));
    };
    let x: i32 = x
        .parse()
        .map_err(|e| invalid(int_reason(&e, "x is not an integer", "x is out of range")))?;
    let y: i32 = y
        .parse()
        .map_err(|e| invalid(int_reason(&e, "y is not an integer", "y is out of range")))?;
    let orientation: Orientation = orientation
        .parse()
        .map_err(|source| ParseError::InvalidOrientation { line, source })?;

    let (_, instructions) = input
        .next_line()
        .ok_or(ParseError::MissingInstructionLine { line })?;

    Ok(Some(RobotRun::new(
        Robot::new(x, y, orientation),
        parse_instructions(instructions.trim()),
    )))
}

fn int_reason(
    err: &ParseIntError,
    not_integer: &'static str,
    out_of_range: &'static str,
) -> &'static str {
    match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range,
        _ => not_integer,
    }
}

/// Maps each letter to an instruction. Unknown letters are skipped with a warning.
pub fn parse_instructions(text: &str) -> Vec<Instruction> {
    text.chars()
        .filter_map(|c| {
            let instruction = Instruction::from_char(c);
            if instruction.is_none() {
                warn!("Unknown instruction {:?} ignored", c);
            }
            instruction
        })
        .collect()
}

/// Parses a complete input: bounds line followed by robot blocks.
///
/// Robots starting outside the world are accepted as given, with a warning.
pub fn parse_input(text: &str) -> Result<(World, Vec<RobotRun>), ParseError> {
    let mut input = InputLines::new(text);
    let world = parse_world(&mut input)?;
    let runs = parse_robots(&mut input)?;

    for run in &runs {
        if !world.is_within_bounds(i64::from(run.robot.x), i64::from(run.robot.y)) {
            warn!("Robot {} starts outside the world", run.robot);
        }
    }
    Ok((world, runs))
}
