use log::trace;

use crate::map::world::World;
use crate::robot::state::Robot;

/// The fixed instruction set a robot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    TurnLeft,
    TurnRight,
    MoveForward,
}

impl Instruction {
    /// Maps an instruction letter, `None` for anything outside `L`, `R`, `F`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Instruction::TurnLeft),
            'R' => Some(Instruction::TurnRight),
            'F' => Some(Instruction::MoveForward),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Instruction::TurnLeft => 'L',
            Instruction::TurnRight => 'R',
            Instruction::MoveForward => 'F',
        }
    }

    /// Applies this instruction to `robot`. The world decides whether a forward
    /// move off the grid loses the robot or is ignored.
    pub fn execute(self, robot: &mut Robot, world: &mut World) {
        match self {
            Instruction::TurnLeft => robot.orientation = robot.orientation.left(),
            Instruction::TurnRight => robot.orientation = robot.orientation.right(),
            Instruction::MoveForward => move_forward(robot, world),
        }
        trace!("{} -> {}", self.as_char(), robot);
    }
}

fn move_forward(robot: &mut Robot, world: &mut World) {
    if robot.is_lost() {
        return;
    }

    let (next_x, next_y) = robot.next_position();
    if world.process_move(robot.x, robot.y, next_x, next_y) {
        robot.mark_lost();
        return;
    }

    // Scent-protected robots stay where they are rather than clipping to the edge.
    if !world.is_within_bounds(next_x, next_y) {
        return;
    }
    // In-bounds cells always fit in i32 because the bounds do.
    if let (Ok(x), Ok(y)) = (i32::try_from(next_x), i32::try_from(next_y)) {
        robot.move_to(x, y);
    }
}
