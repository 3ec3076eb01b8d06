use log::debug;

use crate::map::world::World;
use crate::robot::instruction::Instruction;
use crate::robot::state::Robot;

/// One robot and the instructions it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotRun {
    pub robot: Robot,
    pub instructions: Vec<Instruction>,
}

impl RobotRun {
    pub fn new(robot: Robot, instructions: Vec<Instruction>) -> Self {
        Self {
            robot,
            instructions,
        }
    }
}

/// Drives robots through their instructions against a shared world.
///
/// Runs must happen one after another: scent left by one robot decides the
/// fate of the next one at the same cell.
#[derive(Debug, Default)]
pub struct Simulator;

impl Simulator {
    pub fn new() -> Self {
        Self
    }

    /// Executes `instructions` in order, stopping as soon as the robot is lost.
    pub fn run_robot(&self, robot: &mut Robot, world: &mut World, instructions: &[Instruction]) {
        debug!("Robot starting at {}", robot);
        for (step, instruction) in instructions.iter().enumerate() {
            instruction.execute(robot, world);
            if robot.is_lost() {
                debug!(
                    "Robot lost at step {}, {} instructions skipped",
                    step + 1,
                    instructions.len() - step - 1
                );
                break;
            }
        }
        debug!("Robot finished at {}", robot);
    }

    pub fn run(&self, run: &mut RobotRun, world: &mut World) {
        self.run_robot(&mut run.robot, world, &run.instructions);
    }
}
