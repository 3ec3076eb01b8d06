use log::info;

use crate::map::world::World;
use crate::simulator::{RobotRun, Simulator};

pub struct App {
    world: World,
    simulator: Simulator,
}

impl App {
    /// Wraps a parsed world. Every robot run through this app shares its scents.
    pub fn new(world: World) -> Self {
        Self {
            world,
            simulator: Simulator::new(),
        }
    }

    /// Runs each robot to completion in the given order and returns one
    /// report line per robot, `"X Y O"` or `"X Y O LOST"`.
    pub fn run(&mut self, runs: &mut [RobotRun]) -> Vec<String> {
        let report: Vec<String> = runs
            .iter_mut()
            .map(|run| {
                self.simulator.run(run, &mut self.world);
                run.robot.to_string()
            })
            .collect();

        let lost = runs.iter().filter(|run| run.robot.is_lost()).count();
        info!(
            "Simulated {} robots on a {}x{} world, {} lost, {} scented cells",
            runs.len(),
            self.world.max_x(),
            self.world.max_y(),
            lost,
            self.world.scent_count()
        );
        report
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_input;

    #[test]
    fn reports_in_input_order() {
        let (world, mut runs) =
            parse_input("5 3\n1 1 E\nRFRFRFRF\n3 2 N\nFRRFLLFFRRFLL\n0 3 W\nLLFFFLFLFL\n").unwrap();
        let mut app = App::new(world);

        assert_eq!(app.run(&mut runs), vec!["1 1 E", "3 3 N LOST", "2 3 S"]);
        assert!(app.world().has_scent(3, 3));
    }

    #[test]
    fn scent_carries_across_calls() {
        let (world, mut first) = parse_input("5 3\n0 0 S\nF\n").unwrap();
        let mut app = App::new(world);
        assert_eq!(app.run(&mut first), vec!["0 0 S LOST"]);

        let (_, mut second) = parse_input("5 3\n0 0 S\nF\n").unwrap();
        assert_eq!(app.run(&mut second), vec!["0 0 S"]);
    }
}
