pub mod instruction;
pub mod orientation;
pub mod state;

pub use instruction::Instruction;
pub use orientation::Orientation;
pub use state::Robot;
