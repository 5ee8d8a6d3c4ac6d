mod components;
mod movement;
mod tic;

pub use components::{InputState, Player};
pub use movement::try_move;
pub use tic::{FrameClock, MOVE_SPEED, TURN_RATE, advance};
