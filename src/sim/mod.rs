//! Game simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches hardware:
//! - Updates are plain state transitions driven by a [`TickInput`]
//! - Rendering only issues calls on a [`crate::platform::PixelDisplay`]
//! - Randomness comes from a caller-owned [`GameRng`]

pub mod bounded;
pub mod collision;
pub mod dodge;
pub mod game;
pub mod levels;
pub mod pong;
pub mod snake;
pub mod state;
pub mod tilt;
pub mod tilt_maze;

pub use bounded::{Bounded, CapacityError};
pub use dodge::DodgeState;
pub use game::{Game, GameId, Simulation};
pub use levels::{LevelError, LevelLayout, build_level};
pub use pong::PongState;
pub use snake::{Heading, SnakeState};
pub use state::{DirectionalIntent, GameEvent, GameRng, Position, TickInput, entropy_rng};
pub use tilt::SignalConditioner;
pub use tilt_maze::{LevelAdvance, TiltMazeState};
