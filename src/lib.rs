//! Tilt Arcade - a tilt-controlled multi-game handheld console
//!
//! Core modules:
//! - `sim`: Game simulations (Snake, Pong, Dodge, Tilt Maze) and tilt conditioning
//! - `session`: Menu / play / game-over sequencing on one cooperative loop
//! - `platform`: Display, sensor, buzzer, button and clock collaborators
//! - `persistence`: High-score record stores
//! - `highscores`: Bridge between the session and the record store

pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::{ScoreOutcome, ScoreStore};
pub use session::{SessionContext, SessionController};
pub use settings::Settings;

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Display dimensions (monochrome, origin top-left)
    pub const WIDTH: i32 = 128;
    pub const HEIGHT: i32 = 64;

    /// Active game tick period
    pub const GAME_SPEED_MS: u32 = 300;

    /// Accelerometer counts per g at the configured full-scale range (±2 g)
    pub const ACCEL_COUNTS_PER_G: f32 = 16384.0;
    /// Low-pass smoothing factor applied to each tilt axis
    pub const TILT_FILTER_ALPHA: f32 = 0.2;
    /// Minimum filtered tilt (in g) before a direction is reported
    pub const TILT_DEADBAND: f32 = 0.3;

    /// Snake
    pub const SNAKE_CAPACITY: usize = 100;
    pub const SNAKE_START_LENGTH: usize = 3;
    pub const SNAKE_CELL: i32 = 4;
    pub const SNAKE_FOOD_POINTS: u32 = 10;

    /// Pong
    pub const PONG_PADDLE_WIDTH: i32 = 20;
    pub const PONG_PADDLE_TRAVEL: f32 = 50.0;
    pub const PONG_HIT_POINTS: u32 = 5;

    /// Dodge
    pub const DODGE_MAX_OBSTACLES: usize = 10;
    pub const DODGE_START_OBSTACLES: usize = 3;
    pub const DODGE_START_SPEED: i32 = 2;
    pub const DODGE_START_LIVES: u8 = 3;
    pub const DODGE_BOX_W: i32 = 10;
    pub const DODGE_BOX_H: i32 = 8;
    pub const DODGE_PLAYER_SPEED: f32 = 5.0;

    /// Tilt Maze
    pub const MAZE_LEVELS: u8 = 5;
    pub const FOOD_PER_LEVEL: usize = 4;
    /// Largest wall set any level generates (level 5)
    pub const WALL_CAPACITY: usize = 188;
    pub const FOOD_REACH: i32 = 4;
    pub const MAZE_POINTS_PER_LEVEL: u32 = 100;

    /// Session pacing
    pub const BUTTON_POLL_MS: u32 = 100;
    pub const MENU_SETTLE_MS: u32 = 200;
    pub const LEVEL_CLEAR_PAUSE_MS: u32 = 2000;
    pub const LEVEL_START_PAUSE_MS: u32 = 500;
    pub const LEVEL_BANNER_FRAMES: i32 = 5;
    pub const LEVEL_BANNER_FRAME_MS: u32 = 100;
}

/// Integer pixel position
pub type Position = IVec2;

/// True if the position lies on the visible display
#[inline]
pub fn on_screen(pos: Position) -> bool {
    pos.x >= 0 && pos.x < consts::WIDTH && pos.y >= 0 && pos.y < consts::HEIGHT
}
