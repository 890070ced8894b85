//! Types shared by every game simulation

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

pub use crate::Position;

/// RNG used for food and obstacle placement
pub type GameRng = Pcg32;

/// Seed a placement RNG from process entropy.
///
/// Placement is cosmetic, so runs are not reproducible; tests seed
/// [`GameRng`] directly instead.
pub fn entropy_rng() -> GameRng {
    Pcg32::seed_from_u64(rand::random())
}

/// Discrete movement request derived from the filtered tilt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionalIntent {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl DirectionalIntent {
    /// One-pixel step for this intent (y grows downward)
    pub fn step(self) -> Position {
        match self {
            DirectionalIntent::Up => Position::new(0, -1),
            DirectionalIntent::Down => Position::new(0, 1),
            DirectionalIntent::Left => Position::new(-1, 0),
            DirectionalIntent::Right => Position::new(1, 0),
            DirectionalIntent::None => Position::ZERO,
        }
    }
}

/// Input for a single tick, both read modes of the tilt conditioner
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Dominant-axis direction, `None` inside the deadband
    pub intent: DirectionalIntent,
    /// Filtered tilt in g per axis (continuous mode)
    pub tilt: Vec2,
}

impl TickInput {
    pub fn intent(intent: DirectionalIntent) -> Self {
        Self {
            intent,
            tilt: Vec2::ZERO,
        }
    }

    pub fn tilt(x: f32, y: f32) -> Self {
        Self {
            intent: DirectionalIntent::None,
            tilt: Vec2::new(x, y),
        }
    }
}

/// Something a tick produced that the session should react to (sound)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A maze food marker was picked up
    FoodCollected,
    /// The last maze food of the level was picked up
    LevelComplete,
}
