//! Dodge the Blocks
//!
//! Blocks fall at a shared speed. Every tenth dodged block makes all of them
//! faster and, up to the cap, adds one more.

use rand::Rng;

use super::bounded::Bounded;
use super::collision::boxes_touch;
use super::game::Simulation;
use super::state::{GameEvent, GameRng, Position, TickInput};
use crate::consts::*;
use crate::platform::PixelDisplay;

/// Height blocks respawn at, just above the field
pub const SPAWN_Y: i32 = -10;
/// Vertical gap between the initial blocks
pub const SPAWN_SPACING: i32 = 30;

pub type Obstacles = Bounded<Position, DODGE_MAX_OBSTACLES>;

fn block_size() -> Position {
    Position::new(DODGE_BOX_W, DODGE_BOX_H)
}

fn random_spawn_x(rng: &mut GameRng) -> i32 {
    rng.random_range(0..WIDTH - DODGE_BOX_W)
}

#[derive(Debug, Clone)]
pub struct DodgeState {
    pub player: Position,
    pub obstacles: Obstacles,
    pub speed: i32,
    pub lives: u8,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
}

impl DodgeState {
    pub fn new(high_score: u32, rng: &mut GameRng) -> Self {
        let mut obstacles = Obstacles::new();
        for i in 0..DODGE_START_OBSTACLES as i32 {
            let _ = obstacles.push(Position::new(random_spawn_x(rng), SPAWN_Y - i * SPAWN_SPACING));
        }
        Self {
            player: Position::new(WIDTH / 2, HEIGHT - 10),
            obstacles,
            speed: DODGE_START_SPEED,
            lives: DODGE_START_LIVES,
            score: 0,
            high_score,
            game_over: false,
        }
    }

    /// Slide the player by the tilt offset, truncated to whole pixels
    pub fn steer(&mut self, tilt_x: f32) {
        self.player.x += (tilt_x * DODGE_PLAYER_SPEED) as i32;
        self.player.x = self.player.x.clamp(0, WIDTH - DODGE_BOX_W);
    }

    /// Difficulty step after a dodged block
    fn on_dodged(&mut self, rng: &mut GameRng) {
        self.score += 1;
        if self.score % 10 == 0 {
            self.speed += 1;
            if !self.obstacles.is_full() {
                let _ = self.obstacles.push(Position::new(random_spawn_x(rng), SPAWN_Y));
            }
        }
    }
}

impl Simulation for DodgeState {
    fn update(&mut self, input: &TickInput, rng: &mut GameRng) -> Option<GameEvent> {
        if self.game_over {
            return None;
        }

        self.steer(input.tilt.x);

        let mut i = 0;
        while i < self.obstacles.len() {
            let slot = &mut self.obstacles.as_mut_slice()[i];
            slot.y += self.speed;

            if boxes_touch(*slot, block_size(), self.player, block_size()) {
                self.lives = self.lives.saturating_sub(1);
                if self.lives == 0 {
                    self.game_over = true;
                    return None;
                }
                *slot = Position::new(random_spawn_x(rng), SPAWN_Y);
            }

            if slot.y > HEIGHT {
                *slot = Position::new(random_spawn_x(rng), SPAWN_Y);
                self.on_dodged(rng);
            }
            i += 1;
        }
        None
    }

    fn render(&self, display: &mut dyn PixelDisplay) {
        display.clear();
        display.draw_rect(self.player.x, self.player.y, DODGE_BOX_W, DODGE_BOX_H, true);
        for block in &self.obstacles {
            display.draw_rect(block.x, block.y, DODGE_BOX_W, DODGE_BOX_H, false);
        }
        display.draw_text(0, 0, &format!("Score: {}", self.score));
        display.draw_text(WIDTH - 40, 0, &format!("Lives: {}", self.lives));
        display.draw_text(0, 10, &format!("Best: {}", self.high_score));
        display.present();
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn high_score(&self) -> u32 {
        self.high_score
    }

    fn is_over(&self) -> bool {
        self.game_over
    }
}
