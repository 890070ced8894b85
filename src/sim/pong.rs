//! Pong (single player against the walls)
//!
//! The paddle follows the continuous tilt offset; the ball bounces off the
//! side walls, the top wall and the paddle band along the bottom edge.

use super::collision::{at_side_wall, below_field};
use super::game::{Simulation, draw_hud};
use super::state::{GameEvent, GameRng, Position, TickInput};
use crate::consts::*;
use crate::platform::PixelDisplay;

/// Top of the band where the paddle can return the ball
pub const PADDLE_BAND_Y: i32 = HEIGHT - 4;

#[derive(Debug, Clone)]
pub struct PongState {
    pub ball: Position,
    pub velocity: Position,
    /// Paddle centre x
    pub paddle: i32,
    pub paddle_width: i32,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
}

impl PongState {
    pub fn new(high_score: u32) -> Self {
        Self {
            ball: Position::new(WIDTH / 2, HEIGHT / 2),
            velocity: Position::new(2, 2),
            paddle: WIDTH / 2,
            paddle_width: PONG_PADDLE_WIDTH,
            score: 0,
            high_score,
            game_over: false,
        }
    }

    /// Place the paddle from the tilt offset, keeping it fully on screen
    pub fn steer(&mut self, tilt_x: f32) {
        let half = self.paddle_width / 2;
        let target = WIDTH / 2 + (tilt_x * PONG_PADDLE_TRAVEL) as i32;
        self.paddle = target.clamp(half, WIDTH - half);
    }

    fn paddle_covers(&self, x: i32) -> bool {
        let half = self.paddle_width / 2;
        x >= self.paddle - half && x <= self.paddle + half
    }
}

impl Simulation for PongState {
    fn update(&mut self, input: &TickInput, _rng: &mut GameRng) -> Option<GameEvent> {
        if self.game_over {
            return None;
        }

        self.steer(input.tilt.x);
        self.ball += self.velocity;

        if at_side_wall(self.ball.x) {
            self.velocity.x = -self.velocity.x;
            self.ball.x = self.ball.x.clamp(0, WIDTH - 1);
        }

        if self.ball.y <= 0 && self.velocity.y < 0 {
            self.velocity.y = -self.velocity.y;
            self.ball.y = 0;
        }

        // Only a descending ball can be returned, so one pass through the band scores once
        let returned =
            self.velocity.y > 0 && self.ball.y >= PADDLE_BAND_Y && self.paddle_covers(self.ball.x);
        if returned {
            self.velocity.y = -self.velocity.y;
            self.score += PONG_HIT_POINTS;
        }

        if !returned && below_field(self.ball.y) {
            self.game_over = true;
        }
        None
    }

    fn render(&self, display: &mut dyn PixelDisplay) {
        display.clear();
        display.draw_rect(self.ball.x - 1, self.ball.y - 1, 3, 3, true);
        display.draw_rect(
            self.paddle - self.paddle_width / 2,
            HEIGHT - 2,
            self.paddle_width,
            2,
            true,
        );
        draw_hud(display, &format!("Score: {}", self.score), self.high_score);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FrameBuffer;
    use rand::SeedableRng;

    fn rng() -> GameRng {
        GameRng::seed_from_u64(1)
    }

    #[test]
    fn test_initial_state() {
        let state = PongState::new(40);
        assert_eq!(state.ball, Position::new(64, 32));
        assert_eq!(state.velocity, Position::new(2, 2));
        assert_eq!(state.paddle, 64);
        assert_eq!(state.high_score, 40);
    }

    #[test]
    fn test_ball_moves_without_input() {
        let mut state = PongState::new(0);
        state.update(&TickInput::default(), &mut rng());
        assert_eq!(state.ball, Position::new(66, 34));
    }

    #[test]
    fn test_paddle_follows_tilt_and_clamps() {
        let mut state = PongState::new(0);
        state.steer(0.5);
        assert_eq!(state.paddle, 89);
        state.steer(-3.0);
        assert_eq!(state.paddle, 10);
        state.steer(3.0);
        assert_eq!(state.paddle, WIDTH - 10);
    }

    #[test]
    fn test_side_wall_reflects() {
        let mut state = PongState::new(0);
        state.ball = Position::new(WIDTH - 2, 20);
        state.velocity = Position::new(2, 2);
        state.update(&TickInput::default(), &mut rng());
        assert_eq!(state.velocity.x, -2);
        assert_eq!(state.ball.x, WIDTH - 1);

        state.update(&TickInput::default(), &mut rng());
        assert_eq!(state.velocity.x, -2);
    }

    #[test]
    fn test_top_wall_reflects() {
        let mut state = PongState::new(0);
        state.ball = Position::new(30, 2);
        state.velocity = Position::new(2, -2);
        state.update(&TickInput::default(), &mut rng());
        assert_eq!(state.ball.y, 0);
        assert_eq!(state.velocity.y, 2);
    }

    #[test]
    fn test_paddle_hit_scores_once() {
        let mut state = PongState::new(0);
        state.ball = Position::new(64, PADDLE_BAND_Y - 2);
        state.velocity = Position::new(0, 2);
        state.update(&TickInput::default(), &mut rng());
        assert_eq!(state.velocity.y, -2);
        assert_eq!(state.score, PONG_HIT_POINTS);

        // Still inside the band next tick, but rising: no second hit
        state.ball.y = PADDLE_BAND_Y + 2;
        state.update(&TickInput::default(), &mut rng());
        assert_eq!(state.score, PONG_HIT_POINTS);
        assert_eq!(state.velocity.y, -2);
    }

    #[test]
    fn test_paddle_save_at_bottom_edge_continues() {
        let mut state = PongState::new(0);
        state.ball = Position::new(64, HEIGHT - 2);
        state.velocity = Position::new(2, 2);
        state.update(&TickInput::default(), &mut rng());
        assert_eq!(state.ball, Position::new(66, HEIGHT));
        assert_eq!(state.velocity.y, -2);
        assert_eq!(state.score, PONG_HIT_POINTS);
        assert!(!state.game_over);

        state.update(&TickInput::default(), &mut rng());
        assert_eq!(state.ball.y, HEIGHT - 2);
        assert!(!state.game_over);
    }

    #[test]
    fn test_miss_ends_game() {
        let mut state = PongState::new(0);
        let mut rng = rng();
        // The ball reaches the band at x=92, outside the paddle's 54..=74
        for _ in 0..16 {
            state.update(&TickInput::default(), &mut rng);
        }
        assert!(state.game_over);
        assert_eq!(state.score, 0);

        let frozen = state.ball;
        state.update(&TickInput::default(), &mut rng);
        assert_eq!(state.ball, frozen);
    }

    #[test]
    fn test_render_draws_paddle() {
        let state = PongState::new(0);
        let mut fb = FrameBuffer::new();
        state.render(&mut fb);
        assert!(fb.pixel(64, HEIGHT - 1));
        assert!(fb.pixel(64, 32));
        assert_eq!(fb.present_count(), 1);
    }
}
