//! Snake
//!
//! The snake moves one 4-pixel cell per tick. Segments shift toward the tail
//! by slot, so the body always sits on the 4-pixel grid.

use rand::Rng;

use super::bounded::Bounded;
use super::game::{Simulation, draw_hud};
use super::state::{DirectionalIntent, GameEvent, GameRng, Position, TickInput};
use crate::consts::*;
use crate::on_screen;
use crate::platform::PixelDisplay;

/// Snake heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    pub fn opposite(self) -> Self {
        match self {
            Heading::Up => Heading::Down,
            Heading::Right => Heading::Left,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
        }
    }

    /// Offset of one cell in this direction
    pub fn delta(self) -> Position {
        match self {
            Heading::Up => Position::new(0, -SNAKE_CELL),
            Heading::Right => Position::new(SNAKE_CELL, 0),
            Heading::Down => Position::new(0, SNAKE_CELL),
            Heading::Left => Position::new(-SNAKE_CELL, 0),
        }
    }

    pub fn from_intent(intent: DirectionalIntent) -> Option<Self> {
        match intent {
            DirectionalIntent::Up => Some(Heading::Up),
            DirectionalIntent::Right => Some(Heading::Right),
            DirectionalIntent::Down => Some(Heading::Down),
            DirectionalIntent::Left => Some(Heading::Left),
            DirectionalIntent::None => None,
        }
    }
}

pub type SnakeBody = Bounded<Position, SNAKE_CAPACITY>;

#[derive(Debug, Clone)]
pub struct SnakeState {
    /// Head first
    pub body: SnakeBody,
    pub heading: Heading,
    pub food: Position,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
}

/// Random cell on the 4-pixel grid
pub fn random_food(rng: &mut GameRng) -> Position {
    Position::new(
        rng.random_range(0..WIDTH / SNAKE_CELL) * SNAKE_CELL,
        rng.random_range(0..HEIGHT / SNAKE_CELL) * SNAKE_CELL,
    )
}

impl SnakeState {
    pub fn new(high_score: u32, rng: &mut GameRng) -> Self {
        let mut body = SnakeBody::new();
        for i in 0..SNAKE_START_LENGTH as i32 {
            // Start length is far below capacity
            let _ = body.push(Position::new(WIDTH / 2 - i * SNAKE_CELL, HEIGHT / 2));
        }
        Self {
            body,
            heading: Heading::Right,
            food: random_food(rng),
            score: 0,
            high_score,
            game_over: false,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Turn toward the intent unless it would reverse onto the body
    fn steer(&mut self, intent: DirectionalIntent) {
        if let Some(heading) = Heading::from_intent(intent)
            && heading != self.heading.opposite()
        {
            self.heading = heading;
        }
    }

    fn hits_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }
}

impl Simulation for SnakeState {
    fn update(&mut self, input: &TickInput, rng: &mut GameRng) -> Option<GameEvent> {
        if self.game_over {
            return None;
        }

        self.steer(input.intent);

        let tail = self.body[self.body.len() - 1];
        let segments = self.body.as_mut_slice();
        segments.copy_within(0..segments.len() - 1, 1);
        segments[0] += self.heading.delta();

        if self.head() == self.food {
            // A full body stops growing; the meal still scores
            if let Err(e) = self.body.push(tail) {
                log::debug!("Snake at full length: {}", e);
            }
            self.score += SNAKE_FOOD_POINTS;
            self.food = random_food(rng);
        }

        if !on_screen(self.head()) || self.hits_itself() {
            self.game_over = true;
        }
        None
    }

    fn render(&self, display: &mut dyn PixelDisplay) {
        display.clear();
        for segment in &self.body {
            display.draw_rect(segment.x, segment.y, SNAKE_CELL, SNAKE_CELL, true);
        }
        display.draw_rect(self.food.x, self.food.y, SNAKE_CELL, SNAKE_CELL, false);
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
