//! Tilt Maze
//!
//! Roll a one-pixel marble around five fixed mazes and pick up the four food
//! markers in each. Clearing level 5 ends the run.

use super::collision::within_reach;
use super::game::{Simulation, draw_hud};
use super::levels::{LevelError, MAZE_START, Walls, build_level};
use super::state::{GameEvent, GameRng, Position, TickInput};
use crate::consts::*;
use crate::on_screen;
use crate::platform::PixelDisplay;

/// Result of moving past a cleared level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelAdvance {
    /// The next level is loaded
    Next(u8),
    /// The last level was cleared; the run is over
    Finished,
}

#[derive(Debug, Clone)]
pub struct TiltMazeState {
    pub player: Position,
    /// `None` once collected
    pub foods: [Option<Position>; FOOD_PER_LEVEL],
    pub walls: Walls,
    pub level: u8,
    pub levels_cleared: u8,
    pub level_complete: bool,
    pub game_over: bool,
    pub high_score: u32,
}

impl TiltMazeState {
    pub fn new(high_score: u32) -> Result<Self, LevelError> {
        let mut state = Self {
            player: MAZE_START,
            foods: [None; FOOD_PER_LEVEL],
            walls: Walls::new(),
            level: 0,
            levels_cleared: 0,
            level_complete: false,
            game_over: false,
            high_score,
        };
        state.load_level(1)?;
        Ok(state)
    }

    /// Replace walls and food with the layout of `level`
    pub fn load_level(&mut self, level: u8) -> Result<(), LevelError> {
        let layout = build_level(level)?;
        self.level = level;
        self.walls = layout.walls;
        self.foods = layout.foods.map(Some);
        self.player = MAZE_START;
        self.level_complete = false;
        Ok(())
    }

    pub fn remaining_food(&self) -> usize {
        self.foods.iter().flatten().count()
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.walls.contains(&pos)
    }

    /// True after the final level has been cleared
    pub fn won(&self) -> bool {
        self.levels_cleared >= MAZE_LEVELS
    }

    /// Move on from a completed level
    pub fn advance_level(&mut self) -> Result<LevelAdvance, LevelError> {
        if !self.level_complete || self.game_over {
            return Ok(LevelAdvance::Next(self.level));
        }
        if self.level >= MAZE_LEVELS {
            self.game_over = true;
            return Ok(LevelAdvance::Finished);
        }
        let next = self.level + 1;
        self.load_level(next)?;
        Ok(LevelAdvance::Next(next))
    }

    /// Pick up at most one food within reach of the player
    fn collect_food(&mut self) -> Option<GameEvent> {
        let player = self.player;
        let slot = self
            .foods
            .iter_mut()
            .find(|slot| slot.is_some_and(|food| within_reach(player, food, FOOD_REACH)))?;
        *slot = None;

        if self.remaining_food() == 0 {
            self.level_complete = true;
            self.levels_cleared += 1;
            Some(GameEvent::LevelComplete)
        } else {
            Some(GameEvent::FoodCollected)
        }
    }

    /// Frame `frame` of the banner shown while the next level loads
    pub fn render_transition(&self, display: &mut dyn PixelDisplay, frame: i32) {
        display.clear();
        let inset = (4 - frame.clamp(0, 4)) * 6;
        display.draw_rect(inset, inset / 2, WIDTH - 2 * inset, HEIGHT - inset, false);
        display.draw_text(WIDTH / 2 - 20, HEIGHT / 2 - 4, &format!("Level {}", self.level));
        display.present();
    }
}

impl Simulation for TiltMazeState {
    fn update(&mut self, input: &TickInput, _rng: &mut GameRng) -> Option<GameEvent> {
        if self.game_over || self.level_complete {
            return None;
        }

        let target = self.player + input.intent.step();
        if !on_screen(target) || self.is_wall(target) {
            return None;
        }
        self.player = target;
        self.collect_food()
    }

    fn render(&self, display: &mut dyn PixelDisplay) {
        display.clear();
        draw_hud(display, &format!("Level: {}", self.level), self.high_score);
        for wall in &self.walls {
            display.draw_rect(wall.x, wall.y, 4, 4, true);
        }
        for food in self.foods.iter().flatten() {
            display.draw_rect(food.x - 2, food.y - 2, 8, 8, false);
        }
        display.draw_rect(self.player.x, self.player.y, 4, 4, true);
        if self.level_complete {
            display.draw_text(WIDTH / 2 - 30, HEIGHT / 2 - 10, "Level clear!");
        }
        display.present();
    }

    fn score(&self) -> u32 {
        u32::from(self.levels_cleared) * MAZE_POINTS_PER_LEVEL
    }

    fn high_score(&self) -> u32 {
        self.high_score
    }

    fn is_over(&self) -> bool {
        self.game_over
    }
}
