//! The four games behind one interface

use std::fmt;
use std::str::FromStr;

use super::dodge::DodgeState;
use super::levels::LevelError;
use super::pong::PongState;
use super::snake::SnakeState;
use super::state::{GameEvent, GameRng, TickInput};
use super::tilt_maze::TiltMazeState;
use crate::consts::WIDTH;
use crate::platform::PixelDisplay;

/// Which game, also the key of its high-score record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameId {
    #[default]
    Snake,
    Pong,
    Dodge,
    TiltMaze,
}

impl GameId {
    /// Menu order
    pub const ALL: [GameId; 4] = [GameId::Snake, GameId::Pong, GameId::Dodge, GameId::TiltMaze];

    /// Record key
    pub fn as_str(&self) -> &'static str {
        match self {
            GameId::Snake => "snake",
            GameId::Pong => "pong",
            GameId::Dodge => "dodge",
            GameId::TiltMaze => "tilt_maze",
        }
    }

    /// Menu label
    pub fn title(&self) -> &'static str {
        match self {
            GameId::Snake => "Snake",
            GameId::Pong => "Pong",
            GameId::Dodge => "Dodge Blocks",
            GameId::TiltMaze => "Tilt Maze",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            GameId::Snake => 0,
            GameId::Pong => 1,
            GameId::Dodge => 2,
            GameId::TiltMaze => 3,
        }
    }

    /// Next entry in the menu, wrapping
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "snake" => Ok(GameId::Snake),
            "pong" => Ok(GameId::Pong),
            "dodge" => Ok(GameId::Dodge),
            "tilt_maze" | "maze" => Ok(GameId::TiltMaze),
            other => Err(format!("unknown game: {other}")),
        }
    }
}

/// Per-game simulation contract
pub trait Simulation {
    /// Advance one tick. A terminal game ignores further updates.
    fn update(&mut self, input: &TickInput, rng: &mut GameRng) -> Option<GameEvent>;
    /// Draw the current state and present it exactly once
    fn render(&self, display: &mut dyn PixelDisplay);
    fn score(&self) -> u32;
    /// Record as read when the game started
    fn high_score(&self) -> u32;
    fn is_over(&self) -> bool;
}

/// Score on the left, record on the right
pub(crate) fn draw_hud(display: &mut dyn PixelDisplay, left: &str, high_score: u32) {
    display.draw_text(0, 0, left);
    display.draw_text(WIDTH - 70, 0, &format!("Best: {high_score}"));
}

/// An active game
#[derive(Debug, Clone)]
pub enum Game {
    Snake(SnakeState),
    Pong(PongState),
    Dodge(DodgeState),
    TiltMaze(TiltMazeState),
}

impl Game {
    /// Fresh game of kind `id` with the cached record
    pub fn new(id: GameId, high_score: u32, rng: &mut GameRng) -> Result<Self, LevelError> {
        Ok(match id {
            GameId::Snake => Game::Snake(SnakeState::new(high_score, rng)),
            GameId::Pong => Game::Pong(PongState::new(high_score)),
            GameId::Dodge => Game::Dodge(DodgeState::new(high_score, rng)),
            GameId::TiltMaze => Game::TiltMaze(TiltMazeState::new(high_score)?),
        })
    }

    pub fn id(&self) -> GameId {
        match self {
            Game::Snake(_) => GameId::Snake,
            Game::Pong(_) => GameId::Pong,
            Game::Dodge(_) => GameId::Dodge,
            Game::TiltMaze(_) => GameId::TiltMaze,
        }
    }

    fn sim(&self) -> &dyn Simulation {
        match self {
            Game::Snake(s) => s,
            Game::Pong(s) => s,
            Game::Dodge(s) => s,
            Game::TiltMaze(s) => s,
        }
    }

    fn sim_mut(&mut self) -> &mut dyn Simulation {
        match self {
            Game::Snake(s) => s,
            Game::Pong(s) => s,
            Game::Dodge(s) => s,
            Game::TiltMaze(s) => s,
        }
    }

    pub fn update(&mut self, input: &TickInput, rng: &mut GameRng) -> Option<GameEvent> {
        self.sim_mut().update(input, rng)
    }

    pub fn render(&self, display: &mut dyn PixelDisplay) {
        self.sim().render(display)
    }

    pub fn score(&self) -> u32 {
        self.sim().score()
    }

    pub fn high_score(&self) -> u32 {
        self.sim().high_score()
    }

    pub fn is_over(&self) -> bool {
        self.sim().is_over()
    }

    /// A maze run that cleared every level
    pub fn won(&self) -> bool {
        matches!(self, Game::TiltMaze(maze) if maze.won())
    }

    /// Maze state, if this is the maze
    pub fn as_maze_mut(&mut self) -> Option<&mut TiltMazeState> {
        match self {
            Game::TiltMaze(maze) => Some(maze),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_ids_round_trip_through_names() {
        for id in GameId::ALL {
            assert_eq!(id.as_str().parse::<GameId>(), Ok(id));
        }
        assert!("tetris".parse::<GameId>().is_err());
    }

    #[test]
    fn test_menu_wraps() {
        assert_eq!(GameId::Snake.next(), GameId::Pong);
        assert_eq!(GameId::Dodge.next(), GameId::TiltMaze);
        assert_eq!(GameId::TiltMaze.next(), GameId::Snake);
    }

    #[test]
    fn test_new_games_start_fresh() {
        let mut rng = GameRng::seed_from_u64(5);
        for id in GameId::ALL {
            let game = Game::new(id, 30, &mut rng).unwrap();
            assert_eq!(game.id(), id);
            assert_eq!(game.score(), 0);
            assert_eq!(game.high_score(), 30);
            assert!(!game.is_over());
        }
    }

    #[test]
    fn test_dispatch_reaches_variant() {
        let mut rng = GameRng::seed_from_u64(5);
        let mut game = Game::new(GameId::Pong, 0, &mut rng).unwrap();
        game.update(&TickInput::default(), &mut rng);
        match &game {
            Game::Pong(p) => assert_eq!(p.ball.x, 66),
            other => panic!("unexpected game {:?}", other.id()),
        }
        assert!(game.as_maze_mut().is_none());
    }
}
