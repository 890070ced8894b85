//! Tilt Maze level layouts
//!
//! Each level is generated from a handful of wall runs. Walls are single
//! pixel cells (drawn as 4x4 blocks); the generated set must fit
//! [`WALL_CAPACITY`] or the level is rejected.

use thiserror::Error;

use super::bounded::{Bounded, CapacityError};
use super::state::Position;
use crate::consts::{FOOD_PER_LEVEL, MAZE_LEVELS, WALL_CAPACITY};
use crate::on_screen;

pub type Walls = Bounded<Position, WALL_CAPACITY>;

/// Player start for every level
pub const MAZE_START: Position = Position::new(10, 10);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("no maze level {0}")]
    UnknownLevel(u8),

    #[error("level {level} generates more walls than fit: {source}")]
    TooManyWalls {
        level: u8,
        #[source]
        source: CapacityError,
    },

    #[error("level {level} places {what} off screen")]
    OffScreen { level: u8, what: &'static str },
}

/// Generated walls and food for one level
#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub level: u8,
    pub foods: [Position; FOOD_PER_LEVEL],
    pub walls: Walls,
}

impl LevelLayout {
    pub fn is_wall(&self, pos: Position) -> bool {
        self.walls.contains(&pos)
    }
}

struct WallBuilder {
    level: u8,
    walls: Walls,
}

impl WallBuilder {
    fn new(level: u8) -> Self {
        Self {
            level,
            walls: Walls::new(),
        }
    }

    fn cell(&mut self, x: i32, y: i32) -> Result<(), LevelError> {
        self.walls
            .push(Position::new(x, y))
            .map_err(|source| LevelError::TooManyWalls {
                level: self.level,
                source,
            })
    }

    /// Vertical run at `x` over `ys`, skipping rows rejected by `keep`
    fn column(
        &mut self,
        x: i32,
        ys: std::ops::Range<i32>,
        keep: impl Fn(i32) -> bool,
    ) -> Result<(), LevelError> {
        for y in ys.filter(|&y| keep(y)) {
            self.cell(x, y)?;
        }
        Ok(())
    }

    /// Horizontal run at `y` over `xs`, skipping columns rejected by `keep`
    fn row(
        &mut self,
        y: i32,
        xs: std::ops::Range<i32>,
        keep: impl Fn(i32) -> bool,
    ) -> Result<(), LevelError> {
        for x in xs.filter(|&x| keep(x)) {
            self.cell(x, y)?;
        }
        Ok(())
    }
}

fn all(_: i32) -> bool {
    true
}

fn foods(points: [(i32, i32); FOOD_PER_LEVEL]) -> [Position; FOOD_PER_LEVEL] {
    points.map(|(x, y)| Position::new(x, y))
}

/// Generate and validate the layout for `level` (1-based)
pub fn build_level(level: u8) -> Result<LevelLayout, LevelError> {
    let mut b = WallBuilder::new(level);
    let food = match level {
        1 => {
            b.column(60, 20..41, |y| y % 10 == 0)?;
            foods([(30, 10), (90, 10), (30, 50), (90, 50)])
        }
        2 => {
            // Cross
            b.column(60, 20..40, all)?;
            b.row(30, 40..80, all)?;
            foods([(20, 20), (100, 20), (20, 40), (100, 40)])
        }
        3 => {
            b.column(40, 10..60, |y| y != 30)?;
            b.row(30, 40..90, |x| x != 60)?;
            b.column(80, 30..60, all)?;
            foods([(10, 50), (110, 10), (110, 50), (10, 10)])
        }
        4 => {
            // Zig-zag posts
            for i in 0..5 {
                let y = 15 + i * 8;
                b.cell(20, y)?;
                b.cell(40, y + 4)?;
                b.cell(60, y)?;
                b.cell(80, y + 4)?;
                b.cell(100, y)?;
            }
            foods([(10, 10), (110, 10), (10, 50), (110, 50)])
        }
        5 => {
            for y in 10..60 {
                b.cell(20, y)?;
                if !(30..=40).contains(&y) {
                    b.cell(60, y)?;
                }
            }
            b.row(30, 20..110, |x| !(50..=70).contains(&x))?;
            b.column(90, 30..60, all)?;
            foods([(5, 5), (115, 5), (5, 55), (115, 55)])
        }
        _ => return Err(LevelError::UnknownLevel(level)),
    };

    if !b.walls.iter().all(|&w| on_screen(w)) {
        return Err(LevelError::OffScreen { level, what: "a wall" });
    }
    if !food.iter().all(|&f| on_screen(f)) {
        return Err(LevelError::OffScreen { level, what: "food" });
    }

    Ok(LevelLayout {
        level,
        foods: food,
        walls: b.walls,
    })
}

/// Build every level once; used at start-up and in tests
pub fn validate_all() -> Result<(), LevelError> {
    for level in 1..=MAZE_LEVELS {
        build_level(level)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_levels_fit() {
        assert_eq!(validate_all(), Ok(()));
    }

    #[test]
    fn test_wall_counts() {
        let counts: Vec<usize> = (1..=MAZE_LEVELS)
            .map(|l| build_level(l).unwrap().walls.len())
            .collect();
        assert_eq!(counts, vec![3, 60, 128, 25, 188]);
    }

    #[test]
    fn test_capacity_is_sized_to_largest_level() {
        let largest = (1..=MAZE_LEVELS)
            .map(|l| build_level(l).unwrap().walls.len())
            .max()
            .unwrap();
        assert_eq!(largest, WALL_CAPACITY);
    }

    #[test]
    fn test_level_one_walls() {
        let layout = build_level(1).unwrap();
        assert!(layout.is_wall(Position::new(60, 20)));
        assert!(layout.is_wall(Position::new(60, 30)));
        assert!(layout.is_wall(Position::new(60, 40)));
        assert!(!layout.is_wall(Position::new(60, 25)));
    }

    #[test]
    fn test_level_three_has_gaps() {
        let layout = build_level(3).unwrap();
        // The column gap at y=30 is closed again by the row
        assert!(layout.is_wall(Position::new(40, 30)));
        assert!(layout.is_wall(Position::new(40, 29)));
        assert!(!layout.is_wall(Position::new(40, 60)));
        assert!(!layout.is_wall(Position::new(60, 30)));
        assert!(layout.is_wall(Position::new(80, 59)));
    }

    #[test]
    fn test_unknown_levels_rejected() {
        assert_eq!(build_level(0).unwrap_err(), LevelError::UnknownLevel(0));
        assert_eq!(build_level(6).unwrap_err(), LevelError::UnknownLevel(6));
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut b = WallBuilder::new(9);
        let result = b.row(0, 0..(WALL_CAPACITY as i32 + 1), all);
        assert!(matches!(
            result,
            Err(LevelError::TooManyWalls { level: 9, .. })
        ));
        assert_eq!(b.walls.len(), WALL_CAPACITY);
    }
}
