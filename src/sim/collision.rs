//! Collision helpers for the pixel-grid games
//!
//! All tests are inclusive on the edges, matching how the firmware's
//! games have always felt: touching counts as a hit.

use super::state::Position;
use crate::consts::{HEIGHT, WIDTH};

/// Inclusive overlap test for two axis-aligned boxes.
///
/// `a` spans `a.x..=a.x + a_size.x`; the far edge of `b` uses `b_size`.
pub fn boxes_touch(a: Position, a_size: Position, b: Position, b_size: Position) -> bool {
    a.x + a_size.x >= b.x
        && a.x <= b.x + b_size.x
        && a.y + a_size.y >= b.y
        && a.y <= b.y + b_size.y
}

/// True when `b` lies within `reach` pixels of `a` on both axes independently
pub fn within_reach(a: Position, b: Position, reach: i32) -> bool {
    (a.x - b.x).abs() <= reach && (a.y - b.y).abs() <= reach
}

/// True when an x coordinate is at or beyond either side wall
#[inline]
pub fn at_side_wall(x: i32) -> bool {
    x <= 0 || x >= WIDTH - 1
}

/// True when a point has left the field through the bottom edge
#[inline]
pub fn below_field(y: i32) -> bool {
    y >= HEIGHT
}
