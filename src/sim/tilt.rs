//! Tilt signal conditioning
//!
//! Raw accelerometer counts are normalized to g, smoothed with a per-axis
//! exponential low-pass filter and then read either as a discrete
//! [`DirectionalIntent`] (dominant axis past the deadband) or as the
//! continuous filtered offset.

use glam::Vec2;

use super::state::{DirectionalIntent, TickInput};
use crate::consts::{ACCEL_COUNTS_PER_G, TILT_DEADBAND, TILT_FILTER_ALPHA};
use crate::platform::AccelSample;

/// Exponential smoothing: `alpha * new + (1 - alpha) * previous`
#[inline]
pub fn low_pass(new_value: f32, previous: f32, alpha: f32) -> f32 {
    alpha * new_value + (1.0 - alpha) * previous
}

/// Per-session tilt filter state
#[derive(Debug, Clone)]
pub struct SignalConditioner {
    alpha: f32,
    deadband: f32,
    filtered: Vec2,
}

impl Default for SignalConditioner {
    fn default() -> Self {
        Self::new(TILT_FILTER_ALPHA, TILT_DEADBAND)
    }
}

impl SignalConditioner {
    pub fn new(alpha: f32, deadband: f32) -> Self {
        Self {
            alpha,
            deadband,
            filtered: Vec2::ZERO,
        }
    }

    /// Forget filter history (new game)
    pub fn reset(&mut self) {
        self.filtered = Vec2::ZERO;
    }

    /// Feed one raw sample through the filter
    pub fn feed(&mut self, sample: AccelSample) {
        let g = sample.in_g(ACCEL_COUNTS_PER_G);
        self.filtered = Vec2::new(
            low_pass(g.x, self.filtered.x, self.alpha),
            low_pass(g.y, self.filtered.y, self.alpha),
        );
    }

    /// Feed a sample and read both modes at once
    pub fn sample(&mut self, sample: AccelSample) -> TickInput {
        self.feed(sample);
        TickInput {
            intent: self.intent(),
            tilt: self.offset(),
        }
    }

    /// Continuous read: filtered tilt in g per axis
    pub fn offset(&self) -> Vec2 {
        self.filtered
    }

    /// Discrete read: direction of the dominant axis, if past the deadband.
    ///
    /// Equal magnitudes on both axes never produce a direction.
    pub fn intent(&self) -> DirectionalIntent {
        let Vec2 { x, y } = self.filtered;
        if x.abs() > y.abs() {
            if x > self.deadband {
                DirectionalIntent::Right
            } else if x < -self.deadband {
                DirectionalIntent::Left
            } else {
                DirectionalIntent::None
            }
        } else if y.abs() > x.abs() {
            if y > self.deadband {
                DirectionalIntent::Down
            } else if y < -self.deadband {
                DirectionalIntent::Up
            } else {
                DirectionalIntent::None
            }
        } else {
            DirectionalIntent::None
        }
    }
}
