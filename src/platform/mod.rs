//! Platform abstraction layer
//!
//! The engine talks to hardware only through these narrow collaborators:
//! - Pixel display (clear / pixel / rect / text / present)
//! - Accelerometer (raw counts)
//! - Buzzer (blocking tones)
//! - Two polled buttons
//! - A blocking delay
//!
//! Bus protocols, font rasterizing and debouncing at the electrical level
//! live behind these traits.

pub mod framebuffer;
pub mod host;
pub mod scripted;

pub use framebuffer::FrameBuffer;

use glam::Vec3;

/// Monochrome pixel display, 128x64, origin top-left
pub trait PixelDisplay {
    fn clear(&mut self);
    fn set_pixel(&mut self, x: i32, y: i32, on: bool);
    /// Filled box or one-pixel outline
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, filled: bool);
    fn draw_text(&mut self, x: i32, y: i32, text: &str);
    /// Push the finished frame to the panel
    fn present(&mut self);
}

/// One raw accelerometer reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccelSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl AccelSample {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Convert raw counts to g
    pub fn in_g(&self, counts_per_g: f32) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32) / counts_per_g
    }
}

/// Accelerometer. A stale or disconnected sensor is indistinguishable from a
/// level one; whatever comes back is treated as a valid sample.
pub trait TiltSensor {
    fn read_accel(&mut self) -> AccelSample;
}

/// Piezo buzzer; blocks for the tone's duration
pub trait Buzzer {
    fn play_tone(&mut self, frequency_hz: u32, duration_ms: u32);
}

/// Snapshot of both buttons (active-high)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub select: bool,
    pub navigate: bool,
}

impl ButtonState {
    pub const RELEASED: Self = Self {
        select: false,
        navigate: false,
    };
    pub const SELECT: Self = Self {
        select: true,
        navigate: false,
    };
    pub const NAVIGATE: Self = Self {
        select: false,
        navigate: true,
    };

    pub fn any(&self) -> bool {
        self.select || self.navigate
    }
}

/// The `select` and `navigate` inputs, read by polling
pub trait Buttons {
    fn poll(&mut self) -> ButtonState;
}

/// Blocking delay on the session's only task
pub trait Clock {
    fn delay_ms(&mut self, ms: u32);
}
