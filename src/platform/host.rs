//! Desktop stand-ins for the board peripherals
//!
//! Used by the binary to run an attract-mode session without hardware.

use std::thread;
use std::time::Duration;

use rand::Rng;

use super::{
    AccelSample, ButtonState, Buttons, Buzzer, Clock, FrameBuffer, PixelDisplay, TiltSensor,
};
use crate::consts::ACCEL_COUNTS_PER_G;
use crate::sim::GameRng;

fn scaled_sleep(ms: u32, time_scale: f32) {
    if time_scale <= 0.0 || ms == 0 {
        return;
    }
    thread::sleep(Duration::from_secs_f32(ms as f32 * time_scale / 1000.0));
}

/// Real sleeps, stretched or shrunk by `time_scale` (0 disables sleeping)
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    pub time_scale: f32,
    elapsed_ms: u64,
}

impl StdClock {
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale,
            elapsed_ms: 0,
        }
    }

    /// Unscaled total of all requested delays
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }
}

impl Clock for StdClock {
    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ms += u64::from(ms);
        scaled_sleep(ms, self.time_scale);
    }
}

/// Writes each tone to the log and blocks for its (scaled) duration
#[derive(Debug, Clone, Copy)]
pub struct LogBuzzer {
    pub time_scale: f32,
}

impl Buzzer for LogBuzzer {
    fn play_tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        log::debug!("tone {frequency_hz} Hz for {duration_ms} ms");
        scaled_sleep(duration_ms, self.time_scale);
    }
}

/// Synthetic hand wobble: two slow sinusoids plus sensor noise
#[derive(Debug, Clone)]
pub struct WobbleSensor {
    phase: f32,
    rng: GameRng,
}

impl WobbleSensor {
    const PHASE_STEP: f32 = 0.07;
    const AMPLITUDE_G: f32 = 0.6;
    const NOISE_COUNTS: i16 = 400;

    pub fn new(rng: GameRng) -> Self {
        Self { phase: 0.0, rng }
    }
}

impl TiltSensor for WobbleSensor {
    fn read_accel(&mut self) -> AccelSample {
        self.phase += Self::PHASE_STEP;
        let gx = (self.phase * 0.9).sin() * Self::AMPLITUDE_G;
        let gy = (self.phase * 0.37).cos() * Self::AMPLITUDE_G;
        let noise = |rng: &mut GameRng| rng.random_range(-Self::NOISE_COUNTS..=Self::NOISE_COUNTS);
        let to_counts = |g: f32| (g * ACCEL_COUNTS_PER_G) as i16;
        AccelSample::new(
            to_counts(gx).saturating_add(noise(&mut self.rng)),
            to_counts(gy).saturating_add(noise(&mut self.rng)),
            ACCEL_COUNTS_PER_G as i16,
        )
    }
}

/// Attract-mode operator: one-poll taps every `interval` polls
#[derive(Debug, Clone, Copy)]
pub struct AutoButtons {
    interval: u32,
    polls: u32,
    navigate_first: bool,
}

impl AutoButtons {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(2),
            polls: 0,
            navigate_first: true,
        }
    }
}

impl Buttons for AutoButtons {
    fn poll(&mut self) -> ButtonState {
        self.polls += 1;
        if self.polls % self.interval != 0 {
            return ButtonState::RELEASED;
        }
        // Alternate so the menu cycles through the games
        self.navigate_first = !self.navigate_first;
        if self.navigate_first {
            ButtonState::SELECT
        } else {
            ButtonState::NAVIGATE
        }
    }
}

/// Frame buffer that can dump each presented frame to stdout
#[derive(Debug, Clone, Default)]
pub struct TerminalDisplay {
    pub buffer: FrameBuffer,
    pub echo: bool,
}

impl TerminalDisplay {
    pub fn new(echo: bool) -> Self {
        Self {
            buffer: FrameBuffer::new(),
            echo,
        }
    }
}

impl PixelDisplay for TerminalDisplay {
    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        self.buffer.set_pixel(x, y, on);
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, filled: bool) {
        self.buffer.draw_rect(x, y, w, h, filled);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.buffer.draw_text(x, y, text);
    }

    fn present(&mut self) {
        self.buffer.present();
        if self.echo {
            println!("{}\n{}", self.buffer.to_ascii(), "-".repeat(crate::consts::WIDTH as usize));
        }
    }
}
