//! Scripted collaborators for driving a session deterministically

use std::collections::VecDeque;

use super::{AccelSample, ButtonState, Buttons, Buzzer, Clock, TiltSensor};

/// Replays queued samples, then repeats the last one (level by default)
#[derive(Debug, Clone, Default)]
pub struct ScriptedSensor {
    queue: VecDeque<AccelSample>,
    last: AccelSample,
}

impl ScriptedSensor {
    pub fn new(samples: impl IntoIterator<Item = AccelSample>) -> Self {
        Self {
            queue: samples.into_iter().collect(),
            last: AccelSample::default(),
        }
    }

    /// Hold a constant reading forever
    pub fn constant(sample: AccelSample) -> Self {
        Self {
            queue: VecDeque::new(),
            last: sample,
        }
    }

    pub fn push(&mut self, sample: AccelSample) {
        self.queue.push_back(sample);
    }
}

impl TiltSensor for ScriptedSensor {
    fn read_accel(&mut self) -> AccelSample {
        if let Some(sample) = self.queue.pop_front() {
            self.last = sample;
        }
        self.last
    }
}

/// Replays queued button snapshots; released once the script runs out
#[derive(Debug, Clone, Default)]
pub struct ScriptedButtons {
    queue: VecDeque<ButtonState>,
    polls: usize,
}

impl ScriptedButtons {
    pub fn new(states: impl IntoIterator<Item = ButtonState>) -> Self {
        Self {
            queue: states.into_iter().collect(),
            polls: 0,
        }
    }

    /// Append a press followed by a release
    pub fn tap(&mut self, state: ButtonState) {
        self.queue.push_back(state);
        self.queue.push_back(ButtonState::RELEASED);
    }

    pub fn push(&mut self, state: ButtonState) {
        self.queue.push_back(state);
    }

    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Buttons for ScriptedButtons {
    fn poll(&mut self) -> ButtonState {
        self.polls += 1;
        self.queue.pop_front().unwrap_or(ButtonState::RELEASED)
    }
}

/// Captures every tone instead of playing it
#[derive(Debug, Clone, Default)]
pub struct RecordingBuzzer {
    pub tones: Vec<(u32, u32)>,
}

impl RecordingBuzzer {
    pub fn frequencies(&self) -> Vec<u32> {
        self.tones.iter().map(|&(hz, _)| hz).collect()
    }
}

impl Buzzer for RecordingBuzzer {
    fn play_tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        self.tones.push((frequency_hz, duration_ms));
    }
}

/// Accumulates requested delays without sleeping
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    pub elapsed_ms: u64,
    pub delays: Vec<u32>,
}

impl Clock for ManualClock {
    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ms += u64::from(ms);
        self.delays.push(ms);
    }
}
