//! Buzzer sound effects
//!
//! Every effect is a short fixed melody: tones separated by silent gaps.
//! Playback blocks the session for the melody's full length.

use crate::platform::{Buzzer, Clock};
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Game ended without a record
    GameOver,
    /// Game ended with a new record
    NewRecord,
    /// Maze food picked up
    FoodCollected,
    /// Last maze food picked up
    LevelComplete,
}

/// One step of a melody
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    Tone { hz: u32, ms: u32 },
    Rest(u32),
}

const fn tone(hz: u32, ms: u32) -> Note {
    Note::Tone { hz, ms }
}

// Descending
const GAME_OVER: &[Note] = &[
    tone(300, 200),
    Note::Rest(100),
    tone(200, 300),
    Note::Rest(100),
    tone(150, 400),
];

// Ascending
const NEW_RECORD: &[Note] = &[
    tone(1000, 100),
    Note::Rest(50),
    tone(1200, 100),
    Note::Rest(50),
    tone(1500, 200),
];

const FOOD_COLLECTED: &[Note] = &[tone(800, 50)];

const LEVEL_COMPLETE: &[Note] = &[
    tone(800, 50),
    tone(1000, 100),
    Note::Rest(50),
    tone(1200, 150),
];

impl SoundEffect {
    pub fn notes(&self) -> &'static [Note] {
        match self {
            SoundEffect::GameOver => GAME_OVER,
            SoundEffect::NewRecord => NEW_RECORD,
            SoundEffect::FoodCollected => FOOD_COLLECTED,
            SoundEffect::LevelComplete => LEVEL_COMPLETE,
        }
    }

    /// Total playback time in ms
    pub fn duration_ms(&self) -> u32 {
        self.notes()
            .iter()
            .map(|note| match *note {
                Note::Tone { ms, .. } | Note::Rest(ms) => ms,
            })
            .sum()
    }

    /// Terminal jingle
    pub fn for_game_end(new_record: bool) -> Self {
        if new_record {
            SoundEffect::NewRecord
        } else {
            SoundEffect::GameOver
        }
    }
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::FoodCollected => SoundEffect::FoodCollected,
            GameEvent::LevelComplete => SoundEffect::LevelComplete,
        }
    }
}

/// Plays effects through the board buzzer
#[derive(Debug, Clone, Default)]
pub struct AudioManager {
    muted: bool,
}

impl AudioManager {
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            log::info!("Sound disabled");
        }
        Self { muted: !enabled }
    }

    /// Play a sound effect; a muted manager neither plays nor waits
    pub fn play(&self, effect: SoundEffect, buzzer: &mut dyn Buzzer, clock: &mut dyn Clock) {
        if self.muted {
            return;
        }
        log::debug!("Playing {:?}", effect);
        for note in effect.notes() {
            match *note {
                Note::Tone { hz, ms } => buzzer.play_tone(hz, ms),
                Note::Rest(ms) => clock.delay_ms(ms),
            }
        }
    }
}
