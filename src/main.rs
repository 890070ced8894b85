//! Tilt Arcade host entry point
//!
//! Runs the console against desktop stand-ins: a wobbling synthetic
//! accelerometer, an attract-mode button presser and a logged buzzer.
//! `RUST_LOG=debug` shows every tone; `show_frames` dumps every frame.

use std::path::PathBuf;

use tilt_arcade::persistence::JsonFileStore;
use tilt_arcade::platform::host::{AutoButtons, LogBuzzer, StdClock, TerminalDisplay, WobbleSensor};
use tilt_arcade::settings::DEFAULT_SETTINGS_PATH;
use tilt_arcade::sim::{entropy_rng, levels};
use tilt_arcade::{ScoreStore, SessionContext, SessionController, Settings};

/// Attract-mode button cadence, in polls
const AUTO_PRESS_INTERVAL: u32 = 12;

fn main() {
    env_logger::init();
    log::info!("Tilt Arcade (host) starting...");

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
    let settings = Settings::load(&settings_path);

    if let Err(e) = levels::validate_all() {
        log::error!("Maze data rejected, Tilt Maze will not start: {}", e);
    }

    let mut scores = ScoreStore::from_open(JsonFileStore::open(&settings.scores_path));
    let mut display = TerminalDisplay::new(settings.show_frames);
    let mut sensor = WobbleSensor::new(entropy_rng());
    let mut buzzer = LogBuzzer {
        time_scale: settings.time_scale,
    };
    let mut buttons = AutoButtons::new(AUTO_PRESS_INTERVAL);
    let mut clock = StdClock::new(settings.time_scale);

    let mut ctx = SessionContext {
        display: &mut display,
        sensor: &mut sensor,
        buzzer: &mut buzzer,
        buttons: &mut buttons,
        clock: &mut clock,
        scores: &mut scores,
    };
    let mut session = SessionController::new(&settings, entropy_rng());

    match settings.max_steps {
        Some(steps) => {
            session.run_for(&mut ctx, steps);
            log::info!(
                "Stopped after {} steps, {} games played",
                steps,
                session.games_played()
            );
        }
        None => session.run(&mut ctx),
    }
}
