//! Per-game high score records
//!
//! Bridges the games to whatever [`RecordStore`] the board has. Reads never
//! fail from the caller's point of view: no store, no record, or a broken
//! store all read as 0. Writes are best-effort and only logged on failure.

use crate::persistence::{PersistenceError, RecordStore};
use crate::sim::GameId;

/// Result of handing a finished game's score to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreOutcome {
    /// Record after this game
    pub high_score: u32,
    /// The score strictly beat the previous record
    pub new_record: bool,
}

/// High score adapter
pub struct ScoreStore {
    backend: Option<Box<dyn RecordStore>>,
}

impl ScoreStore {
    pub fn new(backend: Box<dyn RecordStore>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Storage could not be opened; every record reads as 0 for this run
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    /// Open `result`, or fall back to [`ScoreStore::unavailable`] with one logged error
    pub fn from_open<S, E>(result: Result<S, E>) -> Self
    where
        S: RecordStore + 'static,
        E: Into<PersistenceError>,
    {
        match result {
            Ok(store) => Self::new(Box::new(store)),
            Err(e) => {
                log::error!("High score storage unavailable, records disabled: {}", e.into());
                Self::unavailable()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Stored record for `game`, 0 when absent or unreadable
    pub fn read_high_score(&self, game: GameId) -> u32 {
        let Some(backend) = &self.backend else {
            return 0;
        };
        match backend.load(game.as_str()) {
            Ok(score) => score.unwrap_or(0),
            Err(e) => {
                log::warn!("Failed to read {} record: {}", game, e);
                0
            }
        }
    }

    /// Store `score` as the record for `game`; failures are logged, not returned
    pub fn write_high_score(&mut self, game: GameId, score: u32) {
        let Some(backend) = &mut self.backend else {
            return;
        };
        match backend.save(game.as_str(), score) {
            Ok(()) => log::info!("New {} record saved: {}", game, score),
            Err(e) => log::warn!("Failed to save {} record: {}", game, e),
        }
    }

    /// Compare a final score against the record cached at game start and
    /// write it through only when strictly beaten
    pub fn submit(&mut self, game: GameId, score: u32, cached_high: u32) -> ScoreOutcome {
        if score > cached_high {
            self.write_high_score(game, score);
            ScoreOutcome {
                high_score: score,
                new_record: true,
            }
        } else {
            ScoreOutcome {
                high_score: cached_high,
                new_record: false,
            }
        }
    }
}

impl std::fmt::Debug for ScoreStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreStore")
            .field("available", &self.is_available())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{JsonFileStore, MemoryStore};

    #[test]
    fn test_unavailable_reads_zero() {
        let mut store = ScoreStore::unavailable();
        store.write_high_score(GameId::Snake, 90);
        assert_eq!(store.read_high_score(GameId::Snake), 0);
        assert!(!store.is_available());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let mut store = ScoreStore::new(Box::new(MemoryStore::new()));
        for (i, game) in GameId::ALL.into_iter().enumerate() {
            let value = 10 * (i as u32 + 1);
            store.write_high_score(game, value);
            assert_eq!(store.read_high_score(game), value);
        }
    }

    #[test]
    fn test_submit_only_writes_strict_improvement() {
        let backend = MemoryStore::new().with_record("pong", 40);
        let mut store = ScoreStore::new(Box::new(backend));
        let cached = store.read_high_score(GameId::Pong);

        let tie = store.submit(GameId::Pong, 40, cached);
        assert!(!tie.new_record);
        let lower = store.submit(GameId::Pong, 15, cached);
        assert_eq!(lower, ScoreOutcome { high_score: 40, new_record: false });
        assert_eq!(store.read_high_score(GameId::Pong), 40);

        let better = store.submit(GameId::Pong, 45, cached);
        assert_eq!(better, ScoreOutcome { high_score: 45, new_record: true });
        assert_eq!(store.read_high_score(GameId::Pong), 45);
    }

    #[test]
    fn test_failed_write_still_reports_record() {
        let mut store = ScoreStore::new(Box::new(MemoryStore::failing()));
        let outcome = store.submit(GameId::Dodge, 7, 0);
        assert!(outcome.new_record);
        assert_eq!(store.read_high_score(GameId::Dodge), 0);
    }

    #[test]
    fn test_from_open_falls_back() {
        let store = ScoreStore::from_open(JsonFileStore::open("/definitely/not/here/scores.json"));
        assert!(!store.is_available());
        assert_eq!(store.read_high_score(GameId::TiltMaze), 0);
    }
}
