//! High-score record storage
//!
//! Backends keep one integer per game id. The [`crate::highscores::ScoreStore`]
//! adapter sits on top and turns every failure into "no record".

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use thiserror::Error;

/// Storage failures
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The directory that should hold the record file does not exist
    #[error("storage directory missing: {0}")]
    MissingDirectory(PathBuf),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Record file is not a valid `{id: score}` object
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend refused the write
    #[error("write rejected for {0}")]
    WriteRejected(String),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Key/value record backend
pub trait RecordStore {
    /// Stored record for `game_id`, `None` if never written
    fn load(&self, game_id: &str) -> Result<Option<u32>>;
    fn save(&mut self, game_id: &str, score: u32) -> Result<()>;
}
