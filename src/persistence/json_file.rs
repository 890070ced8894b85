//! Records as a single JSON object on disk

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{PersistenceError, RecordStore, Result};

type Records = BTreeMap<String, u32>;

/// `{"snake": 120, "pong": 35, ...}` in one file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Bind to `path`. The file may be absent; its directory may not.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !parent.is_dir() {
            return Err(PersistenceError::MissingDirectory(parent));
        }
        let store = Self { path };
        // Surface a corrupt file now rather than on the first read
        store.read_all()?;
        log::info!("Score records at {}", store.path.display());
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Records> {
        if !self.path.exists() {
            return Ok(Records::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Records::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_all(&self, records: &Records) -> Result<()> {
        let temp_path = self.path.with_extension("tmp");
        let contents = serde_json::to_string_pretty(records)?;
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self, game_id: &str) -> Result<Option<u32>> {
        Ok(self.read_all()?.get(game_id).copied())
    }

    fn save(&mut self, game_id: &str, score: u32) -> Result<()> {
        let mut records = self.read_all()?;
        records.insert(game_id.to_string(), score);
        self.write_all(&records)
    }
}
