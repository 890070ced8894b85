//! In-process record store

use std::collections::HashMap;

use super::{PersistenceError, RecordStore, Result};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, u32>,
    /// Reject every save, as a full or read-only medium would
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Pre-seed a record
    pub fn with_record(mut self, game_id: &str, score: u32) -> Self {
        self.records.insert(game_id.to_string(), score);
        self
    }
}

impl RecordStore for MemoryStore {
    fn load(&self, game_id: &str) -> Result<Option<u32>> {
        Ok(self.records.get(game_id).copied())
    }

    fn save(&mut self, game_id: &str, score: u32) -> Result<()> {
        if self.fail_writes {
            return Err(PersistenceError::WriteRejected(game_id.to_string()));
        }
        self.records.insert(game_id.to_string(), score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failing_store_keeps_old_value() {
        let mut store = MemoryStore::failing().with_record("pong", 10);
        assert!(store.save("pong", 50).is_err());
        assert_eq!(store.load("pong").unwrap(), Some(10));
    }
}
