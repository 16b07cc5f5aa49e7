//! Persistence seam for the leaderboard.
//!
//! Actual storage I/O belongs to the host. The engine only needs two
//! operations: read the whole ordered sequence, write it back wholesale.
//! Failures never cascade into gameplay — a failed load yields an empty
//! leaderboard, a failed save leaves the in-memory result standing and
//! is reported to the caller.

use thiserror::Error;

use super::ScoreEntry;

/// Why a store operation failed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failed.
    #[error("leaderboard store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be decoded.
    #[error("leaderboard data is corrupt: {0}")]
    Corrupt(String),

    /// The backing store cannot be reached at all.
    #[error("leaderboard store unavailable: {0}")]
    Unavailable(String),
}

/// Host-provided leaderboard storage.
pub trait LeaderboardStore {
    /// Read the persisted leaderboard, already in ranked order.
    fn load(&mut self) -> Result<Vec<ScoreEntry>, StoreError>;

    /// Replace the persisted leaderboard wholesale.
    fn save(&mut self, entries: &[ScoreEntry]) -> Result<(), StoreError>;
}

/// In-memory store: the default for tests and for hosts that opt out of
/// persistence.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Vec<ScoreEntry>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries.
    #[must_use]
    pub fn with_entries(entries: Vec<ScoreEntry>) -> Self {
        Self { entries }
    }

    /// Current contents.
    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }
}

impl LeaderboardStore for MemoryStore {
    fn load(&mut self) -> Result<Vec<ScoreEntry>, StoreError> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[ScoreEntry]) -> Result<(), StoreError> {
        self.entries = entries.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());

        let entries = vec![ScoreEntry::new(1, 6, 30)];
        store.save(&entries).unwrap();
        assert_eq!(store.load().unwrap(), entries);
    }

    #[test]
    fn test_with_entries() {
        let seeded = MemoryStore::with_entries(vec![ScoreEntry::new(2, 14, 60)]);
        assert_eq!(seeded.entries().len(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::Unavailable("no config dir".to_string());
        assert_eq!(
            err.to_string(),
            "leaderboard store unavailable: no config dir"
        );
    }
}
