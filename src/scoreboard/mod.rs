//! Score entries and the leaderboard ranking policy.
//!
//! The leaderboard is a ranked, capacity-bounded history of completed
//! runs. The engine treats it as a value: load, append, sort, truncate,
//! rewrite wholesale. Ordering is by a composite key — level descending
//! (higher level ranks better), then moves ascending, then elapsed
//! seconds ascending.

pub mod store;

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::session::clock::format_mm_ss;

pub use store::{LeaderboardStore, MemoryStore, StoreError};

/// Maximum entries retained after ranking.
pub const LEADERBOARD_CAPACITY: usize = 10;

/// Record of one completed level. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Completed level index.
    pub level: u8,
    /// Moves spent.
    pub moves: u32,
    /// Seconds spent.
    pub elapsed_seconds: u32,
    /// `elapsed_seconds` rendered as `MM:SS`.
    pub formatted_time: String,
    /// Completion date, `YYYY-MM-DD`.
    pub date: String,
}

impl ScoreEntry {
    /// Build an entry for a run completed now.
    #[must_use]
    pub fn new(level: u8, moves: u32, elapsed_seconds: u32) -> Self {
        Self {
            level,
            moves,
            elapsed_seconds,
            formatted_time: format_mm_ss(elapsed_seconds),
            date: date_stamp(),
        }
    }

    /// Composite ranking key: level descending, moves ascending,
    /// elapsed seconds ascending.
    fn ranking_key(&self) -> (Reverse<u8>, u32, u32) {
        (Reverse(self.level), self.moves, self.elapsed_seconds)
    }
}

/// Rank a new entry into an existing leaderboard.
///
/// Appends, stable-sorts by the composite key, and truncates to
/// [`LEADERBOARD_CAPACITY`]. Entries past the capacity are discarded
/// permanently. Idempotent on an already-ranked, within-capacity input.
#[must_use]
pub fn rank(mut entries: Vec<ScoreEntry>, new_entry: ScoreEntry) -> Vec<ScoreEntry> {
    entries.push(new_entry);
    entries.sort_by_key(ScoreEntry::ranking_key);
    entries.truncate(LEADERBOARD_CAPACITY);
    entries
}

fn date_stamp() -> String {
    let format = format_description!("[year]-[month]-[day]");
    OffsetDateTime::now_utc()
        .format(&format)
        .unwrap_or_default()
}
