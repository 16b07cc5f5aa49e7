//! Level configuration table.
//!
//! Four fixed difficulty levels. The table is static and read-only;
//! the engine never invents geometries at runtime.
//!
//! ## Fallback and progression
//!
//! An unknown level index resolves to level 1 rather than failing — a
//! host asking for "level 9" gets a playable session, not an error.
//! Progression wraps: completing the last level suggests level 1 next.

use serde::{Deserialize, Serialize};

/// Number of configured levels.
pub const LEVEL_COUNT: usize = 4;

/// The static difficulty table.
///
/// Grid area is always `2 × pair_count`.
pub const LEVELS: [LevelConfig; LEVEL_COUNT] = [
    LevelConfig { index: 1, rows: 3, cols: 4, pair_count: 6 },
    LevelConfig { index: 2, rows: 4, cols: 6, pair_count: 12 },
    LevelConfig { index: 3, rows: 6, cols: 7, pair_count: 21 },
    LevelConfig { index: 4, rows: 6, cols: 8, pair_count: 24 },
];

/// Configuration for one difficulty level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// 1-based level index.
    pub index: u8,
    /// Grid rows, for renderer layout.
    pub rows: u8,
    /// Grid columns, for renderer layout.
    pub cols: u8,
    /// Number of tile pairs on the board.
    pub pair_count: usize,
}

impl LevelConfig {
    /// Look up a level by index.
    #[must_use]
    pub fn get(index: u8) -> Option<Self> {
        LEVELS.iter().copied().find(|level| level.index == index)
    }

    /// Resolve an index to a level, falling back to level 1 when unknown.
    #[must_use]
    pub fn resolve(index: u8) -> Self {
        Self::get(index).unwrap_or(LEVELS[0])
    }

    /// Index of the highest configured level.
    #[must_use]
    pub const fn last_index() -> u8 {
        LEVELS[LEVEL_COUNT - 1].index
    }

    /// Whether this is the final configured level.
    #[must_use]
    pub fn is_final(self) -> bool {
        self.index == Self::last_index()
    }

    /// Index of the next level: `index + 1`, wrapping to 1 after the last.
    #[must_use]
    pub fn next_index(self) -> u8 {
        if self.is_final() {
            LEVELS[0].index
        } else {
            self.index + 1
        }
    }

    /// Total tiles on this level's board.
    #[must_use]
    pub fn tile_count(self) -> usize {
        self.pair_count * 2
    }

    /// Human-readable difficulty name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self.index {
            1 => "Easy",
            2 => "Normal",
            3 => "Hard",
            _ => "Expert",
        }
    }
}
