//! Tile identification and symbols.
//!
//! Every tile on a board has a unique `TileId` and carries one `Symbol`.
//! Symbols index into a fixed ordered palette, so the *content* of a
//! level is deterministic (level 1 always uses the first six symbols);
//! only the layout is randomized.
//!
//! ## Usage
//!
//! ```
//! use tilematch::core::{Symbol, TileId};
//!
//! let id = TileId::new(3);
//! assert_eq!(id.raw(), 3);
//!
//! let symbol = Symbol::new(0);
//! assert_eq!(symbol.glyph(), "🍎");
//! ```

use serde::{Deserialize, Serialize};

/// Fixed ordered symbol palette.
///
/// A level with `pair_count` pairs uses the first `pair_count` entries.
/// The largest configured level needs 24 distinct symbols.
pub const SYMBOL_PALETTE: [&str; 24] = [
    "🍎", "🍌", "🍇", "🍓", "🍒", "🍍", "🥝", "🍑",
    "🍋", "🍉", "🥥", "🥐", "🧀", "🥨", "🍄", "🌽",
    "🥕", "🫐", "🍪", "🍩", "🧁", "🍭", "🥯", "🌶️",
];

/// Unique identifier for a tile within one board.
///
/// Ids are allocated sequentially at deck generation and survive the
/// shuffle, so a renderer can address tiles stably for the life of a
/// session. Ids are not meaningful across boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Index into [`SYMBOL_PALETTE`].
///
/// Two tiles match exactly when their symbols are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u8);

impl Symbol {
    /// Create a new symbol from a palette index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw palette index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Resolve the symbol to its display glyph.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        SYMBOL_PALETTE[self.0 as usize]
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Ephemeral per-tile status, tracked by the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileStatus {
    /// Hidden; selectable.
    #[default]
    FaceDown,
    /// Revealed and sitting in the selection buffer.
    FaceUp,
    /// Resolved as part of a matched pair; out of circulation.
    Matched,
}

/// A single game piece. Immutable once created; status lives on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Unique within the owning board.
    pub id: TileId,
    /// The symbol this tile bears; its pair partner bears the same one.
    pub symbol: Symbol,
}

impl Tile {
    /// Create a new tile.
    #[must_use]
    pub const fn new(id: TileId, symbol: Symbol) -> Self {
        Self { id, symbol }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_id() {
        let id = TileId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Tile(7)");
    }

    #[test]
    fn test_symbol_glyph() {
        let symbol = Symbol::new(1);
        assert_eq!(symbol.glyph(), SYMBOL_PALETTE[1]);
        assert_eq!(format!("{}", symbol), SYMBOL_PALETTE[1]);
    }

    #[test]
    fn test_palette_entries_distinct() {
        for (i, a) in SYMBOL_PALETTE.iter().enumerate() {
            for b in SYMBOL_PALETTE.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_status_default_is_face_down() {
        assert_eq!(TileStatus::default(), TileStatus::FaceDown);
    }

    #[test]
    fn test_tile_equality_by_value() {
        let a = Tile::new(TileId::new(0), Symbol::new(3));
        let b = Tile::new(TileId::new(0), Symbol::new(3));
        assert_eq!(a, b);
    }
}
