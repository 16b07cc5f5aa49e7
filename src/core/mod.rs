//! Core engine types: tiles, symbols, levels, RNG.
//!
//! These are the fundamental building blocks the rest of the engine is
//! assembled from. Nothing here knows about sessions or presentation.

pub mod tile;
pub mod level;
pub mod rng;

pub use tile::{Symbol, Tile, TileId, TileStatus, SYMBOL_PALETTE};
pub use level::{LevelConfig, LEVELS, LEVEL_COUNT};
pub use rng::DeckRng;
