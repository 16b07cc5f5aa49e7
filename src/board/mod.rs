//! Board construction and per-tile status tracking.
//!
//! A board is an ordered sequence of `2 × pair_count` tiles, each symbol
//! appearing exactly twice, order uniformly randomized. Tiles themselves
//! are immutable; the board tracks each tile's ephemeral
//! [`TileStatus`](crate::core::TileStatus) alongside it.
//!
//! ## Deck generation
//!
//! The first `pair_count` symbols of the fixed palette are taken in order
//! (deterministic content), two tiles are emitted per symbol with
//! sequential ids, and the whole deck is shuffled in place with
//! Fisher–Yates. Every permutation of the multiset is equally likely.

use rustc_hash::FxHashMap;

use crate::core::{DeckRng, Symbol, Tile, TileId, TileStatus, SYMBOL_PALETTE};

/// A level's tile layout plus per-tile status.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Vec<Tile>,
    status: Vec<TileStatus>,
    slots: FxHashMap<TileId, usize>,
}

impl Board {
    /// Generate a shuffled board with `pair_count` pairs.
    ///
    /// # Panics
    ///
    /// Panics if `pair_count` is zero or exceeds the symbol palette.
    /// Both are caller bugs, not runtime conditions.
    #[must_use]
    pub fn generate(pair_count: usize, rng: &mut DeckRng) -> Self {
        assert!(pair_count > 0, "pair_count must be positive");
        assert!(
            pair_count <= SYMBOL_PALETTE.len(),
            "pair_count {} exceeds symbol palette size {}",
            pair_count,
            SYMBOL_PALETTE.len()
        );

        let mut tiles = Vec::with_capacity(pair_count * 2);
        for pair in 0..pair_count {
            let symbol = Symbol::new(pair as u8);
            tiles.push(Tile::new(TileId::new((pair * 2) as u32), symbol));
            tiles.push(Tile::new(TileId::new((pair * 2 + 1) as u32), symbol));
        }

        rng.shuffle(&mut tiles);

        let slots = tiles
            .iter()
            .enumerate()
            .map(|(slot, tile)| (tile.id, slot))
            .collect();

        Self {
            status: vec![TileStatus::FaceDown; tiles.len()],
            tiles,
            slots,
        }
    }

    /// Total number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the board has no tiles. Generated boards never do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.tiles.len() / 2
    }

    /// All tiles in board order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Look up a tile by id.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.slots.get(&id).map(|&slot| &self.tiles[slot])
    }

    /// A tile's symbol, if the id is on this board.
    #[must_use]
    pub fn symbol_of(&self, id: TileId) -> Option<Symbol> {
        self.tile(id).map(|tile| tile.symbol)
    }

    /// A tile's current status, if the id is on this board.
    #[must_use]
    pub fn status(&self, id: TileId) -> Option<TileStatus> {
        self.slots.get(&id).map(|&slot| self.status[slot])
    }

    /// Iterate tiles with their statuses, in board order.
    pub fn entries(&self) -> impl Iterator<Item = (&Tile, TileStatus)> {
        self.tiles.iter().zip(self.status.iter().copied())
    }

    /// Count of tiles currently in a given status.
    #[must_use]
    pub fn count_in_status(&self, status: TileStatus) -> usize {
        self.status.iter().filter(|&&s| s == status).count()
    }

    pub(crate) fn set_status(&mut self, id: TileId, status: TileStatus) {
        if let Some(&slot) = self.slots.get(&id) {
            self.status[slot] = status;
        }
    }
}
