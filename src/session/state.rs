//! The session value: one in-progress level attempt.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{LevelConfig, TileId};
use crate::session::clock::SessionClock;

/// Identity of one session instance.
///
/// Allocated fresh on every `start_level`. Delayed tasks are tagged with
/// the id they were scheduled under; a task whose id no longer matches
/// the live session is stale and must not be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Create a new session ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Mutable state of one level attempt.
///
/// Mutated only by the resolver and the engine; the host observes it
/// through read accessors and [`GameEvent`](crate::events::GameEvent)s.
#[derive(Clone, Debug)]
pub struct Session {
    id: SessionId,
    level: LevelConfig,
    board: Board,
    /// Face-up, unresolved tiles. Never more than two.
    selection: SmallVec<[TileId; 2]>,
    matched_pairs: usize,
    moves: u32,
    clock: SessionClock,
    locked: bool,
    completed: bool,
}

impl Session {
    /// Create a fresh session over a generated board.
    ///
    /// Counters start at zero, the board unlocked, the clock running.
    #[must_use]
    pub fn new(id: SessionId, level: LevelConfig, board: Board) -> Self {
        Self {
            id,
            level,
            board,
            selection: SmallVec::new(),
            matched_pairs: 0,
            moves: 0,
            clock: SessionClock::start(),
            locked: false,
            completed: false,
        }
    }

    /// This session's identity tag.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The active level configuration.
    #[must_use]
    pub fn level(&self) -> LevelConfig {
        self.level
    }

    /// The board being played.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Currently selected (face-up, unresolved) tiles, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[TileId] {
        &self.selection
    }

    /// Pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Completed moves. A move is one two-tile evaluation.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Seconds elapsed while this level has been active.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.clock.seconds()
    }

    /// Elapsed time rendered as zero-padded `MM:SS`.
    #[must_use]
    pub fn formatted_time(&self) -> String {
        self.clock.formatted()
    }

    /// Whether the board is locked pending a match/mismatch resolution.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether every pair has been matched.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    // === Crate-internal mutation (resolver and engine only) ===

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn clock_mut(&mut self) -> &mut SessionClock {
        &mut self.clock
    }

    pub(crate) fn push_selection(&mut self, tile: TileId) {
        debug_assert!(self.selection.len() < 2);
        self.selection.push(tile);
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub(crate) fn record_move(&mut self) {
        self.moves += 1;
    }

    pub(crate) fn record_matched_pair(&mut self) {
        self.matched_pairs += 1;
    }

    pub(crate) fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub(crate) fn complete(&mut self) {
        self.completed = true;
        self.clock.stop();
    }
}
