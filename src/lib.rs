//! # tilematch
//!
//! Session state machine for a single-player tile-matching memory game.
//! A player flips pairs of hidden tiles across four fixed difficulty
//! levels; moves and elapsed time are tracked and completed runs are
//! ranked on a capacity-bounded leaderboard.
//!
//! ## Design Principles
//!
//! 1. **Engine, not app**: rendering, audio, and storage I/O live in the
//!    host. The engine reports what happened via [`GameEvent`] values and
//!    reaches persistence through the [`LeaderboardStore`] trait.
//!
//! 2. **Host-driven time**: no threads, no async runtime. Delayed
//!    transitions are plain data ([`PendingFlip`] carries its delay and
//!    owning [`SessionId`]); the host waits and calls back in. The clock
//!    advances only when the host calls [`GameEngine::tick`].
//!
//! 3. **One owned session**: all mutable gameplay state lives in a single
//!    [`Session`] value that is replaced wholesale on restart. No globals.
//!
//! ## Modules
//!
//! - `core`: Tile and level types, identifier newtypes, deterministic RNG
//! - `board`: Deck generation and per-tile status tracking
//! - `session`: The per-level session, selection/match resolver, clock
//! - `events`: Outbound signals consumed by the rendering layer
//! - `engine`: The `GameEngine` facade driving the level lifecycle
//! - `scoreboard`: Score entries, ranking policy, persistence seam

pub mod core;
pub mod board;
pub mod session;
pub mod events;
pub mod engine;
pub mod scoreboard;

// Re-export commonly used types
pub use crate::core::{
    DeckRng,
    LevelConfig, LEVELS, LEVEL_COUNT,
    Symbol, SYMBOL_PALETTE,
    Tile, TileId, TileStatus,
};

pub use crate::board::Board;

pub use crate::session::{
    format_mm_ss, FlipResolution, PendingFlip, SelectOutcome, Session,
    SessionClock, SessionId, MATCH_DELAY, MISMATCH_DELAY,
};

pub use crate::events::GameEvent;

pub use crate::engine::GameEngine;

pub use crate::scoreboard::{
    rank, LeaderboardStore, MemoryStore, ScoreEntry, StoreError,
    LEADERBOARD_CAPACITY,
};
