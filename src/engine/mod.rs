//! The `GameEngine` facade: level lifecycle, win detection, timer-task
//! ownership, and leaderboard hand-off.
//!
//! The engine is the level controller. It owns the current [`Session`],
//! the single outstanding [`PendingFlip`] (if any), the RNG, and the
//! in-memory leaderboard. Hosts drive it with four calls:
//!
//! - [`start_level`](GameEngine::start_level) on player intent
//! - [`select_tile`](GameEngine::select_tile) on player input
//! - [`resolve_pending`](GameEngine::resolve_pending) after waiting out
//!   the pending task's delay
//! - [`tick`](GameEngine::tick) once per wall second
//!
//! Every call returns the [`GameEvent`]s it produced, in order.
//! Selection events arriving while the board is locked are dropped, not
//! queued; a pending task whose session was superseded resolves to
//! nothing.

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::core::{DeckRng, LevelConfig, TileId};
use crate::events::GameEvent;
use crate::scoreboard::{rank, LeaderboardStore, ScoreEntry, StoreError};
use crate::session::resolver::{self, FlipResolution, PendingFlip, SelectOutcome};
use crate::session::{Session, SessionId};

/// The game engine. Generic over the host's leaderboard storage.
pub struct GameEngine<S: LeaderboardStore> {
    rng: DeckRng,
    store: S,
    leaderboard: Vec<ScoreEntry>,
    session: Option<Session>,
    pending: Option<PendingFlip>,
    next_session: u64,
    save_error: Option<StoreError>,
}

impl<S: LeaderboardStore> GameEngine<S> {
    /// Create an engine over a store and an RNG seed.
    ///
    /// Loads the persisted leaderboard immediately; if the store cannot
    /// be read the engine proceeds with an empty one.
    pub fn new(mut store: S, seed: u64) -> Self {
        let leaderboard = match store.load() {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "leaderboard load failed, starting empty");
                Vec::new()
            }
        };

        Self {
            rng: DeckRng::new(seed),
            store,
            leaderboard,
            session: None,
            pending: None,
            next_session: 0,
            save_error: None,
        }
    }

    /// Start (or restart) a level.
    ///
    /// Unknown indices fall back to level 1. Any current session and
    /// board are discarded unconditionally — mid-level restarts
    /// included. An in-flight task from the discarded session becomes
    /// stale and will be dropped by its tag when it fires.
    pub fn start_level(&mut self, index: u8) -> &Session {
        let level = LevelConfig::resolve(index);
        if level.index != index {
            debug!(index, "unknown level index, falling back to level 1");
        }

        let id = SessionId::new(self.next_session);
        self.next_session += 1;

        let mut board_rng = self.rng.fork();
        let board = Board::generate(level.pair_count, &mut board_rng);

        info!(session = %id, level = level.index, pairs = level.pair_count, "level started");
        self.session.insert(Session::new(id, level, board))
    }

    /// Handle a player selecting a tile.
    ///
    /// Invalid selections (locked board, face-up or matched tile,
    /// unknown id, no session) are silently dropped. A valid second
    /// selection locks the board and schedules the evaluation; read it
    /// back via [`pending_flip`](Self::pending_flip).
    pub fn select_tile(&mut self, tile: TileId) -> Vec<GameEvent> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };

        match resolver::select_tile(session, tile) {
            SelectOutcome::Ignored => Vec::new(),
            SelectOutcome::Flipped => vec![GameEvent::TileFlipped { tile }],
            SelectOutcome::Evaluating(flip) => {
                self.pending = Some(flip);
                vec![GameEvent::TileFlipped { tile }]
            }
        }
    }

    /// The outstanding evaluation, if any.
    ///
    /// The host waits [`PendingFlip::delay`] and then calls
    /// [`resolve_pending`](Self::resolve_pending).
    #[must_use]
    pub fn pending_flip(&self) -> Option<&PendingFlip> {
        self.pending.as_ref()
    }

    /// Resolve the outstanding evaluation.
    ///
    /// A task scheduled under a superseded session is dropped as a
    /// no-op. A match may complete the level: the clock stops, the run
    /// is ranked into the leaderboard, the store is asked to persist it,
    /// and `LevelCompleted` fires — exactly once per session.
    pub fn resolve_pending(&mut self) -> Vec<GameEvent> {
        let Some(flip) = self.pending.take() else {
            return Vec::new();
        };
        let Some(session) = self.session.as_mut() else {
            debug!(task = %flip.session, "dropping flip task with no live session");
            return Vec::new();
        };
        if flip.session != session.id() {
            debug!(task = %flip.session, live = %session.id(), "dropping stale flip task");
            return Vec::new();
        }

        resolver::resolve(session, &flip);

        let mut events = Vec::new();
        match flip.resolution {
            FlipResolution::Mismatch => {
                events.push(GameEvent::PairMismatched { tiles: flip.tiles });
            }
            FlipResolution::Match => {
                events.push(GameEvent::PairMatched { tiles: flip.tiles });

                if session.matched_pairs() == session.level().pair_count {
                    session.complete();
                    let level = session.level();
                    let entry = ScoreEntry::new(
                        level.index,
                        session.moves(),
                        session.elapsed_seconds(),
                    );
                    info!(
                        session = %session.id(),
                        level = level.index,
                        moves = entry.moves,
                        time = %entry.formatted_time,
                        "level completed"
                    );

                    let board = std::mem::take(&mut self.leaderboard);
                    self.leaderboard = rank(board, entry);
                    if let Err(err) = self.store.save(&self.leaderboard) {
                        warn!(error = %err, "leaderboard save failed, keeping in-memory result");
                        self.save_error = Some(err);
                    }

                    events.push(GameEvent::LevelCompleted {
                        is_final: level.is_final(),
                    });
                }
            }
        }
        events
    }

    /// Advance the session clock one second.
    ///
    /// Call once per wall second. No-op without an active, uncompleted
    /// session.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        match session.clock_mut().tick() {
            Some(seconds) => vec![GameEvent::ClockTick { seconds }],
            None => Vec::new(),
        }
    }

    /// The current session, if a level has been started.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Advisory next level index: `current + 1`, wrapping from the last
    /// configured level to 1. The transition only happens when the host
    /// calls [`start_level`](Self::start_level).
    #[must_use]
    pub fn next_level(&self) -> u8 {
        self.session
            .as_ref()
            .map(|s| s.level().next_index())
            .unwrap_or(1)
    }

    /// The current ranked leaderboard.
    #[must_use]
    pub fn leaderboard(&self) -> &[ScoreEntry] {
        &self.leaderboard
    }

    /// Take the most recent persistence failure, if one occurred.
    ///
    /// Save failures never interrupt gameplay; they park here for the
    /// host to report.
    pub fn take_save_error(&mut self) -> Option<StoreError> {
        self.save_error.take()
    }

    /// Borrow the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoreboard::MemoryStore;

    fn engine() -> GameEngine<MemoryStore> {
        GameEngine::new(MemoryStore::new(), 42)
    }

    #[test]
    fn test_no_session_operations_are_inert() {
        let mut engine = engine();

        assert!(engine.select_tile(TileId::new(0)).is_empty());
        assert!(engine.resolve_pending().is_empty());
        assert!(engine.tick().is_empty());
        assert!(engine.session().is_none());
        assert_eq!(engine.next_level(), 1);
    }

    #[test]
    fn test_start_level_unknown_index_falls_back() {
        let mut engine = engine();
        let session = engine.start_level(42);

        assert_eq!(session.level().index, 1);
        assert_eq!(session.board().len(), 12);
    }

    #[test]
    fn test_restart_discards_session() {
        let mut engine = engine();
        let first_id = engine.start_level(1).id();
        engine.tick();
        engine.tick();

        let session = engine.start_level(1);
        assert_ne!(session.id(), first_id);
        assert_eq!(session.elapsed_seconds(), 0);
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_tick_emits_reading() {
        let mut engine = engine();
        engine.start_level(1);

        assert_eq!(engine.tick(), vec![GameEvent::ClockTick { seconds: 1 }]);
        assert_eq!(engine.tick(), vec![GameEvent::ClockTick { seconds: 2 }]);
    }

    #[test]
    fn test_seed_determinism() {
        let mut a = engine();
        let mut b = engine();

        let layout_a: Vec<_> =
            a.start_level(2).board().tiles().iter().map(|t| t.symbol).collect();
        let layout_b: Vec<_> =
            b.start_level(2).board().tiles().iter().map(|t| t.symbol).collect();

        assert_eq!(layout_a, layout_b);
    }
}
