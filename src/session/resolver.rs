//! The two-tile selection and match-resolution state machine.
//!
//! ## States
//!
//! Idle (0 selected) → OneSelected (1 selected) → Evaluating (2 selected,
//! board locked) → match or mismatch resolution → Idle. The machine
//! cycles for the life of the level; there is no terminal state here.
//!
//! ## Backpressure
//!
//! The board lock *is* the admission control: while an evaluation is
//! outstanding every further selection is dropped, never queued, so at
//! most one [`PendingFlip`] exists at a time.
//!
//! ## Delayed resolution
//!
//! Evaluation does not resolve inline. [`select_tile`] hands back a
//! [`PendingFlip`] tagged with the owning session; the host waits
//! [`PendingFlip::delay`] and then asks the engine to resolve it. Matches
//! confirm after 500 ms; mismatches stay visible for 1000 ms so the
//! player can memorize the revealed tiles.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{TileId, TileStatus};
use crate::session::state::{Session, SessionId};

/// Delay before a matched pair is confirmed and removed from circulation.
pub const MATCH_DELAY: Duration = Duration::from_millis(500);

/// Delay before a mismatched pair flips back face-down.
pub const MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// How an outstanding evaluation will resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipResolution {
    /// Equal symbols: mark both tiles matched.
    Match,
    /// Unequal symbols: flip both tiles back face-down.
    Mismatch,
}

/// A scheduled match/mismatch transition.
///
/// Created when the second tile of a move is selected. Tagged with the
/// session it belongs to; resolving it against any other session is a
/// no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingFlip {
    /// The session this task was scheduled under.
    pub session: SessionId,
    /// The two tiles under evaluation, in selection order.
    pub tiles: [TileId; 2],
    /// The already-decided outcome.
    pub resolution: FlipResolution,
}

impl PendingFlip {
    /// How long the host should wait before resolving this task.
    #[must_use]
    pub fn delay(&self) -> Duration {
        match self.resolution {
            FlipResolution::Match => MATCH_DELAY,
            FlipResolution::Mismatch => MISMATCH_DELAY,
        }
    }
}

/// Result of one selection attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Invalid selection; nothing changed, nothing signaled.
    Ignored,
    /// The tile flipped face-up; the board stays open for a second pick.
    Flipped,
    /// Second tile flipped; the move is counted, the board is locked,
    /// and the carried task awaits delayed resolution.
    Evaluating(PendingFlip),
}

/// Attempt to select a tile.
///
/// No-ops (returning [`SelectOutcome::Ignored`]) when the session is
/// completed, the board is locked, the id is unknown, or the tile is
/// already face-up or matched. These are steady-state interactions, not
/// errors.
pub fn select_tile(session: &mut Session, tile: TileId) -> SelectOutcome {
    if session.is_completed() || session.is_locked() {
        debug!(%tile, "selection dropped: board not accepting input");
        return SelectOutcome::Ignored;
    }
    match session.board().status(tile) {
        Some(TileStatus::FaceDown) => {}
        Some(_) => {
            debug!(%tile, "selection dropped: tile not face-down");
            return SelectOutcome::Ignored;
        }
        None => {
            debug!(%tile, "selection dropped: unknown tile id");
            return SelectOutcome::Ignored;
        }
    }

    session.board_mut().set_status(tile, TileStatus::FaceUp);
    session.push_selection(tile);

    if session.selection().len() < 2 {
        return SelectOutcome::Flipped;
    }

    // Second tile of the move: count it and lock until resolution.
    session.record_move();
    session.set_locked(true);

    let first = session.selection()[0];
    let second = session.selection()[1];
    let resolution = if session.board().symbol_of(first) == session.board().symbol_of(second) {
        FlipResolution::Match
    } else {
        FlipResolution::Mismatch
    };

    SelectOutcome::Evaluating(PendingFlip {
        session: session.id(),
        tiles: [first, second],
        resolution,
    })
}

/// Apply a resolved evaluation to its session.
///
/// The caller (the engine) has already verified the session tag. Either
/// way the selection buffer empties and the board unlocks; only a match
/// touches the counters.
pub fn resolve(session: &mut Session, flip: &PendingFlip) {
    match flip.resolution {
        FlipResolution::Match => {
            for tile in flip.tiles {
                session.board_mut().set_status(tile, TileStatus::Matched);
            }
            session.record_matched_pair();
        }
        FlipResolution::Mismatch => {
            for tile in flip.tiles {
                session.board_mut().set_status(tile, TileStatus::FaceDown);
            }
        }
    }
    session.clear_selection();
    session.set_locked(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::{DeckRng, LevelConfig};

    fn session() -> Session {
        let level = LevelConfig::resolve(1);
        let mut rng = DeckRng::new(42);
        let board = Board::generate(level.pair_count, &mut rng);
        Session::new(SessionId::new(1), level, board)
    }

    /// Ids of two tiles sharing a symbol.
    fn matching_pair(session: &Session) -> (TileId, TileId) {
        let tiles = session.board().tiles();
        let first = tiles[0];
        let partner = tiles[1..]
            .iter()
            .find(|t| t.symbol == first.symbol)
            .expect("every symbol appears twice");
        (first.id, partner.id)
    }

    /// Ids of two tiles with different symbols.
    fn mismatched_pair(session: &Session) -> (TileId, TileId) {
        let tiles = session.board().tiles();
        let first = tiles[0];
        let other = tiles[1..]
            .iter()
            .find(|t| t.symbol != first.symbol)
            .expect("level 1 has more than one symbol");
        (first.id, other.id)
    }

    #[test]
    fn test_first_selection_flips() {
        let mut session = session();
        let tile = session.board().tiles()[0].id;

        assert_eq!(select_tile(&mut session, tile), SelectOutcome::Flipped);
        assert_eq!(session.board().status(tile), Some(TileStatus::FaceUp));
        assert_eq!(session.selection(), &[tile]);
        assert_eq!(session.moves(), 0);
        assert!(!session.is_locked());
    }

    #[test]
    fn test_reselecting_face_up_tile_is_ignored() {
        let mut session = session();
        let tile = session.board().tiles()[0].id;

        select_tile(&mut session, tile);
        assert_eq!(select_tile(&mut session, tile), SelectOutcome::Ignored);
        assert_eq!(session.selection(), &[tile]);
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_unknown_tile_is_ignored() {
        let mut session = session();
        assert_eq!(
            select_tile(&mut session, TileId::new(999)),
            SelectOutcome::Ignored
        );
    }

    #[test]
    fn test_second_selection_counts_move_and_locks() {
        let mut session = session();
        let (a, b) = matching_pair(&session);

        select_tile(&mut session, a);
        let outcome = select_tile(&mut session, b);

        let SelectOutcome::Evaluating(flip) = outcome else {
            panic!("expected an evaluation, got {:?}", outcome);
        };
        assert_eq!(flip.resolution, FlipResolution::Match);
        assert_eq!(flip.tiles, [a, b]);
        assert_eq!(flip.session, session.id());
        assert_eq!(flip.delay(), MATCH_DELAY);
        assert_eq!(session.moves(), 1);
        assert!(session.is_locked());
    }

    #[test]
    fn test_mismatch_evaluation() {
        let mut session = session();
        let (a, b) = mismatched_pair(&session);

        select_tile(&mut session, a);
        let outcome = select_tile(&mut session, b);

        let SelectOutcome::Evaluating(flip) = outcome else {
            panic!("expected an evaluation, got {:?}", outcome);
        };
        assert_eq!(flip.resolution, FlipResolution::Mismatch);
        assert_eq!(flip.delay(), MISMATCH_DELAY);
        assert_eq!(session.moves(), 1);
    }

    #[test]
    fn test_locked_board_drops_selections() {
        let mut session = session();
        let (a, b) = mismatched_pair(&session);

        select_tile(&mut session, a);
        select_tile(&mut session, b);

        // Every further pick is a no-op while the evaluation is pending.
        for tile in session.board().tiles().to_vec() {
            assert_eq!(select_tile(&mut session, tile.id), SelectOutcome::Ignored);
        }
        assert_eq!(session.selection().len(), 2);
        assert_eq!(session.moves(), 1);
    }

    #[test]
    fn test_resolve_match() {
        let mut session = session();
        let (a, b) = matching_pair(&session);

        select_tile(&mut session, a);
        let SelectOutcome::Evaluating(flip) = select_tile(&mut session, b) else {
            panic!("expected an evaluation");
        };
        resolve(&mut session, &flip);

        assert_eq!(session.board().status(a), Some(TileStatus::Matched));
        assert_eq!(session.board().status(b), Some(TileStatus::Matched));
        assert_eq!(session.matched_pairs(), 1);
        assert!(session.selection().is_empty());
        assert!(!session.is_locked());
    }

    #[test]
    fn test_resolve_mismatch() {
        let mut session = session();
        let (a, b) = mismatched_pair(&session);

        select_tile(&mut session, a);
        let SelectOutcome::Evaluating(flip) = select_tile(&mut session, b) else {
            panic!("expected an evaluation");
        };
        resolve(&mut session, &flip);

        assert_eq!(session.board().status(a), Some(TileStatus::FaceDown));
        assert_eq!(session.board().status(b), Some(TileStatus::FaceDown));
        assert_eq!(session.matched_pairs(), 0);
        assert_eq!(session.moves(), 1);
        assert!(session.selection().is_empty());
        assert!(!session.is_locked());
    }

    #[test]
    fn test_matched_tiles_cannot_be_reselected() {
        let mut session = session();
        let (a, b) = matching_pair(&session);

        select_tile(&mut session, a);
        let SelectOutcome::Evaluating(flip) = select_tile(&mut session, b) else {
            panic!("expected an evaluation");
        };
        resolve(&mut session, &flip);

        assert_eq!(select_tile(&mut session, a), SelectOutcome::Ignored);
        assert_eq!(select_tile(&mut session, b), SelectOutcome::Ignored);
    }
}
