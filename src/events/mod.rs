//! Outbound signals from the engine to its host.
//!
//! The engine never touches presentation state. Every operation returns
//! the `GameEvent`s it produced, in order; the rendering layer consumes
//! them to update its view, play audio, announce to assistive tech, and
//! so on. Events are plain data and serialize cleanly.

use serde::{Deserialize, Serialize};

use crate::core::TileId;

/// Something the host should react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tile was flipped face-up by a valid selection.
    TileFlipped {
        /// The flipped tile.
        tile: TileId,
    },

    /// Two tiles matched. They are out of interactive circulation; the
    /// host may relocate them to a solved-pairs presentation area.
    PairMatched {
        /// The matched tiles, in selection order.
        tiles: [TileId; 2],
    },

    /// Two tiles did not match and have flipped back face-down.
    PairMismatched {
        /// The evaluated tiles, in selection order.
        tiles: [TileId; 2],
    },

    /// Every pair on the level is matched. Fires exactly once per
    /// session instance.
    LevelCompleted {
        /// Whether the completed level was the highest configured one,
        /// so the host can choose wrap-around copy.
        is_final: bool,
    },

    /// The session clock advanced one second.
    ClockTick {
        /// The new elapsed-seconds reading.
        seconds: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_serialize_round_trip() {
        let events = vec![
            GameEvent::TileFlipped { tile: TileId::new(4) },
            GameEvent::PairMatched { tiles: [TileId::new(1), TileId::new(2)] },
            GameEvent::LevelCompleted { is_final: true },
            GameEvent::ClockTick { seconds: 61 },
        ];

        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<GameEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(events, back);
    }
}
