//! Per-level session state, the selection/match resolver, and the clock.
//!
//! A [`Session`] is the single owned value holding everything mutable
//! about one level attempt. Restarting or changing level replaces it
//! wholesale; nothing survives except the leaderboard.

pub mod clock;
pub mod resolver;
pub mod state;

pub use clock::{format_mm_ss, SessionClock};
pub use resolver::{
    FlipResolution, PendingFlip, SelectOutcome, MATCH_DELAY, MISMATCH_DELAY,
};
pub use state::{Session, SessionId};
