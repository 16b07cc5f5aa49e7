//! Per-level elapsed-time counter.
//!
//! The clock is monotonic and host-driven: the host calls
//! [`GameEngine::tick`](crate::engine::GameEngine::tick) once per wall
//! second and the counter advances by exactly one while the level is
//! active. Starting a level replaces the whole clock, so counters never
//! overlap. Levels are not time-limited; there is no upper bound.

use serde::{Deserialize, Serialize};

/// Render a seconds count as zero-padded `MM:SS`.
///
/// Minutes widen past two digits rather than wrapping.
#[must_use]
pub fn format_mm_ss(total_seconds: u32) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Monotonic per-level seconds counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClock {
    seconds: u32,
    running: bool,
}

impl SessionClock {
    /// Create a running clock at zero.
    #[must_use]
    pub fn start() -> Self {
        Self {
            seconds: 0,
            running: true,
        }
    }

    /// Advance one second if running.
    ///
    /// Returns the new reading, or `None` if the clock is stopped.
    pub fn tick(&mut self) -> Option<u32> {
        if !self.running {
            return None;
        }
        self.seconds += 1;
        Some(self.seconds)
    }

    /// Stop the clock. Further ticks are ignored.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the clock is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current reading in seconds.
    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Current reading as zero-padded `MM:SS`.
    #[must_use]
    pub fn formatted(&self) -> String {
        format_mm_ss(self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_increments_by_one() {
        let mut clock = SessionClock::start();

        assert_eq!(clock.tick(), Some(1));
        assert_eq!(clock.tick(), Some(2));
        assert_eq!(clock.seconds(), 2);
    }

    #[test]
    fn test_stopped_clock_ignores_ticks() {
        let mut clock = SessionClock::start();
        clock.tick();
        clock.stop();

        assert_eq!(clock.tick(), None);
        assert_eq!(clock.seconds(), 1);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_format_mm_ss() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(9), "00:09");
        assert_eq!(format_mm_ss(61), "01:01");
        assert_eq!(format_mm_ss(600), "10:00");
        assert_eq!(format_mm_ss(6000), "100:00");
    }

    #[test]
    fn test_formatted_tracks_reading() {
        let mut clock = SessionClock::start();
        for _ in 0..65 {
            clock.tick();
        }
        assert_eq!(clock.formatted(), "01:05");
    }
}
