//! Elapsed-time session clock.

use std::time::{Duration, Instant};

/// Wall-clock timer for one play session.
///
/// Starts on construction and reports elapsed whole seconds, rounded to
/// the nearest second. [`SessionClock::stop`] freezes the reading; the
/// first stop wins and later stops are no-ops, so a solve and a quit
/// racing each other cannot produce two different final times.
///
/// # Examples
///
/// ```
/// use picklock_puzzles::SessionClock;
///
/// let mut clock = SessionClock::start();
/// let final_secs = clock.stop();
/// assert_eq!(clock.elapsed_secs(), final_secs);
/// ```
#[derive(Debug, Clone)]
pub struct SessionClock {
    started_at: Instant,
    stopped_after: Option<Duration>,
}

impl SessionClock {
    /// Start a new clock at the current instant.
    #[must_use]
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
            stopped_after: None,
        }
    }

    /// Elapsed time, frozen if the clock was stopped.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.stopped_after
            .unwrap_or_else(|| self.started_at.elapsed())
    }

    /// Elapsed whole seconds, rounded to the nearest second.
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        let ms = self.elapsed().as_millis() as u64;
        (ms + 500) / 1000
    }

    /// Whether the clock has been stopped.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped_after.is_some()
    }

    /// Stop the clock and return the final whole-second reading.
    ///
    /// Idempotent: repeated stops keep the first reading.
    pub fn stop(&mut self) -> u64 {
        if self.stopped_after.is_none() {
            self.stopped_after = Some(self.started_at.elapsed());
        }
        self.elapsed_secs()
    }

    /// Discard the current reading and restart from now.
    pub fn restart(&mut self) {
        self.started_at = Instant::now();
        self.stopped_after = None;
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_clock_reads_zero_seconds() {
        let clock = SessionClock::start();
        assert_eq!(clock.elapsed_secs(), 0);
        assert!(!clock.is_stopped());
    }

    #[test]
    fn test_stop_freezes_the_reading() {
        let mut clock = SessionClock::start();
        let first = clock.stop();
        assert!(clock.is_stopped());

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(clock.stop(), first);
        assert_eq!(clock.elapsed_secs(), first);
    }

    #[test]
    fn test_restart_clears_the_stop() {
        let mut clock = SessionClock::start();
        clock.stop();
        clock.restart();
        assert!(!clock.is_stopped());
        assert_eq!(clock.elapsed_secs(), 0);
    }

    #[test]
    fn test_rounding_is_to_the_nearest_second() {
        let mut clock = SessionClock::start();
        clock.stopped_after = Some(Duration::from_millis(1499));
        assert_eq!(clock.elapsed_secs(), 1);
        clock.stopped_after = Some(Duration::from_millis(1500));
        assert_eq!(clock.elapsed_secs(), 2);
        clock.stopped_after = Some(Duration::from_millis(400));
        assert_eq!(clock.elapsed_secs(), 0);
    }
}
