use std::time::{Duration, Instant};

/// Per-level countdown. Monotonic clock, polled from the update loop; the
/// caller reacts to `is_time_over` exactly once per level.
#[derive(Debug)]
pub struct GameTimer {
    limit: Duration,
    started_at: Option<Instant>,
    remaining_at_stop: Duration,
}

impl GameTimer {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            started_at: None,
            remaining_at_stop: limit,
        }
    }

    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Freeze the countdown at its current value (level cleared).
    pub fn stop(&mut self) {
        self.remaining_at_stop = self.remaining();
        self.started_at = None;
    }

    pub fn reset(&mut self) {
        self.started_at = None;
        self.remaining_at_stop = self.limit;
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn remaining(&self) -> Duration {
        match self.started_at {
            Some(started) => self.limit.saturating_sub(started.elapsed()),
            None => self.remaining_at_stop,
        }
    }

    pub fn is_time_over(&self) -> bool {
        self.remaining() == Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_timer_is_not_over() {
        let timer = GameTimer::new(Duration::from_secs(60));
        assert_eq!(timer.remaining(), Duration::from_secs(60));
        assert!(!timer.is_time_over());
    }

    #[test]
    fn zero_limit_expires_immediately() {
        let mut timer = GameTimer::new(Duration::ZERO);
        timer.start();
        assert!(timer.is_time_over());
    }

    #[test]
    fn stop_freezes_remaining_time() {
        let mut timer = GameTimer::new(Duration::from_secs(60));
        timer.start();
        timer.stop();
        let frozen = timer.remaining();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(timer.remaining(), frozen);
    }

    #[test]
    fn reset_restores_full_limit() {
        let mut timer = GameTimer::new(Duration::from_secs(60));
        timer.start();
        timer.stop();
        timer.reset();
        assert_eq!(timer.remaining(), Duration::from_secs(60));
    }
}
