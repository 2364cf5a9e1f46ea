//! Trailing-edge debounce.
//!
//! Holds the most recent value and releases it once no newer value has
//! arrived for the configured quiet period. The clock is passed in by the
//! caller, so the utility itself never sleeps or spawns.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a new value, restarting the quiet period.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Take the pending value if the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, last)) if now.saturating_duration_since(*last) >= self.delay => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Take the pending value immediately, regardless of timing.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn nothing_pending_yields_nothing() {
        let mut debouncer: Debouncer<String> = Debouncer::new(DELAY);
        assert_eq!(debouncer.poll(Instant::now()), None);
    }

    #[test]
    fn holds_value_during_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.push("jo", start);
        assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.poll(start + DELAY), Some("jo"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn only_latest_value_is_released() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.push("j", start);
        debouncer.push("jo", start + Duration::from_millis(100));
        debouncer.push("joh", start + Duration::from_millis(200));

        // 300ms after the first push, but only 100ms after the last one.
        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(500)), Some("joh"));
        assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
    }

    #[test]
    fn flush_releases_immediately() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.push(1, start);
        assert_eq!(debouncer.flush(), Some(1));
        assert_eq!(debouncer.poll(start + DELAY), None);
    }
}
