//! Count-Up Animation - visibility-triggered numeric counting.
//!
//! A statistic counts from zero to its target over a fixed duration, started
//! the first time its host section becomes sufficiently visible. Once a
//! counter has finished it is latched (`counted`) and never restarts, no
//! matter how often the section scrolls back into view.
//!
//! Like the typewriter engine, counters are driven by an external loop
//! feeding timestamps into [`CountUp::tick`].

use std::time::{Duration, Instant};

/// Default counting duration.
pub const COUNT_DURATION: Duration = Duration::from_millis(2000);

/// A single counting-up statistic.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u64,
    duration: Duration,
    started: Option<Instant>,
    value: u64,
    counted: bool,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self::with_duration(target, COUNT_DURATION)
    }

    pub fn with_duration(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            started: None,
            value: 0,
            counted: false,
        }
    }

    /// Begin counting. No-op if already running or already counted.
    pub fn start(&mut self, now: Instant) {
        if self.counted || self.started.is_some() {
            return;
        }
        self.started = Some(now);
    }

    /// Advance the displayed value from linear progress.
    ///
    /// On completion the value equals the target exactly and the counter
    /// latches.
    pub fn tick(&mut self, now: Instant) {
        if self.counted {
            return;
        }
        let Some(started) = self.started else {
            return;
        };

        let elapsed = now.duration_since(started);
        if self.duration.is_zero() || elapsed >= self.duration {
            self.value = self.target;
            self.counted = true;
            self.started = None;
            return;
        }

        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.value = (self.target as f64 * progress).floor() as u64;
    }

    /// Jump straight to the target (reduced-motion rendering).
    pub fn complete(&mut self) {
        self.value = self.target;
        self.counted = true;
        self.started = None;
    }

    /// The currently displayed value.
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Whether the counter has finished (and is latched).
    pub fn is_counted(&self) -> bool {
        self.counted
    }

    /// Whether the counter is mid-animation.
    pub fn is_running(&self) -> bool {
        self.started.is_some() && !self.counted
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(base: Instant, millis: u64) -> Instant {
        base + Duration::from_millis(millis)
    }

    #[test]
    fn test_idle_until_started() {
        let t0 = Instant::now();
        let mut counter = CountUp::new(100);

        counter.tick(ms(t0, 5000));
        assert_eq!(counter.value(), 0);
        assert!(!counter.is_counted());
        assert!(!counter.is_running());
    }

    #[test]
    fn test_linear_progress() {
        let t0 = Instant::now();
        let mut counter = CountUp::with_duration(100, Duration::from_millis(1000));
        counter.start(t0);

        counter.tick(ms(t0, 250));
        assert_eq!(counter.value(), 25);

        counter.tick(ms(t0, 500));
        assert_eq!(counter.value(), 50);

        counter.tick(ms(t0, 999));
        assert!(counter.value() < 100);
        assert!(counter.is_running());
    }

    #[test]
    fn test_completion_is_exact_and_latched() {
        let t0 = Instant::now();
        let mut counter = CountUp::with_duration(37, Duration::from_millis(1000));
        counter.start(t0);

        counter.tick(ms(t0, 1000));
        assert_eq!(counter.value(), 37);
        assert!(counter.is_counted());
        assert!(!counter.is_running());

        // Restart attempts are ignored.
        counter.start(ms(t0, 2000));
        counter.tick(ms(t0, 3000));
        assert_eq!(counter.value(), 37);
        assert!(!counter.is_running());
    }

    #[test]
    fn test_start_while_running_keeps_origin() {
        let t0 = Instant::now();
        let mut counter = CountUp::with_duration(100, Duration::from_millis(1000));
        counter.start(t0);
        counter.tick(ms(t0, 400));
        let before = counter.value();

        // A second start must not rewind progress.
        counter.start(ms(t0, 400));
        counter.tick(ms(t0, 500));
        assert!(counter.value() >= before);
        assert_eq!(counter.value(), 50);
    }

    #[test]
    fn test_complete_jumps_to_target() {
        let mut counter = CountUp::new(12);
        counter.complete();
        assert_eq!(counter.value(), 12);
        assert!(counter.is_counted());

        // Latched: starting afterwards does nothing.
        counter.start(Instant::now());
        assert!(!counter.is_running());
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let t0 = Instant::now();
        let mut counter = CountUp::with_duration(5, Duration::ZERO);
        counter.start(t0);
        counter.tick(t0);
        assert_eq!(counter.value(), 5);
        assert!(counter.is_counted());
    }

    #[test]
    fn test_zero_target() {
        let t0 = Instant::now();
        let mut counter = CountUp::with_duration(0, Duration::from_millis(100));
        counter.start(t0);
        counter.tick(ms(t0, 50));
        assert_eq!(counter.value(), 0);
        counter.tick(ms(t0, 100));
        assert!(counter.is_counted());
        assert_eq!(counter.value(), 0);
    }
}
