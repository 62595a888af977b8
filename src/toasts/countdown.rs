// SPDX-License-Identifier: MPL-2.0
//! Auto-close timer.
//!
//! A countdown is a deadline that can be paused. Time is always passed in
//! explicitly so the board can be driven by the runtime's tick and by tests
//! alike.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    duration: Duration,
    started: Instant,
    paused_at: Option<Instant>,
    paused_for: Duration,
}

impl Countdown {
    #[must_use]
    pub fn start(duration: Duration, now: Instant) -> Self {
        Self {
            duration,
            started: now,
            paused_at: None,
            paused_for: Duration::ZERO,
        }
    }

    /// Running time since start, pauses excluded.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        let end = self.paused_at.unwrap_or(now);
        end.saturating_duration_since(self.started)
            .saturating_sub(self.paused_for)
    }

    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.duration.saturating_sub(self.elapsed(now))
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.duration
    }

    /// Remaining share of the duration, `1.0` at start and `0.0` at expiry.
    #[must_use]
    pub fn fraction_remaining(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.remaining(now).as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn pause(&mut self, now: Instant) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if let Some(at) = self.paused_at.take() {
            self.paused_for += now.saturating_duration_since(at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn expires_after_its_duration() {
        let start = Instant::now();
        let countdown = Countdown::start(SECOND, start);

        assert!(!countdown.is_expired(start + Duration::from_millis(999)));
        assert!(countdown.is_expired(start + SECOND));
    }

    #[test]
    fn fraction_remaining_decreases_linearly() {
        let start = Instant::now();
        let countdown = Countdown::start(SECOND, start);

        assert_eq!(countdown.fraction_remaining(start), 1.0);
        let half = countdown.fraction_remaining(start + Duration::from_millis(500));
        assert!((half - 0.5).abs() < 1e-3);
        assert_eq!(countdown.fraction_remaining(start + 2 * SECOND), 0.0);
    }

    #[test]
    fn pause_freezes_time_until_resumed() {
        let start = Instant::now();
        let mut countdown = Countdown::start(SECOND, start);

        countdown.pause(start + Duration::from_millis(400));
        assert!(countdown.is_paused());
        assert!(!countdown.is_expired(start + 10 * SECOND));
        assert_eq!(
            countdown.remaining(start + 10 * SECOND),
            Duration::from_millis(600)
        );

        countdown.resume(start + 10 * SECOND);
        assert!(!countdown.is_paused());
        let resumed_expiry = start + 10 * SECOND + Duration::from_millis(600);
        assert!(!countdown.is_expired(resumed_expiry - Duration::from_millis(1)));
        assert!(countdown.is_expired(resumed_expiry));
    }

    #[test]
    fn repeated_pause_keeps_first_instant() {
        let start = Instant::now();
        let mut countdown = Countdown::start(SECOND, start);

        countdown.pause(start + Duration::from_millis(100));
        countdown.pause(start + Duration::from_millis(900));
        countdown.resume(start + Duration::from_millis(1100));

        assert_eq!(
            countdown.remaining(start + Duration::from_millis(1100)),
            Duration::from_millis(900)
        );
    }

    #[test]
    fn zero_duration_is_immediately_expired() {
        let start = Instant::now();
        let countdown = Countdown::start(Duration::ZERO, start);
        assert!(countdown.is_expired(start));
        assert_eq!(countdown.fraction_remaining(start), 0.0);
    }
}
