#![forbid(unsafe_code)]

//! Trailing-edge debounce timer.
//!
//! Some panels (menus) prefer to wait until a burst of viewport changes has
//! settled instead of recomputing every frame. [`Debouncer`] re-arms on every
//! signal and fires once `delay` has elapsed since the most recent one.
//!
//! Time is passed in explicitly so tests never sleep.

use web_time::{Duration, Instant};

use crate::event_coalescer::RecomputeReason;

/// Trailing-edge debounce over [`RecomputeReason`]s.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
    pending: RecomputeReason,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            pending: RecomputeReason::empty(),
        }
    }

    /// Quiet period.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a signal at `now`, pushing the deadline out.
    pub fn arm(&mut self, reason: RecomputeReason, now: Instant) {
        self.pending |= reason;
        self.deadline = Some(now + self.delay);
    }

    /// Whether a signal is waiting for its deadline.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Instant at which the pending signal fires.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fire if the deadline has passed, returning the accumulated reasons.
    pub fn poll(&mut self, now: Instant) -> Option<RecomputeReason> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                let reasons = std::mem::take(&mut self.pending);
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    ?reasons,
                    delay_ms = self.delay.as_millis() as u64,
                    "debounce fired"
                );
                Some(reasons)
            }
            _ => None,
        }
    }

    /// Drop the pending signal.
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.pending = RecomputeReason::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(50));
        d.arm(RecomputeReason::RESIZE, t0);
        assert!(d.poll(t0 + Duration::from_millis(49)).is_none());
        assert_eq!(
            d.poll(t0 + Duration::from_millis(50)),
            Some(RecomputeReason::RESIZE)
        );
        assert!(!d.is_armed());
        assert!(d.poll(t0 + Duration::from_millis(500)).is_none());
    }

    #[test]
    fn rearm_pushes_deadline() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(50));
        d.arm(RecomputeReason::RESIZE, t0);
        d.arm(RecomputeReason::SCROLL, t0 + Duration::from_millis(40));
        assert!(d.poll(t0 + Duration::from_millis(60)).is_none());
        assert_eq!(
            d.poll(t0 + Duration::from_millis(90)),
            Some(RecomputeReason::RESIZE | RecomputeReason::SCROLL)
        );
    }

    #[test]
    fn cancel_drops_signal() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(10));
        d.arm(RecomputeReason::MUTATION, t0);
        d.cancel();
        assert!(d.deadline().is_none());
        assert!(d.poll(t0 + Duration::from_secs(1)).is_none());
    }
}
