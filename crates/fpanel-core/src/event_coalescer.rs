#![forbid(unsafe_code)]

//! Frame-based coalescing of layout signals.
//!
//! While a floating panel is open, the host can deliver a flood of resize,
//! scroll, and mutation events (continuous scrolling easily produces dozens
//! per frame). Each one invalidates the panel's placement, but recomputing
//! per event thrashes layout.
//!
//! [`EventCoalescer`] absorbs the [`RecomputeReason`] of each layout signal
//! and remembers *why* a recompute is needed. The host calls
//! [`EventCoalescer::flush`] once per animation frame and runs at most one
//! placement computation for everything that arrived since the previous
//! frame. The viewport itself is not carried: every computation reads it
//! fresh from the host.
//!
//! # Usage
//!
//! ```
//! use fpanel_core::event::Event;
//! use fpanel_core::event_coalescer::{EventCoalescer, RecomputeReason};
//!
//! let mut coalescer = EventCoalescer::new();
//!
//! for event in [Event::Scroll, Event::Scroll, Event::Resize { width: 800.0, height: 600.0 }] {
//!     coalescer.request(RecomputeReason::from_event(&event));
//! }
//!
//! let reasons = coalescer.flush().expect("pending recompute");
//! assert_eq!(reasons, RecomputeReason::SCROLL | RecomputeReason::RESIZE);
//! assert!(coalescer.flush().is_none());
//! ```

use bitflags::bitflags;

use crate::event::Event;

bitflags! {
    /// Why a placement recompute was requested.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RecomputeReason: u8 {
        /// The viewport changed size.
        const RESIZE   = 0b001;
        /// The window or an ancestor scrolled.
        const SCROLL   = 0b010;
        /// The panel's content changed after mount.
        const MUTATION = 0b100;
    }
}

impl RecomputeReason {
    /// Reason flag for a layout event, or empty for anything else.
    #[must_use]
    pub const fn from_event(event: &Event) -> Self {
        match event {
            Event::Resize { .. } => Self::RESIZE,
            Event::Scroll => Self::SCROLL,
            Event::Mutation => Self::MUTATION,
            Event::Key(_) | Event::Pointer(_) => Self::empty(),
        }
    }
}

/// Collapses layout signals into at most one recompute per frame.
///
/// Not thread-safe; lives on the UI thread next to the panel it serves.
/// Holds at most one pending request, so every operation is O(1).
#[derive(Debug, Clone, Default)]
pub struct EventCoalescer {
    pending: RecomputeReason,
}

impl EventCoalescer {
    /// Create an empty coalescer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reason to recompute. Empty reasons are ignored.
    pub fn request(&mut self, reason: RecomputeReason) {
        self.pending |= reason;
    }

    /// Take every reason seen since the last flush, if any. Call once per
    /// animation frame.
    #[must_use]
    pub fn flush(&mut self) -> Option<RecomputeReason> {
        if self.pending.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.pending))
    }

    /// Drop anything pending without delivering it.
    pub fn clear(&mut self) {
        self.pending = RecomputeReason::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyCode, KeyEvent, PointerEvent};

    #[test]
    fn empty_flush_is_none() {
        let mut c = EventCoalescer::new();
        assert!(c.flush().is_none());
    }

    #[test]
    fn burst_of_scrolls_is_one_recompute() {
        let mut c = EventCoalescer::new();
        for _ in 0..50 {
            c.request(RecomputeReason::from_event(&Event::Scroll));
        }
        assert_eq!(c.flush(), Some(RecomputeReason::SCROLL));
        assert!(c.flush().is_none());
    }

    #[test]
    fn reasons_accumulate() {
        let mut c = EventCoalescer::new();
        c.request(RecomputeReason::from_event(&Event::Resize { width: 1.0, height: 1.0 }));
        c.request(RecomputeReason::from_event(&Event::Mutation));
        assert_eq!(
            c.flush(),
            Some(RecomputeReason::RESIZE | RecomputeReason::MUTATION)
        );
    }

    #[test]
    fn input_is_not_a_layout_signal() {
        let mut c = EventCoalescer::new();
        c.request(RecomputeReason::from_event(&Event::Key(KeyEvent::new(KeyCode::Escape))));
        c.request(RecomputeReason::from_event(&Event::Pointer(PointerEvent::down(3.0, 4.0))));
        assert!(c.flush().is_none());
    }

    #[test]
    fn clear_discards_pending() {
        let mut c = EventCoalescer::new();
        c.request(RecomputeReason::RESIZE);
        c.clear();
        assert!(c.flush().is_none());
    }
}
