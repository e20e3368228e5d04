#![forbid(unsafe_code)]

//! Seams to the host UI runtime.
//!
//! Floating panels never query the host directly. The host implements
//! [`Measure`] (bounding-rectangle and viewport queries) and
//! [`ListenerHost`] (event subscription). Both are cheap to fake, so every
//! state machine in this crate is testable without a live UI.

use bitflags::bitflags;

use fpanel_core::geometry::{Rect, Size, Viewport};

/// Measurement queries answered by the host.
///
/// `None` means the element is not in the render tree right now (not yet
/// mounted, or already torn down). Callers treat that as "skip this
/// computation", never as an error.
pub trait Measure {
    /// Bounding box of the trigger in viewport coordinates.
    fn trigger_rect(&self) -> Option<Rect>;

    /// Measured size of the floating panel.
    fn panel_size(&self) -> Option<Size>;

    /// Current viewport dimensions.
    fn viewport(&self) -> Viewport;
}

/// A fixed set of measurements.
///
/// Handy for hosts that batch their reads once per frame, and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Snapshot {
    pub trigger: Option<Rect>,
    pub panel: Option<Size>,
    pub viewport: Viewport,
}

impl Snapshot {
    /// A snapshot with both elements measured.
    #[must_use]
    pub const fn new(trigger: Rect, panel: Size, viewport: Viewport) -> Self {
        Self {
            trigger: Some(trigger),
            panel: Some(panel),
            viewport,
        }
    }

    /// A snapshot where only the trigger is on screen (panel not mounted yet).
    #[must_use]
    pub const fn trigger_only(trigger: Rect, viewport: Viewport) -> Self {
        Self {
            trigger: Some(trigger),
            panel: None,
            viewport,
        }
    }
}

impl Measure for Snapshot {
    fn trigger_rect(&self) -> Option<Rect> {
        self.trigger
    }

    fn panel_size(&self) -> Option<Size> {
        self.panel
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

bitflags! {
    /// Host event streams a panel listens to while open.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Interest: u8 {
        /// Viewport resizes.
        const RESIZE       = 0b0_0001;
        /// Scrolls, captured at every ancestor level.
        const SCROLL       = 0b0_0010;
        /// Key presses (Escape).
        const KEYDOWN      = 0b0_0100;
        /// Pointer presses anywhere in the document.
        const POINTER_DOWN = 0b0_1000;
        /// Mutations inside the panel subtree.
        const MUTATION     = 0b1_0000;
    }
}

/// Event subscription primitive supplied by the host.
pub trait ListenerHost {
    /// Start delivering the given event streams to the panel.
    ///
    /// The returned [`Subscription`] stops delivery when dropped.
    fn listen(&mut self, interest: Interest) -> Subscription;
}

/// Handle to an active set of listeners; unsubscribes on drop.
pub struct Subscription {
    interest: Interest,
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// A subscription that runs `cancel` when dropped.
    pub fn new(interest: Interest, cancel: impl FnOnce() + 'static) -> Self {
        Self {
            interest,
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to tear down.
    #[must_use]
    pub fn detached(interest: Interest) -> Self {
        Self {
            interest,
            cancel: None,
        }
    }

    /// Streams covered by this subscription.
    #[must_use]
    pub const fn interest(&self) -> Interest {
        self.interest
    }

    /// Unsubscribe now.
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            tracing::trace!(interest = ?self.interest, "listeners detached");
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("interest", &self.interest)
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

/// A [`ListenerHost`] that hands out detached subscriptions.
///
/// For hosts that route every event to the panel unconditionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListeners;

impl ListenerHost for NoopListeners {
    fn listen(&mut self, interest: Interest) -> Subscription {
        Subscription::detached(interest)
    }
}
