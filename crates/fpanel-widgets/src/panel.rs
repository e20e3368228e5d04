#![forbid(unsafe_code)]

//! Per-panel open/measure/position lifecycle.
//!
//! # Role in fpanel-widgets
//! [`FloatingPanel`] is the state machine shared by [`crate::popover::Popover`]
//! and [`crate::menu::Menu`]. It owns the open flag, the resolved
//! [`Position`], the listener [`Subscription`], and the recompute scheduler.
//! Placement itself is delegated to [`compute_placement`].
//!
//! # Phases
//!
//! ```text
//!            open                measure ok
//!  Closed ─────────▶ Mounting ─────────────▶ Positioned ──┐
//!    ▲                  │                        │   ▲     │ resize/scroll/
//!    │      close       │         close          │   └─────┘ mutation
//!    └──────────────────┴────────────────────────┘
//! ```
//!
//! A panel is visible only in `Positioned`. Reopening always passes through
//! `Mounting` again, so stale positions from a previous open are never
//! painted.
//!
//! # Open modes
//! In [`OpenMode::Uncontrolled`] the panel owns its open flag: user intent
//! ([`FloatingPanel::open`], [`FloatingPanel::close`],
//! [`FloatingPanel::toggle`], outside clicks, Escape) applies immediately and
//! is reported as [`PanelEvent::OpenChanged`]. In [`OpenMode::Controlled`]
//! the same intents only emit `OpenChanged` and leave the state alone; the
//! owner applies them through [`FloatingPanel::set_open`].

use web_time::{Duration, Instant};

use fpanel_core::debounce::Debouncer;
use fpanel_core::event::Event;
use fpanel_core::event_coalescer::{EventCoalescer, RecomputeReason};
use fpanel_core::geometry::{Rect, Size};
use fpanel_layout::{AlignPolicy, Placement, PlacementRequest, Position, Side, compute_placement};

use crate::dismiss::{CloseCause, DismissPolicy};
use crate::host::{Interest, ListenerHost, Measure, Subscription};

/// Default gap between trigger and panel.
pub const DEFAULT_SIDE_OFFSET: f32 = 5.0;
/// Default distance kept from every viewport edge.
pub const DEFAULT_MARGIN: f32 = 16.0;

/// Where a panel is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelPhase {
    /// Not rendered.
    #[default]
    Closed,
    /// Rendered but not yet measured; painted invisible.
    Mounting,
    /// Measured and placed; painted visible.
    Positioned,
}

/// Notifications produced by a panel for its owner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEvent {
    /// The open flag changed (uncontrolled) or the panel asks its owner to
    /// change it (controlled).
    OpenChanged(bool),
    /// The panel closed.
    Closed(CloseCause),
    /// A placement computation completed.
    Positioned(Position),
}

/// Who owns the open flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpenMode {
    #[default]
    Uncontrolled,
    Controlled,
}

/// How layout signals are turned into recomputes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Schedule {
    /// At most one recompute per animation frame.
    #[default]
    Frame,
    /// One recompute after the signals have been quiet for the duration.
    Debounce(Duration),
}

/// Behavior of a [`FloatingPanel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConfig {
    /// Preferred side.
    pub side: Side,
    /// Gap between trigger and panel.
    pub side_offset: f32,
    /// Distance kept from every viewport edge.
    pub margin: f32,
    /// Cross-axis alignments allowed.
    pub align_policy: AlignPolicy,
    /// Which interactions close the panel.
    pub dismiss: DismissPolicy,
    /// Recompute scheduling while open.
    pub schedule: Schedule,
    /// Wait after mount before the first measurement.
    pub mount_delay: Duration,
    /// Who owns the open flag.
    pub mode: OpenMode,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            side: Side::Bottom,
            side_offset: DEFAULT_SIDE_OFFSET,
            margin: DEFAULT_MARGIN,
            align_policy: AlignPolicy::PreferCenter,
            dismiss: DismissPolicy::default(),
            schedule: Schedule::Frame,
            mount_delay: Duration::ZERO,
            mode: OpenMode::Uncontrolled,
        }
    }
}

impl PanelConfig {
    #[must_use]
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    #[must_use]
    pub fn side_offset(mut self, side_offset: f32) -> Self {
        self.side_offset = side_offset;
        self
    }

    #[must_use]
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn align_policy(mut self, policy: AlignPolicy) -> Self {
        self.align_policy = policy;
        self
    }

    #[must_use]
    pub fn dismiss(mut self, dismiss: DismissPolicy) -> Self {
        self.dismiss = dismiss;
        self
    }

    #[must_use]
    pub fn schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    #[must_use]
    pub fn mount_delay(mut self, delay: Duration) -> Self {
        self.mount_delay = delay;
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: OpenMode) -> Self {
        self.mode = mode;
        self
    }

    /// Host streams a panel with this config listens to while open.
    #[must_use]
    pub fn interest(&self) -> Interest {
        Interest::RESIZE | Interest::SCROLL | Interest::MUTATION | self.dismiss.interest()
    }
}

#[derive(Debug)]
enum Scheduler {
    Frame(EventCoalescer),
    Debounce(Debouncer),
}

impl Scheduler {
    fn new(schedule: Schedule) -> Self {
        match schedule {
            Schedule::Frame => Self::Frame(EventCoalescer::new()),
            Schedule::Debounce(delay) => Self::Debounce(Debouncer::new(delay)),
        }
    }

    fn signal(&mut self, reason: RecomputeReason, now: Instant) {
        match self {
            Self::Frame(coalescer) => coalescer.request(reason),
            Self::Debounce(debouncer) => debouncer.arm(reason, now),
        }
    }

    fn take_due(&mut self, now: Instant) -> Option<RecomputeReason> {
        match self {
            Self::Frame(coalescer) => coalescer.flush(),
            Self::Debounce(debouncer) => debouncer.poll(now),
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Frame(coalescer) => coalescer.clear(),
            Self::Debounce(debouncer) => debouncer.cancel(),
        }
    }
}

/// One floating panel anchored to one trigger.
#[derive(Debug)]
pub struct FloatingPanel {
    config: PanelConfig,
    phase: PanelPhase,
    position: Option<Position>,
    /// Placement guessed before the panel could be measured.
    seed: Option<Placement>,
    trigger: Option<Rect>,
    panel_size: Option<Size>,
    mount_deadline: Option<Instant>,
    scheduler: Scheduler,
    listeners: Option<Subscription>,
}

impl FloatingPanel {
    /// A closed panel.
    #[must_use]
    pub fn new(config: PanelConfig) -> Self {
        Self {
            scheduler: Scheduler::new(config.schedule),
            config,
            phase: PanelPhase::Closed,
            position: None,
            seed: None,
            trigger: None,
            panel_size: None,
            mount_deadline: None,
            listeners: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &PanelConfig {
        &self.config
    }

    #[must_use]
    pub const fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Whether the panel is rendered at all (visible or not).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != PanelPhase::Closed
    }

    /// Whether the panel may be painted visibly.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase == PanelPhase::Positioned
    }

    /// Last resolved position, if positioned.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        self.position
    }

    /// Placement seeded from an estimate before the first measurement.
    #[must_use]
    pub const fn seed(&self) -> Option<Placement> {
        self.seed
    }

    /// Panel size from the last measurement.
    #[must_use]
    pub const fn panel_size(&self) -> Option<Size> {
        self.panel_size
    }

    /// Panel rectangle in viewport coordinates, if positioned.
    #[must_use]
    pub fn panel_rect(&self) -> Option<Rect> {
        let position = self.position?;
        Some(position.panel_rect(self.trigger?, self.panel_size?))
    }

    /// Whether listeners are currently attached.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listeners.is_some()
    }

    /// User intent to open (trigger press).
    pub fn open(&mut self, host: &mut impl ListenerHost, now: Instant) -> Vec<PanelEvent> {
        self.open_with_seed(host, now, None)
    }

    /// Like [`Self::open`], with a placement guessed from an estimated size.
    ///
    /// The seed is never painted; it only feeds the stability rule of the
    /// first real computation.
    pub fn open_with_seed(
        &mut self,
        host: &mut impl ListenerHost,
        now: Instant,
        seed: Option<Placement>,
    ) -> Vec<PanelEvent> {
        if self.is_open() {
            return Vec::new();
        }
        match self.config.mode {
            OpenMode::Uncontrolled => {
                self.mount(host, now, seed);
                vec![PanelEvent::OpenChanged(true)]
            }
            OpenMode::Controlled => vec![PanelEvent::OpenChanged(true)],
        }
    }

    /// User intent to close.
    pub fn close(&mut self, cause: CloseCause) -> Vec<PanelEvent> {
        if !self.is_open() {
            return Vec::new();
        }
        match self.config.mode {
            OpenMode::Uncontrolled => {
                self.unmount(cause);
                vec![PanelEvent::OpenChanged(false), PanelEvent::Closed(cause)]
            }
            OpenMode::Controlled => {
                tracing::debug!(cause = cause.as_str(), "close requested from owner");
                vec![PanelEvent::OpenChanged(false)]
            }
        }
    }

    /// Trigger press: open when closed, close when open.
    pub fn toggle(&mut self, host: &mut impl ListenerHost, now: Instant) -> Vec<PanelEvent> {
        if self.is_open() {
            self.close(CloseCause::Programmatic)
        } else {
            self.open(host, now)
        }
    }

    /// Owner-driven state change. Applies in both modes and reports only
    /// the resulting close, never `OpenChanged`.
    pub fn set_open(
        &mut self,
        open: bool,
        host: &mut impl ListenerHost,
        now: Instant,
        seed: Option<Placement>,
    ) -> Vec<PanelEvent> {
        match (open, self.is_open()) {
            (true, false) => {
                self.mount(host, now, seed);
                Vec::new()
            }
            (false, true) => {
                self.unmount(CloseCause::Programmatic);
                vec![PanelEvent::Closed(CloseCause::Programmatic)]
            }
            _ => Vec::new(),
        }
    }

    /// Feed a host event.
    ///
    /// Layout signals are queued for the next [`Self::on_frame`]; pointer
    /// and key events are checked against the dismiss policy.
    pub fn handle_event(
        &mut self,
        event: &Event,
        measure: &impl Measure,
        now: Instant,
    ) -> Vec<PanelEvent> {
        if !self.is_open() {
            return Vec::new();
        }
        let reason = RecomputeReason::from_event(event);
        if !reason.is_empty() {
            if self.phase == PanelPhase::Positioned {
                self.scheduler.signal(reason, now);
            }
            return Vec::new();
        }
        // The panel is painted relative to wherever the trigger is now, which
        // may have moved since the last placement.
        let trigger = measure.trigger_rect().or(self.trigger);
        let size = measure.panel_size().or(self.panel_size);
        let panel = match (self.position, trigger, size) {
            (Some(position), Some(trigger), Some(size)) => Some(position.panel_rect(trigger, size)),
            _ => None,
        };
        match self.config.dismiss.classify(event, trigger, panel) {
            Some(cause) => self.close(cause),
            None => Vec::new(),
        }
    }

    /// Drive timers and run any due recompute. Call once per frame.
    pub fn on_frame(&mut self, measure: &impl Measure, now: Instant) -> Vec<PanelEvent> {
        match self.phase {
            PanelPhase::Closed => Vec::new(),
            PanelPhase::Mounting => {
                if self.mount_deadline.is_some_and(|deadline| now < deadline) {
                    return Vec::new();
                }
                self.measure(measure).into_iter().collect()
            }
            PanelPhase::Positioned => match self.scheduler.take_due(now) {
                Some(reasons) => {
                    tracing::trace!(?reasons, "recompute due");
                    self.measure(measure).into_iter().collect()
                }
                None => Vec::new(),
            },
        }
    }

    /// Measure and place the panel now.
    ///
    /// Returns `None` without changing anything when the panel is closed or
    /// either element is not measurable.
    pub fn measure(&mut self, measure: &impl Measure) -> Option<PanelEvent> {
        if !self.is_open() {
            return None;
        }
        let Some(trigger) = measure.trigger_rect() else {
            tracing::trace!("trigger not measurable; skipping placement");
            return None;
        };
        let Some(panel) = measure.panel_size() else {
            tracing::trace!("panel not measurable; skipping placement");
            return None;
        };

        let request = PlacementRequest::new(trigger, panel, measure.viewport())
            .side(self.config.side)
            .current(self.position.map(|p| p.placement).or(self.seed))
            .margin(self.config.margin)
            .side_offset(self.config.side_offset)
            .align_policy(self.config.align_policy);
        let position = compute_placement(&request);

        if self.phase == PanelPhase::Mounting {
            tracing::debug!(placement = %position.placement, "panel positioned");
        }
        self.trigger = Some(trigger);
        self.panel_size = Some(panel);
        self.position = Some(position);
        self.mount_deadline = None;
        self.phase = PanelPhase::Positioned;
        Some(PanelEvent::Positioned(position))
    }

    fn mount(&mut self, host: &mut impl ListenerHost, now: Instant, seed: Option<Placement>) {
        tracing::debug!(side = self.config.side.as_str(), "panel mounting");
        self.phase = PanelPhase::Mounting;
        self.seed = seed;
        self.mount_deadline = (!self.config.mount_delay.is_zero()).then(|| now + self.config.mount_delay);
        self.listeners = Some(host.listen(self.config.interest()));
    }

    fn unmount(&mut self, cause: CloseCause) {
        tracing::debug!(cause = cause.as_str(), "panel closed");
        self.phase = PanelPhase::Closed;
        self.position = None;
        self.seed = None;
        self.trigger = None;
        self.panel_size = None;
        self.mount_deadline = None;
        self.scheduler.clear();
        // Dropping the handle detaches every listener.
        self.listeners = None;
    }
}
