#![forbid(unsafe_code)]

//! Popover: anchored floating content with an optional arrow.
//!
//! [`Popover`] pairs a [`FloatingPanel`] with popover defaults (bottom side,
//! 5px gap, centered when possible, one recompute per frame) and turns its
//! state into a [`PopoverFrame`] the host can paint directly.
//!
//! # Parts
//!
//! The trigger, content, and close handle are methods on the popover itself,
//! so they cannot be wired to the wrong popover:
//!
//! - [`Popover::toggle`]: the trigger was pressed
//! - [`Popover::content`]: what to paint this frame
//! - [`Popover::close`]: a close button inside the content was pressed
//!
//! # Example
//!
//! ```
//! use fpanel_core::geometry::{Rect, Size, Viewport};
//! use fpanel_widgets::host::{NoopListeners, Snapshot};
//! use fpanel_widgets::popover::{Popover, PopoverConfig};
//! use web_time::Instant;
//!
//! let now = Instant::now();
//! let mut popover = Popover::new(PopoverConfig::default());
//! popover.toggle(&mut NoopListeners, now);
//!
//! // First frame after mount: painted, but invisible.
//! assert!(!popover.content().unwrap().visible);
//!
//! let snap = Snapshot::new(
//!     Rect::new(10.0, 10.0, 40.0, 20.0),
//!     Size::new(250.0, 300.0),
//!     Viewport::new(800.0, 600.0),
//! );
//! popover.on_frame(&snap, now);
//! let frame = popover.content().unwrap();
//! assert!(frame.visible);
//! assert_eq!(frame.placement.as_deref(), Some("bottom-left"));
//! ```

use web_time::Instant;

use fpanel_core::event::Event;
use fpanel_layout::{AlignPolicy, ArrowLayout, ArrowStyle, Position, Side, arrow_layout};

use crate::dismiss::{CloseCause, DismissPolicy};
use crate::error::PanelError;
use crate::host::{ListenerHost, Measure};
use crate::panel::{
    DEFAULT_MARGIN, DEFAULT_SIDE_OFFSET, FloatingPanel, OpenMode, PanelConfig, PanelEvent,
    PanelPhase, Schedule,
};

/// Popover behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopoverConfig {
    pub side: Side,
    pub side_offset: f32,
    pub margin: f32,
    /// Draw an arrow pointing at the trigger.
    pub show_arrow: bool,
    pub arrow: ArrowStyle,
    pub close_on_outside_click: bool,
    pub close_on_escape: bool,
    pub mode: OpenMode,
}

impl Default for PopoverConfig {
    fn default() -> Self {
        Self {
            side: Side::Bottom,
            side_offset: DEFAULT_SIDE_OFFSET,
            margin: DEFAULT_MARGIN,
            show_arrow: true,
            arrow: ArrowStyle::default(),
            close_on_outside_click: true,
            close_on_escape: true,
            mode: OpenMode::Uncontrolled,
        }
    }
}

impl PopoverConfig {
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
    pub fn show_arrow(mut self, show: bool) -> Self {
        self.show_arrow = show;
        self
    }

    #[must_use]
    pub fn arrow_size(mut self, size: f32) -> Self {
        self.arrow.size = size;
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: OpenMode) -> Self {
        self.mode = mode;
        self
    }

    /// The underlying panel configuration.
    #[must_use]
    pub fn panel_config(&self) -> PanelConfig {
        PanelConfig::default()
            .side(self.side)
            .side_offset(self.side_offset)
            .margin(self.margin)
            .align_policy(AlignPolicy::PreferCenter)
            .dismiss(DismissPolicy {
                on_outside_click: self.close_on_outside_click,
                on_escape: self.close_on_escape,
            })
            .schedule(Schedule::Frame)
            .mode(self.mode)
    }
}

/// Everything needed to paint the popover content for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PopoverFrame {
    /// Paint visibly. False until the first real measurement lands.
    pub visible: bool,
    pub opacity: f32,
    pub position: Option<Position>,
    /// `"{y}-{x}"` label such as `bottom-left`, once positioned.
    pub placement: Option<String>,
    /// CSS-style translation of the content relative to the trigger.
    pub transform: String,
    pub arrow: Option<ArrowLayout>,
}

/// A popover anchored to one trigger.
#[derive(Debug)]
pub struct Popover {
    config: PopoverConfig,
    panel: FloatingPanel,
}

impl Popover {
    #[must_use]
    pub fn new(config: PopoverConfig) -> Self {
        Self {
            panel: FloatingPanel::new(config.panel_config()),
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &PopoverConfig {
        &self.config
    }

    #[must_use]
    pub const fn panel(&self) -> &FloatingPanel {
        &self.panel
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    /// Trigger pressed.
    pub fn toggle(&mut self, host: &mut impl ListenerHost, now: Instant) -> Vec<PanelEvent> {
        self.panel.toggle(host, now)
    }

    /// Close handle pressed.
    pub fn close(&mut self) -> Vec<PanelEvent> {
        self.panel.close(CloseCause::Programmatic)
    }

    /// Controlled `open` prop changed.
    pub fn set_open(
        &mut self,
        open: bool,
        host: &mut impl ListenerHost,
        now: Instant,
    ) -> Vec<PanelEvent> {
        self.panel.set_open(open, host, now, None)
    }

    pub fn handle_event(
        &mut self,
        event: &Event,
        measure: &impl Measure,
        now: Instant,
    ) -> Vec<PanelEvent> {
        self.panel.handle_event(event, measure, now)
    }

    pub fn on_frame(&mut self, measure: &impl Measure, now: Instant) -> Vec<PanelEvent> {
        self.panel.on_frame(measure, now)
    }

    /// Paint state for the content part.
    ///
    /// # Errors
    ///
    /// [`PanelError::NotMounted`] if the popover is closed: content only
    /// exists inside an open popover.
    pub fn content(&self) -> Result<PopoverFrame, PanelError> {
        if self.panel.phase() == PanelPhase::Closed {
            return Err(PanelError::NotMounted {
                part: "PopoverContent",
                container: "Popover",
            });
        }
        let position = self.panel.position();
        let visible = self.panel.is_visible();
        let arrow = match (self.config.show_arrow, position, self.panel.panel_size()) {
            (true, Some(position), Some(size)) => {
                Some(arrow_layout(position.placement, size, self.config.arrow))
            }
            _ => None,
        };
        Ok(PopoverFrame {
            visible,
            opacity: if visible { 1.0 } else { 0.0 },
            position,
            placement: position.map(|p| p.placement.to_string()),
            transform: position
                .map(|p| p.offset)
                .unwrap_or_default()
                .to_css_translate(),
            arrow,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{NoopListeners, Snapshot};
    use fpanel_core::geometry::{Rect, Size, Viewport};
    use fpanel_layout::Edges;

    fn centered_snapshot() -> Snapshot {
        Snapshot::new(
            Rect::new(380.0, 100.0, 40.0, 20.0),
            Size::new(200.0, 100.0),
            Viewport::new(800.0, 600.0),
        )
    }

    #[test]
    fn content_of_closed_popover_is_an_error() {
        let popover = Popover::new(PopoverConfig::default());
        let err = popover.content().unwrap_err();
        assert_eq!(
            err.to_string(),
            "PopoverContent must be used within an open Popover"
        );
    }

    #[test]
    fn mounting_frame_is_transparent() {
        let mut popover = Popover::new(PopoverConfig::default());
        popover.toggle(&mut NoopListeners, Instant::now());
        let frame = popover.content().unwrap();
        assert!(!frame.visible);
        assert_eq!(frame.opacity, 0.0);
        assert!(frame.placement.is_none());
        assert!(frame.arrow.is_none());
    }

    #[test]
    fn centered_popover_with_arrow() {
        let now = Instant::now();
        let mut popover = Popover::new(PopoverConfig::default());
        popover.toggle(&mut NoopListeners, now);
        popover.on_frame(&centered_snapshot(), now);

        let frame = popover.content().unwrap();
        assert!(frame.visible);
        assert_eq!(frame.placement.as_deref(), Some("bottom-center"));
        assert_eq!(frame.transform, "translate(-80px, 25px)");
        let arrow = frame.arrow.expect("arrow enabled");
        assert_eq!(arrow.x, 96.0);
        assert_eq!(arrow.y, -4.0);
        assert_eq!(arrow.borders, Edges::TOP | Edges::LEFT);
    }

    #[test]
    fn arrow_can_be_disabled() {
        let now = Instant::now();
        let mut popover = Popover::new(PopoverConfig::default().show_arrow(false));
        popover.toggle(&mut NoopListeners, now);
        popover.on_frame(&centered_snapshot(), now);
        assert!(popover.content().unwrap().arrow.is_none());
    }

    #[test]
    fn close_handle_closes() {
        let now = Instant::now();
        let mut popover = Popover::new(PopoverConfig::default());
        popover.toggle(&mut NoopListeners, now);
        let events = popover.close();
        assert_eq!(events.last(), Some(&PanelEvent::Closed(CloseCause::Programmatic)));
        assert!(popover.content().is_err());
    }
}
