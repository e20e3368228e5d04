#![forbid(unsafe_code)]

//! Dropdown menu hanging off one corner of its trigger.
//!
//! Menus differ from popovers in three ways:
//!
//! - The panel is edge-aligned ([`Corner`]), never centered.
//! - Before the panel exists, a corner is seeded from an estimated size so
//!   the first real computation starts from a sensible guess. The seed is
//!   never painted.
//! - Viewport changes are debounced instead of frame-coalesced, and the
//!   first measurement waits a short mount delay.
//!
//! Activating an item reports [`MenuEvent::Selected`] before the close that
//! follows it, so the owner runs the item's action while the menu is still
//! considered open.

use web_time::{Duration, Instant};

use fpanel_core::event::Event;
use fpanel_core::geometry::Size;
use fpanel_layout::{AlignPolicy, Corner, CornerRequest, Side, compute_corner};

use crate::dismiss::{CloseCause, DismissPolicy};
use crate::error::PanelError;
use crate::host::{ListenerHost, Measure};
use crate::panel::{DEFAULT_MARGIN, FloatingPanel, OpenMode, PanelConfig, PanelEvent, Schedule};

/// Default gap between trigger and menu.
pub const DEFAULT_MENU_GAP: f32 = 8.0;
/// Size assumed for a menu that has not been measured yet.
pub const DEFAULT_ESTIMATED_SIZE: Size = Size::new(200.0, 200.0);
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);
pub const DEFAULT_MOUNT_DELAY: Duration = Duration::from_millis(10);

/// Menu behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuConfig {
    pub gap: f32,
    pub margin: f32,
    pub estimated_size: Size,
    pub debounce: Duration,
    pub mount_delay: Duration,
    pub close_on_outside_click: bool,
    pub close_on_escape: bool,
    pub mode: OpenMode,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_MENU_GAP,
            margin: DEFAULT_MARGIN,
            estimated_size: DEFAULT_ESTIMATED_SIZE,
            debounce: DEFAULT_DEBOUNCE,
            mount_delay: DEFAULT_MOUNT_DELAY,
            close_on_outside_click: true,
            close_on_escape: true,
            mode: OpenMode::Uncontrolled,
        }
    }
}

impl MenuConfig {
    #[must_use]
    pub fn mode(mut self, mode: OpenMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn estimated_size(mut self, size: Size) -> Self {
        self.estimated_size = size;
        self
    }

    #[must_use]
    pub fn panel_config(&self) -> PanelConfig {
        PanelConfig::default()
            .side(Side::Bottom)
            .side_offset(self.gap)
            .margin(self.margin)
            .align_policy(AlignPolicy::EdgesOnly)
            .dismiss(DismissPolicy {
                on_outside_click: self.close_on_outside_click,
                on_escape: self.close_on_escape,
            })
            .schedule(Schedule::Debounce(self.debounce))
            .mount_delay(self.mount_delay)
            .mode(self.mode)
    }
}

/// One entry in a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub disabled: bool,
}

impl MenuItem {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Notifications produced by a [`Menu`].
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent {
    /// An item was activated; carries its id.
    Selected(String),
    Panel(PanelEvent),
}

fn lift(events: Vec<PanelEvent>) -> Vec<MenuEvent> {
    events.into_iter().map(MenuEvent::Panel).collect()
}

/// A dropdown menu.
#[derive(Debug)]
pub struct Menu {
    config: MenuConfig,
    panel: FloatingPanel,
    items: Vec<MenuItem>,
}

impl Menu {
    #[must_use]
    pub fn new(config: MenuConfig, items: Vec<MenuItem>) -> Self {
        Self {
            panel: FloatingPanel::new(config.panel_config()),
            config,
            items,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<MenuItem>) {
        self.items = items;
    }

    #[must_use]
    pub const fn panel(&self) -> &FloatingPanel {
        &self.panel
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    /// Corner the menu is painted at, once positioned.
    #[must_use]
    pub fn corner(&self) -> Option<Corner> {
        self.panel
            .position()
            .map(|p| Corner::from_placement(p.placement))
    }

    /// Corner guessed from the estimated size, before the first measurement.
    fn seed(&self, measure: &impl Measure) -> Option<fpanel_layout::Placement> {
        let trigger = measure.trigger_rect()?;
        let (corner, _) = compute_corner(&CornerRequest {
            trigger,
            panel: self.config.estimated_size,
            viewport: measure.viewport(),
            current: None,
            margin: self.config.margin,
            gap: self.config.gap,
        });
        tracing::trace!(%corner, "menu corner seeded from estimate");
        Some(corner.placement())
    }

    /// Trigger pressed.
    pub fn toggle(
        &mut self,
        host: &mut impl ListenerHost,
        measure: &impl Measure,
        now: Instant,
    ) -> Vec<MenuEvent> {
        if self.panel.is_open() {
            return lift(self.panel.close(CloseCause::Programmatic));
        }
        let seed = self.seed(measure);
        lift(self.panel.open_with_seed(host, now, seed))
    }

    /// Controlled `open` prop changed.
    pub fn set_open(
        &mut self,
        open: bool,
        host: &mut impl ListenerHost,
        measure: &impl Measure,
        now: Instant,
    ) -> Vec<MenuEvent> {
        let seed = if open { self.seed(measure) } else { None };
        lift(self.panel.set_open(open, host, now, seed))
    }

    /// Activate the item at `index`.
    ///
    /// Disabled items and closed menus produce no events.
    ///
    /// # Errors
    ///
    /// [`PanelError::NoSuchItem`] if `index` is out of range.
    pub fn activate(&mut self, index: usize) -> Result<Vec<MenuEvent>, PanelError> {
        let item = self.items.get(index).ok_or(PanelError::NoSuchItem {
            index,
            len: self.items.len(),
        })?;
        if item.disabled || !self.panel.is_open() {
            return Ok(Vec::new());
        }
        tracing::debug!(id = %item.id, "menu item selected");
        let mut events = vec![MenuEvent::Selected(item.id.clone())];
        events.extend(lift(self.panel.close(CloseCause::ItemSelected)));
        Ok(events)
    }

    pub fn handle_event(
        &mut self,
        event: &Event,
        measure: &impl Measure,
        now: Instant,
    ) -> Vec<MenuEvent> {
        lift(self.panel.handle_event(event, measure, now))
    }

    pub fn on_frame(&mut self, measure: &impl Measure, now: Instant) -> Vec<MenuEvent> {
        lift(self.panel.on_frame(measure, now))
    }
}
