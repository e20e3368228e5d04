#![forbid(unsafe_code)]

//! Outside-interaction and Escape handling.
//!
//! A floating panel closes when the user presses a pointer button somewhere
//! that is neither the trigger nor the panel, or presses Escape. Presses on
//! the trigger are left to the trigger's own toggle; presses inside the panel
//! belong to the panel's content (a menu item runs its handler first and may
//! then request a close on its own).

use fpanel_core::event::Event;
use fpanel_core::geometry::Rect;

/// Why a panel closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseCause {
    /// Pointer pressed outside both trigger and panel.
    OutsideClick,
    /// Escape pressed while open.
    Escape,
    /// Closed by the application (close button, controlled prop, toggle).
    Programmatic,
    /// A menu item was activated.
    ItemSelected,
}

impl CloseCause {
    /// Lowercase name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutsideClick => "outside-click",
            Self::Escape => "escape",
            Self::Programmatic => "programmatic",
            Self::ItemSelected => "item-selected",
        }
    }
}

/// Where a pointer landed relative to a panel and its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitZone {
    Trigger,
    Panel,
    Outside,
}

/// Classify a point. The panel wins where the two overlap.
#[must_use]
pub fn hit_zone(x: f32, y: f32, trigger: Option<Rect>, panel: Option<Rect>) -> HitZone {
    if panel.is_some_and(|r| r.contains(x, y)) {
        HitZone::Panel
    } else if trigger.is_some_and(|r| r.contains(x, y)) {
        HitZone::Trigger
    } else {
        HitZone::Outside
    }
}

/// Which interactions dismiss a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissPolicy {
    pub on_outside_click: bool,
    pub on_escape: bool,
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self {
            on_outside_click: true,
            on_escape: true,
        }
    }
}

impl DismissPolicy {
    /// Decide whether `event` should close an open panel.
    ///
    /// `trigger` and `panel` are the current on-screen rectangles; a `None`
    /// panel (still measuring) only protects the trigger.
    #[must_use]
    pub fn classify(
        &self,
        event: &Event,
        trigger: Option<Rect>,
        panel: Option<Rect>,
    ) -> Option<CloseCause> {
        match event {
            Event::Key(key) if self.on_escape && key.is_escape_press() => Some(CloseCause::Escape),
            Event::Pointer(pointer) if self.on_outside_click && pointer.is_down() => {
                match hit_zone(pointer.x, pointer.y, trigger, panel) {
                    HitZone::Outside => Some(CloseCause::OutsideClick),
                    HitZone::Trigger | HitZone::Panel => None,
                }
            }
            _ => None,
        }
    }

    /// Host event streams this policy needs.
    #[must_use]
    pub fn interest(&self) -> crate::host::Interest {
        use crate::host::Interest;
        let mut interest = Interest::empty();
        if self.on_escape {
            interest |= Interest::KEYDOWN;
        }
        if self.on_outside_click {
            interest |= Interest::POINTER_DOWN;
        }
        interest
    }
}
