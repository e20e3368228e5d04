#![forbid(unsafe_code)]

//! Canonical host events.
//!
//! The host UI runtime translates its native input (DOM events, windowing
//! system callbacks, terminal input) into these types before handing them to
//! a floating panel.
//!
//! # Design Notes
//!
//! - Pointer coordinates are viewport pixels, matching [`crate::geometry::Rect`]
//! - `KeyEventKind` defaults to `Press` when the host does not distinguish
//! - Scroll events carry no delta: any scroll at any ancestor level only means
//!   "the trigger may have moved"
//! - Panels react to Escape and pointer presses only, so every other key maps
//!   to [`KeyCode::Other`]

/// Canonical host event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A pointer (mouse, pen, touch) event.
    Pointer(PointerEvent),

    /// The viewport was resized.
    Resize {
        /// New viewport width in pixels.
        width: f32,
        /// New viewport height in pixels.
        height: f32,
    },

    /// Something scrolled: the window or any ancestor of the trigger.
    Scroll,

    /// The panel's own subtree changed after mount (children added, removed,
    /// or resized).
    Mutation,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event of Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether this is a press (or repeat) of Escape.
    #[must_use]
    pub const fn is_escape_press(&self) -> bool {
        matches!(self.code, KeyCode::Escape) && !matches!(self.kind, KeyEventKind::Release)
    }
}

/// Keys a floating panel tells apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Escape key.
    Escape,
    /// Any other key.
    Other,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,
    /// Key is being held (repeat event).
    Repeat,
    /// Key was released.
    Release,
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// X coordinate in viewport pixels.
    pub x: f32,

    /// Y coordinate in viewport pixels.
    pub y: f32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }

    /// Shorthand for a primary-button press.
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down(PointerButton::Primary), x, y)
    }

    /// Whether any button went down.
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self.kind, PointerEventKind::Down(_))
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed down.
    Down(PointerButton),
    /// Button released.
    Up(PointerButton),
    /// Pointer moved.
    Moved,
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (left mouse, touch contact).
    Primary,
    /// Secondary button (right mouse).
    Secondary,
    /// Auxiliary button (middle mouse).
    Auxiliary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_release_is_not_a_press() {
        assert!(KeyEvent::new(KeyCode::Escape).is_escape_press());
        assert!(
            KeyEvent::new(KeyCode::Escape)
                .with_kind(KeyEventKind::Repeat)
                .is_escape_press()
        );
        assert!(
            !KeyEvent::new(KeyCode::Escape)
                .with_kind(KeyEventKind::Release)
                .is_escape_press()
        );
        assert!(!KeyEvent::new(KeyCode::Other).is_escape_press());
    }

    #[test]
    fn any_button_counts_as_down() {
        assert!(PointerEvent::down(1.0, 2.0).is_down());
        let aux = PointerEvent::new(PointerEventKind::Down(PointerButton::Auxiliary), 0.0, 0.0);
        assert!(aux.is_down());
        let up = PointerEvent::new(PointerEventKind::Up(PointerButton::Primary), 0.0, 0.0);
        assert!(!up.is_down());
        assert!(!PointerEvent::new(PointerEventKind::Moved, 0.0, 0.0).is_down());
    }
}
