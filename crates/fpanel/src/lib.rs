#![forbid(unsafe_code)]

//! fpanel public facade crate.
//!
//! Re-exports the types most hosts need from the internal crates and offers
//! a prelude. A host typically:
//!
//! 1. implements [`Measure`] and [`ListenerHost`] over its UI runtime,
//! 2. owns one [`Popover`] or [`Menu`] per trigger,
//! 3. forwards events with `handle_event` and calls `on_frame` once per
//!    animation frame,
//! 4. paints whatever the returned state says.
//!
//! ```
//! use fpanel::prelude::*;
//! use web_time::Instant;
//!
//! let now = Instant::now();
//! let snap = Snapshot::new(
//!     Rect::new(10.0, 10.0, 40.0, 20.0),
//!     Size::new(250.0, 300.0),
//!     Viewport::new(800.0, 600.0),
//! );
//!
//! let mut popover = Popover::new(PopoverConfig::default());
//! popover.toggle(&mut NoopListeners, now);
//! popover.on_frame(&snap, now);
//!
//! let frame = popover.content()?;
//! assert_eq!(frame.transform, "translate(0px, 25px)");
//! # Ok::<(), fpanel::Error>(())
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use fpanel_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, PointerButton, PointerEvent, PointerEventKind,
};
pub use fpanel_core::geometry::{Offset, Rect, Size, Viewport};
pub use fpanel_core::logging::{LOG_ENV, LogFormat};
#[cfg(feature = "tracing-subscriber")]
pub use fpanel_core::logging::init_tracing;

// --- Layout re-exports -----------------------------------------------------

pub use fpanel_layout::{
    Align, AlignPolicy, ArrowLayout, ArrowStyle, Corner, Edges, Placement, PlacementRequest,
    Position, Side, compute_corner, compute_placement,
};

// --- Widget re-exports -----------------------------------------------------

pub use fpanel_widgets::{
    CloseCause, ConfigError, FloatingConfig, FloatingPanel, Interest, ListenerHost, Measure, Menu,
    MenuConfig, MenuEvent, MenuItem, NoopListeners, OpenMode, PanelConfig, PanelError, PanelEvent,
    PanelPhase, Popover, PopoverConfig, PopoverFrame, Snapshot, Subscription, TabIndicator,
    TabIndicatorConfig,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for fpanel hosts.
#[derive(Debug)]
pub enum Error {
    /// A panel part was misused.
    Panel(PanelError),
    /// Configuration could not be loaded or was invalid.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panel(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Panel(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<PanelError> for Error {
    fn from(err: PanelError) -> Self {
        Self::Panel(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for fpanel APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CloseCause, Error, Event, FloatingConfig, ListenerHost, Measure, Menu, MenuConfig,
        MenuEvent, MenuItem, NoopListeners, PanelEvent, Placement, Popover, PopoverConfig, Rect,
        Result, Side, Size, Snapshot, TabIndicator, Viewport,
    };

    pub use crate::{core, layout, widgets};
}

pub use fpanel_core as core;
pub use fpanel_layout as layout;
pub use fpanel_widgets as widgets;
