#![forbid(unsafe_code)]

//! Floating-panel widgets: popover, menu, and tab indicator.
//!
//! # Role in fpanel
//! `fpanel-widgets` is the thin stateful layer between the host and the
//! placement solver in `fpanel-layout`. Each widget owns its own state; none
//! share anything mutable.
//!
//! # Modules
//! - [`panel`]: the `Closed → Mounting → Positioned` lifecycle shared by all
//!   floating panels.
//! - [`popover`], [`menu`]: the two panel flavors.
//! - [`dismiss`]: outside-click and Escape rules.
//! - [`host`]: measurement and listener seams the host implements.
//! - [`tab_indicator`]: animated underline for tab lists.
//! - [`config`]: TOML/JSON loading (`config` feature).

pub mod config;
pub mod dismiss;
pub mod error;
pub mod host;
pub mod menu;
pub mod panel;
pub mod popover;
pub mod tab_indicator;

pub use config::FloatingConfig;
pub use dismiss::{CloseCause, DismissPolicy, HitZone, hit_zone};
pub use error::{ConfigError, PanelError};
pub use host::{Interest, ListenerHost, Measure, NoopListeners, Snapshot, Subscription};
pub use menu::{Menu, MenuConfig, MenuEvent, MenuItem};
pub use panel::{FloatingPanel, OpenMode, PanelConfig, PanelEvent, PanelPhase, Schedule};
pub use popover::{Popover, PopoverConfig, PopoverFrame};
pub use tab_indicator::{IndicatorGeometry, TabIndicator, TabIndicatorConfig};
