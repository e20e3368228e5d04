#![forbid(unsafe_code)]

//! Configuration-as-data for popovers, menus, and tab indicators.
//!
//! [`FloatingConfig`] groups every tunable in one struct that can be loaded
//! from TOML or JSON at startup (behind the `config` feature).
//!
//! # Loading
//!
//! ```toml
//! # fpanel.toml
//! [popover]
//! side = "top"
//! side_offset = 6.0
//! arrow_size = 10.0
//!
//! [menu]
//! debounce_ms = 80
//! ```
//!
//! ```rust,ignore
//! let config = FloatingConfig::from_toml_file("fpanel.toml")?;
//! let popover = Popover::new(config.to_popover_config());
//! ```
//!
//! # Defaults
//!
//! Every field defaults to the value the corresponding widget uses when
//! constructed with `Default`, so `FloatingConfig::default()` changes nothing.

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
use web_time::Duration;

use fpanel_core::geometry::Size;
use fpanel_layout::{ArrowStyle, Side};

use crate::error::ConfigError;
use crate::menu::MenuConfig;
use crate::panel::OpenMode;
use crate::popover::PopoverConfig;
use crate::tab_indicator::TabIndicatorConfig;

// ---------------------------------------------------------------------------
// Top-level FloatingConfig
// ---------------------------------------------------------------------------

/// All floating-panel tunables.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct FloatingConfig {
    pub popover: PopoverSection,
    pub menu: MenuSection,
    pub tabs: TabsSection,
}

impl FloatingConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Every out-of-range value, as readable messages.
    ///
    /// An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut non_negative = |name: &str, value: f32| {
            if !(value.is_finite() && value >= 0.0) {
                errors.push(format!("{name} must be >= 0, got {value}"));
            }
        };

        non_negative("popover.side_offset", self.popover.side_offset);
        non_negative("popover.margin", self.popover.margin);
        non_negative("popover.arrow_inset", self.popover.arrow_inset);
        non_negative("menu.gap", self.menu.gap);
        non_negative("menu.margin", self.menu.margin);

        if !(self.popover.arrow_size.is_finite() && self.popover.arrow_size > 0.0) {
            errors.push(format!(
                "popover.arrow_size must be > 0, got {}",
                self.popover.arrow_size
            ));
        }
        if !(self.menu.estimated_width > 0.0 && self.menu.estimated_height > 0.0) {
            errors.push(format!(
                "menu.estimated size must be positive, got {}x{}",
                self.menu.estimated_width, self.menu.estimated_height
            ));
        }
        if self.menu.debounce_ms == 0 {
            errors.push("menu.debounce_ms must be > 0".into());
        }
        errors
    }

    /// Like [`Self::validate`], as a `Result`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Validation`] listing every problem found.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            tracing::warn!(count = errors.len(), "rejecting floating config");
            Err(ConfigError::Validation(errors))
        }
    }

    #[must_use]
    pub fn to_popover_config(&self) -> PopoverConfig {
        let p = &self.popover;
        PopoverConfig {
            side: p.side,
            side_offset: p.side_offset,
            margin: p.margin,
            show_arrow: p.show_arrow,
            arrow: ArrowStyle {
                size: p.arrow_size,
                inset: p.arrow_inset,
            },
            close_on_outside_click: p.close_on_outside_click,
            close_on_escape: p.close_on_escape,
            mode: OpenMode::Uncontrolled,
        }
    }

    #[must_use]
    pub fn to_menu_config(&self) -> MenuConfig {
        let m = &self.menu;
        MenuConfig {
            gap: m.gap,
            margin: m.margin,
            estimated_size: Size::new(m.estimated_width, m.estimated_height),
            debounce: Duration::from_millis(m.debounce_ms),
            mount_delay: Duration::from_millis(m.mount_delay_ms),
            close_on_outside_click: m.close_on_outside_click,
            close_on_escape: m.close_on_escape,
            mode: OpenMode::Uncontrolled,
        }
    }

    #[must_use]
    pub fn to_tab_indicator_config(&self) -> TabIndicatorConfig {
        TabIndicatorConfig {
            transition: Duration::from_millis(self.tabs.transition_ms),
        }
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// `[popover]` section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct PopoverSection {
    pub side: Side,
    pub side_offset: f32,
    pub margin: f32,
    pub show_arrow: bool,
    pub arrow_size: f32,
    pub arrow_inset: f32,
    pub close_on_outside_click: bool,
    pub close_on_escape: bool,
}

impl Default for PopoverSection {
    fn default() -> Self {
        let d = PopoverConfig::default();
        Self {
            side: d.side,
            side_offset: d.side_offset,
            margin: d.margin,
            show_arrow: d.show_arrow,
            arrow_size: d.arrow.size,
            arrow_inset: d.arrow.inset,
            close_on_outside_click: d.close_on_outside_click,
            close_on_escape: d.close_on_escape,
        }
    }
}

/// `[menu]` section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct MenuSection {
    pub gap: f32,
    pub margin: f32,
    pub estimated_width: f32,
    pub estimated_height: f32,
    pub debounce_ms: u64,
    pub mount_delay_ms: u64,
    pub close_on_outside_click: bool,
    pub close_on_escape: bool,
}

impl Default for MenuSection {
    fn default() -> Self {
        let d = MenuConfig::default();
        Self {
            gap: d.gap,
            margin: d.margin,
            estimated_width: d.estimated_size.width,
            estimated_height: d.estimated_size.height,
            debounce_ms: millis(d.debounce),
            mount_delay_ms: millis(d.mount_delay),
            close_on_outside_click: d.close_on_outside_click,
            close_on_escape: d.close_on_escape,
        }
    }
}

/// `[tabs]` section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct TabsSection {
    pub transition_ms: u64,
}

impl Default for TabsSection {
    fn default() -> Self {
        Self {
            transition_ms: millis(TabIndicatorConfig::default().transition),
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_to_widget_configs() {
        let config = FloatingConfig::default();
        assert_eq!(config.to_popover_config(), PopoverConfig::default());
        assert_eq!(config.to_menu_config(), MenuConfig::default());
        assert_eq!(config.to_tab_indicator_config(), TabIndicatorConfig::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn validate_catches_negative_margin() {
        let mut config = FloatingConfig::default();
        config.popover.margin = -1.0;
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("popover.margin"));
    }

    #[test]
    fn validate_catches_zero_arrow() {
        let mut config = FloatingConfig::default();
        config.popover.arrow_size = 0.0;
        assert!(config.validate()[0].contains("arrow_size"));
    }

    #[test]
    fn validated_reports_every_problem() {
        let mut config = FloatingConfig::default();
        config.menu.debounce_ms = 0;
        config.menu.gap = f32::NAN;
        match config.validated() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[cfg(feature = "config")]
    #[test]
    fn partial_toml_keeps_defaults() {
        let config = FloatingConfig::from_toml_str(
            "[popover]\nside = \"top\"\narrow_size = 10.0\n\n[menu]\ndebounce_ms = 80\n",
        )
        .unwrap();
        assert_eq!(config.popover.side, Side::Top);
        assert_eq!(config.popover.arrow_size, 10.0);
        assert_eq!(config.popover.side_offset, 5.0);
        assert_eq!(config.to_menu_config().debounce, Duration::from_millis(80));
        assert_eq!(config.tabs, TabsSection::default());
    }

    #[cfg(feature = "config")]
    #[test]
    fn json_parse_error_is_reported() {
        let err = FloatingConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
