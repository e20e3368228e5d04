#![forbid(unsafe_code)]

//! Error types.

use thiserror::Error;

/// Misuse of a floating panel's parts.
///
/// These indicate an integration bug (e.g. rendering a popover's content
/// while the popover is closed), not a runtime data condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PanelError {
    /// A part was requested while its container is closed.
    #[error("{part} must be used within an open {container}")]
    NotMounted {
        part: &'static str,
        container: &'static str,
    },

    /// A menu item index outside the item list.
    #[error("menu item {index} out of range (menu has {len} items)")]
    NoSuchItem { index: usize, len: usize },
}

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error.
    #[cfg(feature = "config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parse error.
    #[cfg(feature = "config")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// One or more values out of range.
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
