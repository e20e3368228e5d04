#![forbid(unsafe_code)]

//! Sliding underline that tracks the active tab.
//!
//! Tabs register their measured rectangles by value. The indicator reports
//! the active tab's left offset (relative to the tab list) and width, and
//! animates between targets with a cubic ease-in-out.
//!
//! The first target after construction is shown immediately; later changes
//! animate from wherever the indicator currently is, so re-targeting in the
//! middle of a transition never jumps.

use ahash::AHashMap;
use web_time::{Duration, Instant};

use fpanel_core::geometry::Rect;

pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

/// Indicator configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabIndicatorConfig {
    pub transition: Duration,
}

impl Default for TabIndicatorConfig {
    fn default() -> Self {
        Self {
            transition: DEFAULT_TRANSITION,
        }
    }
}

/// Indicator position relative to the tab list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorGeometry {
    pub left: f32,
    pub width: f32,
}

impl IndicatorGeometry {
    fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            left: self.left + (to.left - self.left) * t,
            width: self.width + (to.width - self.width) * t,
        }
    }
}

/// Cubic ease-in-out over `t ∈ [0, 1]`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: IndicatorGeometry,
    to: IndicatorGeometry,
    start: Instant,
}

/// Tracks tab rectangles and animates the indicator to the active one.
#[derive(Debug, Clone)]
pub struct TabIndicator {
    config: TabIndicatorConfig,
    list: Rect,
    tabs: AHashMap<String, Rect>,
    active: Option<String>,
    transition: Option<Transition>,
}

impl TabIndicator {
    /// An indicator for a tab list at `list` (viewport coordinates).
    #[must_use]
    pub fn new(config: TabIndicatorConfig, list: Rect) -> Self {
        Self {
            config,
            list,
            tabs: AHashMap::new(),
            active: None,
            transition: None,
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Register or re-measure a tab.
    ///
    /// Re-measuring the active tab re-targets the indicator.
    pub fn register(&mut self, value: impl Into<String>, rect: Rect, now: Instant) {
        let value = value.into();
        let is_active = self.active.as_deref() == Some(value.as_str());
        self.tabs.insert(value, rect);
        if is_active {
            self.retarget(now);
        }
    }

    /// Forget a tab. Removing the active tab leaves the indicator where it is.
    pub fn unregister(&mut self, value: &str) {
        self.tabs.remove(value);
    }

    /// The tab list moved or resized.
    pub fn set_list(&mut self, list: Rect, now: Instant) {
        self.list = list;
        self.retarget(now);
    }

    /// Make `value` the active tab. Unknown values are ignored.
    ///
    /// Returns whether the active tab changed.
    pub fn select(&mut self, value: &str, now: Instant) -> bool {
        if !self.tabs.contains_key(value) {
            tracing::trace!(value, "ignoring unknown tab");
            return false;
        }
        if self.active.as_deref() == Some(value) {
            return false;
        }
        self.active = Some(value.to_owned());
        self.retarget(now);
        true
    }

    /// Where the active tab is, ignoring animation.
    #[must_use]
    pub fn target(&self) -> Option<IndicatorGeometry> {
        let rect = self.tabs.get(self.active.as_deref()?)?;
        Some(IndicatorGeometry {
            left: rect.x - self.list.x,
            width: rect.width,
        })
    }

    /// Indicator geometry to paint at `now`.
    #[must_use]
    pub fn geometry_at(&self, now: Instant) -> Option<IndicatorGeometry> {
        let transition = self.transition?;
        let duration = self.config.transition.as_secs_f32();
        let progress = if duration <= 0.0 {
            1.0
        } else {
            now.saturating_duration_since(transition.start).as_secs_f32() / duration
        };
        Some(transition.from.lerp(transition.to, ease_in_out(progress)))
    }

    /// Whether a transition is still running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_some_and(|t| {
            t.from != t.to && now.saturating_duration_since(t.start) < self.config.transition
        })
    }

    fn retarget(&mut self, now: Instant) {
        let Some(to) = self.target() else {
            return;
        };
        let from = self.geometry_at(now).unwrap_or(to);
        self.transition = Some(Transition {
            from,
            to,
            start: now,
        });
    }
}
