#![forbid(unsafe_code)]

//! Corner placements for dropdown menus.
//!
//! A menu drops below (or above) its trigger and hangs off one of the
//! trigger's corners. The four corners are the placements
//! [`compute_placement`] produces for a vertical side under
//! [`AlignPolicy::EdgesOnly`], so menus and popovers share one solver and
//! one stability rule.

use std::fmt;

use fpanel_core::geometry::{Rect, Size, Viewport};

use crate::placement::{
    Align, AlignPolicy, Placement, PlacementRequest, Position, Side, compute_placement,
};

/// Where a menu hangs relative to its trigger.
///
/// `BottomLeft` means below the trigger with the panel's left edge on the
/// trigger's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Corner {
    #[default]
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl Corner {
    /// The equivalent general placement.
    #[must_use]
    pub const fn placement(self) -> Placement {
        match self {
            Self::BottomLeft => Placement::new(Side::Bottom, Align::Start),
            Self::BottomRight => Placement::new(Side::Bottom, Align::End),
            Self::TopLeft => Placement::new(Side::Top, Align::Start),
            Self::TopRight => Placement::new(Side::Top, Align::End),
        }
    }

    /// Collapse a placement onto the nearest corner.
    ///
    /// Anything not above the trigger counts as below, and anything not
    /// end-aligned counts as left.
    #[must_use]
    pub const fn from_placement(placement: Placement) -> Self {
        let top = matches!(placement.side, Side::Top);
        let right = matches!(placement.align, Align::End);
        match (top, right) {
            (false, false) => Self::BottomLeft,
            (false, true) => Self::BottomRight,
            (true, false) => Self::TopLeft,
            (true, true) => Self::TopRight,
        }
    }

    /// Kebab-case name, e.g. `bottom-left`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for [`compute_corner`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerRequest {
    pub trigger: Rect,
    pub panel: Size,
    pub viewport: Viewport,
    pub current: Option<Corner>,
    pub margin: f32,
    pub gap: f32,
}

/// Resolve the corner a menu hangs from, preferring to drop below.
#[must_use]
pub fn compute_corner(request: &CornerRequest) -> (Corner, Position) {
    let general = PlacementRequest::new(request.trigger, request.panel, request.viewport)
        .side(Side::Bottom)
        .current(request.current.map(Corner::placement))
        .margin(request.margin)
        .side_offset(request.gap)
        .align_policy(AlignPolicy::EdgesOnly);
    let position = compute_placement(&general);
    (Corner::from_placement(position.placement), position)
}
