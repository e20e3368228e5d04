#![forbid(unsafe_code)]

//! Pointer/arrow decoration for a placed panel.
//!
//! The arrow is a small square rotated 45°. It straddles the panel edge that
//! faces the trigger, pushed out by half its size so that one corner points
//! at the trigger. Only the two edges of the square that end up facing the
//! trigger carry a border; the other two blend into the panel.

use bitflags::bitflags;

use fpanel_core::geometry::{Rect, Size};

use crate::placement::{Align, Placement, Side};

/// Distance from the aligned panel edge to the arrow for edge alignments.
pub const DEFAULT_ARROW_INSET: f32 = 20.0;
/// Side length of the arrow square.
pub const DEFAULT_ARROW_SIZE: f32 = 8.0;

bitflags! {
    /// Edges of the (unrotated) arrow square that carry a border.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        const TOP    = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT   = 0b1000;
    }
}

/// Arrow dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArrowStyle {
    /// Side length of the square before rotation.
    pub size: f32,
    /// Distance from the aligned edge when the panel is not centered.
    pub inset: f32,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_ARROW_SIZE,
            inset: DEFAULT_ARROW_INSET,
        }
    }
}

impl ArrowStyle {
    /// Arrow of the given size with the default inset.
    #[must_use]
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}

/// Where to draw the arrow, in panel-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowLayout {
    /// Left of the unrotated square relative to the panel's left edge.
    pub x: f32,
    /// Top of the unrotated square relative to the panel's top edge.
    pub y: f32,
    pub size: f32,
    /// Bordered edges.
    pub borders: Edges,
}

impl ArrowLayout {
    /// The unrotated square in panel-local coordinates.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }
}

/// Edges of a 45°-rotated square that face the trigger on `side`.
#[must_use]
pub const fn facing_edges(side: Side) -> Edges {
    // Rotating clockwise maps top→upper-right, right→lower-right,
    // bottom→lower-left, left→upper-left.
    match side {
        Side::Bottom => Edges::TOP.union(Edges::LEFT),
        Side::Top => Edges::RIGHT.union(Edges::BOTTOM),
        Side::Right => Edges::LEFT.union(Edges::BOTTOM),
        Side::Left => Edges::TOP.union(Edges::RIGHT),
    }
}

/// Lay out the arrow for a panel of size `panel` placed at `placement`.
#[must_use]
pub fn arrow_layout(placement: Placement, panel: Size, style: ArrowStyle) -> ArrowLayout {
    let half = style.size / 2.0;

    let along = |extent: f32| -> f32 {
        let max = (extent - style.size).max(0.0);
        let raw = match placement.align {
            Align::Center => extent / 2.0 - half,
            Align::Start => style.inset,
            Align::End => extent - style.inset - style.size,
        };
        raw.clamp(0.0, max)
    };

    let (x, y) = match placement.side {
        Side::Bottom => (along(panel.width), -half),
        Side::Top => (along(panel.width), panel.height - half),
        Side::Right => (-half, along(panel.height)),
        Side::Left => (panel.width - half, along(panel.height)),
    };

    ArrowLayout {
        x,
        y,
        size: style.size,
        borders: facing_edges(placement.side),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_centered() {
        let layout = arrow_layout(
            Placement::new(Side::Bottom, Align::Center),
            Size::new(200.0, 100.0),
            ArrowStyle::default(),
        );
        assert_eq!(layout.x, 96.0);
        assert_eq!(layout.y, -4.0);
        assert_eq!(layout.borders, Edges::TOP | Edges::LEFT);
    }

    #[test]
    fn above_end_aligned() {
        let layout = arrow_layout(
            Placement::new(Side::Top, Align::End),
            Size::new(200.0, 100.0),
            ArrowStyle::default(),
        );
        assert_eq!(layout.x, 172.0);
        assert_eq!(layout.y, 96.0);
        assert_eq!(layout.borders, Edges::RIGHT | Edges::BOTTOM);
    }

    #[test]
    fn start_aligned_uses_inset() {
        let layout = arrow_layout(
            Placement::new(Side::Bottom, Align::Start),
            Size::new(200.0, 100.0),
            ArrowStyle::new(10.0),
        );
        assert_eq!(layout.x, 20.0);
        assert_eq!(layout.rect(), Rect::new(20.0, -5.0, 10.0, 10.0));
    }

    #[test]
    fn horizontal_sides_sit_on_vertical_edges() {
        let panel = Size::new(120.0, 60.0);
        let left = arrow_layout(Placement::new(Side::Left, Align::Center), panel, ArrowStyle::default());
        assert_eq!((left.x, left.y), (116.0, 26.0));
        assert_eq!(left.borders, Edges::TOP | Edges::RIGHT);

        let right = arrow_layout(Placement::new(Side::Right, Align::Center), panel, ArrowStyle::default());
        assert_eq!((right.x, right.y), (-4.0, 26.0));
        assert_eq!(right.borders, Edges::LEFT | Edges::BOTTOM);
    }

    #[test]
    fn inset_clamped_on_tiny_panel() {
        let layout = arrow_layout(
            Placement::new(Side::Bottom, Align::End),
            Size::new(24.0, 20.0),
            ArrowStyle::default(),
        );
        assert_eq!(layout.x, 0.0);
    }
}
