#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are CSS-style pixels in viewport coordinates (origin at the
//! top-left of the viewport, y grows downward). Floating point is used
//! because panel offsets routinely go negative and centering halves odd
//! extents.

/// An axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the given origin with the given size.
    #[inline]
    pub const fn from_origin_size(x: f32, y: f32, size: Size) -> Self {
        Self::new(x, y, size.width, size.height)
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> f32 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> f32 {
        self.y
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Horizontal center.
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Vertical center.
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if a point is inside the rectangle (right/bottom exclusive).
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Return this rectangle moved by `offset`.
    #[inline]
    #[must_use]
    pub fn translate(&self, offset: Offset) -> Rect {
        Rect::new(self.x + offset.dx, self.y + offset.dy, self.width, self.height)
    }

    /// Shrink the rectangle by `margin` on every side.
    ///
    /// Extents never go below zero.
    #[must_use]
    pub fn inset(&self, margin: f32) -> Rect {
        Rect::new(
            self.x + margin,
            self.y + margin,
            (self.width - 2.0 * margin).max(0.0),
            (self.height - 2.0 * margin).max(0.0),
        )
    }
}

/// Width and height of a measured element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Current viewport (window) dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a new viewport.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The viewport as a rectangle anchored at the origin.
    #[inline]
    pub const fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// The region a panel may occupy once `margin` is reserved on each edge.
    #[inline]
    pub fn safe_area(&self, margin: f32) -> Rect {
        self.rect().inset(margin)
    }
}

/// A translation in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    /// Create a new offset.
    #[inline]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// CSS `transform` value for this offset.
    pub fn to_css_translate(&self) -> String {
        format!("translate({}px, {}px)", self.dx, self.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::{Offset, Rect, Size, Viewport};

    #[test]
    fn rect_edges() {
        let rect = Rect::new(10.0, 20.0, 40.0, 30.0);
        assert_eq!(rect.right(), 50.0);
        assert_eq!(rect.bottom(), 50.0);
        assert_eq!(rect.center_x(), 30.0);
        assert_eq!(rect.center_y(), 35.0);
        assert_eq!(rect.size(), Size::new(40.0, 30.0));
    }

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert!(rect.contains(2.0, 3.0));
        assert!(rect.contains(5.9, 7.9));
        assert!(!rect.contains(6.0, 3.0));
        assert!(!rect.contains(2.0, 8.0));
    }

    #[test]
    fn translate_moves_origin_only() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        let moved = rect.translate(Offset::new(-5.0, 15.0));
        assert_eq!(moved, Rect::new(5.0, 25.0, 20.0, 20.0));
        assert_eq!(moved.size(), rect.size());
    }

    #[test]
    fn safe_area_never_negative() {
        let safe = Viewport::new(20.0, 100.0).safe_area(16.0);
        assert_eq!(safe.x, 16.0);
        assert_eq!(safe.width, 0.0);
        assert_eq!(safe.height, 68.0);
        assert_eq!(safe.bottom(), 84.0);
    }

    #[test]
    fn css_translate() {
        assert_eq!(
            Offset::new(-95.0, 25.5).to_css_translate(),
            "translate(-95px, 25.5px)"
        );
    }
}
