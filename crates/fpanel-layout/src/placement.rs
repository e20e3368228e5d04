#![forbid(unsafe_code)]

//! Viewport-aware placement of a floating panel around its trigger.
//!
//! [`compute_placement`] takes the trigger's rectangle, the measured panel
//! size, a preferred side, and the viewport, and returns where the panel
//! goes: a resolved [`Placement`] plus the [`Offset`] of the panel's top-left
//! corner relative to the trigger's top-left corner.
//!
//! # Resolution order
//!
//! 1. **Primary axis** (the preferred side's axis). A side fits when the
//!    panel, pushed out by `side_offset`, stays inside the viewport minus
//!    `margin`. A still-fitting current side is kept; otherwise the
//!    preferred side, then its opposite. When neither fits, the side with
//!    strictly more raw space wins.
//! 2. **Cross axis**. Under [`AlignPolicy::PreferCenter`], `Center` wins
//!    whenever it fits. Otherwise a still-fitting current edge is kept, then
//!    the first fitting edge (`Start`, then `End`). When nothing fits, the
//!    candidate with the least overflow wins.
//! 3. **Offset** from the resolved placement.
//!
//! Keeping a valid current side and edge prevents oscillation when the
//! trigger sits near an edge and layout events fire in bursts. Centering is
//! re-evaluated on every computation, so a panel pushed to an edge returns to
//! center as soon as there is room again.
//!
//! # Example
//!
//! ```
//! use fpanel_core::geometry::{Rect, Size, Viewport};
//! use fpanel_layout::placement::{compute_placement, Align, PlacementRequest, Side};
//!
//! let request = PlacementRequest::new(
//!     Rect::new(10.0, 10.0, 40.0, 20.0),
//!     Size::new(250.0, 300.0),
//!     Viewport::new(800.0, 600.0),
//! )
//! .side(Side::Bottom);
//!
//! let position = compute_placement(&request);
//! assert_eq!(position.placement.side, Side::Bottom);
//! assert_eq!(position.placement.align, Align::Start);
//! assert_eq!(position.offset.dx, 0.0);
//! assert_eq!(position.offset.dy, 20.0);
//! ```

use std::fmt;

use fpanel_core::geometry::{Offset, Rect, Size, Viewport};

/// Side of the trigger the panel is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Above the trigger.
    Top,
    /// Below the trigger.
    #[default]
    Bottom,
    /// Left of the trigger.
    Left,
    /// Right of the trigger.
    Right,
}

impl Side {
    /// The side across the trigger.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Whether this side lies on the vertical axis (top/bottom).
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Alignment along the cross axis, relative to the trigger.
///
/// `Start` is the trigger's left edge for top/bottom placements and its top
/// edge for left/right placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    /// Flush with the trigger's start edge.
    Start,
    /// Centered on the trigger.
    #[default]
    Center,
    /// Flush with the trigger's end edge.
    End,
}

/// Which cross-axis alignments the solver may choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AlignPolicy {
    /// Center over the trigger when possible, else an edge.
    #[default]
    PreferCenter,
    /// Only edge alignments (dropdown menus).
    EdgesOnly,
}

impl AlignPolicy {
    const fn candidates(self) -> &'static [Align] {
        match self {
            Self::PreferCenter => &[Align::Center, Align::Start, Align::End],
            Self::EdgesOnly => &[Align::Start, Align::End],
        }
    }

    const fn prefers_center(self) -> bool {
        matches!(self, Self::PreferCenter)
    }
}

/// Horizontal component of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XAlign {
    /// Panel's left edge on the trigger's left edge, or left of the trigger.
    Left,
    /// Centered horizontally on the trigger.
    Center,
    /// Panel's right edge on the trigger's right edge, or right of the trigger.
    Right,
}

/// Vertical component of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YAlign {
    /// Above the trigger, or top edges aligned.
    Top,
    /// Below the trigger, or bottom edges aligned.
    Bottom,
    /// Centered vertically on the trigger.
    Center,
}

impl XAlign {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl YAlign {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Center => "center",
        }
    }
}

/// A resolved placement: which side of the trigger, aligned how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub side: Side,
    pub align: Align,
}

impl Placement {
    /// Create a placement.
    #[must_use]
    pub const fn new(side: Side, align: Align) -> Self {
        Self { side, align }
    }

    /// Placement assumed before anything has been measured.
    #[must_use]
    pub const fn initial(side: Side) -> Self {
        Self::new(side, Align::Center)
    }

    /// The placement as a pair of independent axis alignments.
    ///
    /// Top/bottom placements report their side on the vertical axis and
    /// their alignment on the horizontal one; left/right the other way round.
    #[must_use]
    pub const fn axes(self) -> (XAlign, YAlign) {
        match self.side {
            Side::Top | Side::Bottom => {
                let y = if matches!(self.side, Side::Top) {
                    YAlign::Top
                } else {
                    YAlign::Bottom
                };
                let x = match self.align {
                    Align::Start => XAlign::Left,
                    Align::Center => XAlign::Center,
                    Align::End => XAlign::Right,
                };
                (x, y)
            }
            Side::Left | Side::Right => {
                let x = if matches!(self.side, Side::Left) {
                    XAlign::Left
                } else {
                    XAlign::Right
                };
                let y = match self.align {
                    Align::Start => YAlign::Top,
                    Align::Center => YAlign::Center,
                    Align::End => YAlign::Bottom,
                };
                (x, y)
            }
        }
    }
}

impl fmt::Display for Placement {
    /// Formats as `"{y}-{x}"`, e.g. `bottom-left` or `center-right`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.axes();
        write!(f, "{}-{}", y.as_str(), x.as_str())
    }
}

/// Free space between the trigger and each viewport edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spaces {
    pub above: f32,
    pub below: f32,
    pub left: f32,
    pub right: f32,
}

impl Spaces {
    /// Measure the space around `trigger` inside `viewport`.
    #[must_use]
    pub fn around(trigger: Rect, viewport: Viewport) -> Self {
        Self {
            above: trigger.top(),
            below: viewport.height - trigger.bottom(),
            left: trigger.left(),
            right: viewport.width - trigger.right(),
        }
    }

    /// Space in the direction of `side`.
    #[must_use]
    pub const fn toward(&self, side: Side) -> f32 {
        match side {
            Side::Top => self.above,
            Side::Bottom => self.below,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Inputs to [`compute_placement`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest {
    /// Trigger bounds in viewport coordinates.
    pub trigger: Rect,
    /// Measured panel size.
    pub panel: Size,
    /// Preferred side.
    pub side: Side,
    /// Viewport dimensions.
    pub viewport: Viewport,
    /// Placement from the previous computation, if the panel is already placed.
    pub current: Option<Placement>,
    /// Minimum distance to keep from every viewport edge.
    pub margin: f32,
    /// Gap between trigger and panel along the primary axis.
    pub side_offset: f32,
    /// Which cross-axis alignments may be chosen.
    pub align_policy: AlignPolicy,
}

impl PlacementRequest {
    /// A request preferring the bottom side, with no margin or gap.
    #[must_use]
    pub fn new(trigger: Rect, panel: Size, viewport: Viewport) -> Self {
        Self {
            trigger,
            panel,
            side: Side::Bottom,
            viewport,
            current: None,
            margin: 0.0,
            side_offset: 0.0,
            align_policy: AlignPolicy::PreferCenter,
        }
    }

    /// Set the preferred side.
    #[must_use]
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Set the placement currently in effect.
    #[must_use]
    pub fn current(mut self, current: Option<Placement>) -> Self {
        self.current = current;
        self
    }

    /// Set the containment margin.
    #[must_use]
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the gap between trigger and panel.
    #[must_use]
    pub fn side_offset(mut self, side_offset: f32) -> Self {
        self.side_offset = side_offset;
        self
    }

    /// Set the cross-axis alignment policy.
    #[must_use]
    pub fn align_policy(mut self, policy: AlignPolicy) -> Self {
        self.align_policy = policy;
        self
    }

    /// Whether the panel placed on `side` stays inside the safe area on the
    /// primary axis.
    #[must_use]
    pub fn side_fits(&self, side: Side) -> bool {
        let (start, extent) = self.primary_span(side);
        let (low, high) = self.safe_bounds(side.is_vertical());
        start >= low && start + extent <= high
    }

    /// Whether `align` keeps the panel inside the safe area on the cross
    /// axis of `side`.
    #[must_use]
    pub fn align_fits(&self, side: Side, align: Align) -> bool {
        let (start, extent) = self.cross_span(side, align);
        let (low, high) = self.safe_bounds(!side.is_vertical());
        start >= low && start + extent <= high
    }

    /// Bounds of the viewport's safe area along one axis.
    fn safe_bounds(&self, vertical: bool) -> (f32, f32) {
        let safe = self.viewport.safe_area(self.margin);
        if vertical {
            (safe.top(), safe.bottom())
        } else {
            (safe.left(), safe.right())
        }
    }

    /// Panel start and extent along the primary axis.
    fn primary_span(&self, side: Side) -> (f32, f32) {
        let t = self.trigger;
        let p = self.panel;
        let gap = self.side_offset;
        match side {
            Side::Top => (t.top() - gap - p.height, p.height),
            Side::Bottom => (t.bottom() + gap, p.height),
            Side::Left => (t.left() - gap - p.width, p.width),
            Side::Right => (t.right() + gap, p.width),
        }
    }

    /// Panel start and extent along the cross axis.
    fn cross_span(&self, side: Side, align: Align) -> (f32, f32) {
        let t = self.trigger;
        let (t_start, t_extent, p_extent) = if side.is_vertical() {
            (t.left(), t.width, self.panel.width)
        } else {
            (t.top(), t.height, self.panel.height)
        };
        (t_start + cross_delta(align, t_extent, p_extent), p_extent)
    }

    fn cross_overflow(&self, side: Side, align: Align) -> f32 {
        let (start, extent) = self.cross_span(side, align);
        let (low, high) = self.safe_bounds(!side.is_vertical());
        (low - start).max(0.0) + (start + extent - high).max(0.0)
    }
}

/// A resolved placement and the panel translation that realizes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub placement: Placement,
    /// Panel top-left relative to trigger top-left.
    pub offset: Offset,
}

impl Position {
    /// The panel's rectangle in viewport coordinates.
    #[must_use]
    pub fn panel_rect(&self, trigger: Rect, panel: Size) -> Rect {
        Rect::from_origin_size(trigger.x, trigger.y, panel).translate(self.offset)
    }
}

/// Resolve where the panel goes.
///
/// Pure and total: every input produces a placement. When the panel cannot
/// fit on an axis, it goes where the most room is instead of failing.
#[must_use]
pub fn compute_placement(request: &PlacementRequest) -> Position {
    let side = resolve_side(request);
    let align = resolve_align(request, side);
    let placement = Placement::new(side, align);
    let offset = placement_offset(
        placement,
        request.trigger.size(),
        request.panel,
        request.side_offset,
    );

    #[cfg(feature = "tracing")]
    tracing::trace!(
        preferred = request.side.as_str(),
        resolved = %placement,
        dx = offset.dx,
        dy = offset.dy,
        kept = request.current == Some(placement),
        "placement resolved"
    );

    Position { placement, offset }
}

/// Translate a placement into the panel's offset from the trigger origin.
#[must_use]
pub fn placement_offset(placement: Placement, trigger: Size, panel: Size, side_offset: f32) -> Offset {
    let primary = match placement.side {
        Side::Top => -(panel.height + side_offset),
        Side::Bottom => trigger.height + side_offset,
        Side::Left => -(panel.width + side_offset),
        Side::Right => trigger.width + side_offset,
    };
    if placement.side.is_vertical() {
        Offset::new(cross_delta(placement.align, trigger.width, panel.width), primary)
    } else {
        Offset::new(primary, cross_delta(placement.align, trigger.height, panel.height))
    }
}

fn resolve_side(request: &PlacementRequest) -> Side {
    let preferred = request.side;

    if let Some(current) = request.current
        && current.side.is_vertical() == preferred.is_vertical()
        && request.side_fits(current.side)
    {
        return current.side;
    }

    if request.side_fits(preferred) {
        return preferred;
    }
    let opposite = preferred.opposite();
    if request.side_fits(opposite) {
        return opposite;
    }

    let spaces = Spaces::around(request.trigger, request.viewport);
    if spaces.toward(opposite) > spaces.toward(preferred) {
        opposite
    } else {
        preferred
    }
}

fn resolve_align(request: &PlacementRequest, side: Side) -> Align {
    let policy = request.align_policy;

    if policy.prefers_center() && request.align_fits(side, Align::Center) {
        return Align::Center;
    }

    if let Some(current) = request.current
        && current.side.is_vertical() == side.is_vertical()
        && current.align != Align::Center
        && request.align_fits(side, current.align)
    {
        return current.align;
    }

    let candidates = policy.candidates();
    if let Some(&align) = candidates.iter().find(|&&a| request.align_fits(side, a)) {
        return align;
    }

    let mut best = candidates[0];
    let mut best_overflow = request.cross_overflow(side, best);
    for &align in &candidates[1..] {
        let overflow = request.cross_overflow(side, align);
        if overflow < best_overflow {
            best = align;
            best_overflow = overflow;
        }
    }
    best
}

/// Cross-axis shift of the panel start relative to the trigger start.
fn cross_delta(align: Align, trigger_extent: f32, panel_extent: f32) -> f32 {
    match align {
        Align::Start => 0.0,
        Align::Center => (trigger_extent - panel_extent) / 2.0,
        Align::End => trigger_extent - panel_extent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn documented_scenario_bottom_left_aligned() {
        let req = PlacementRequest::new(
            Rect::new(10.0, 10.0, 40.0, 20.0),
            Size::new(250.0, 300.0),
            viewport(),
        )
        .margin(16.0)
        .side_offset(5.0);
        let pos = compute_placement(&req);
        assert_eq!(pos.placement, Placement::new(Side::Bottom, Align::Start));
        assert_eq!(pos.offset, Offset::new(0.0, 25.0));
        assert_eq!(pos.placement.to_string(), "bottom-left");
    }

    #[test]
    fn centered_when_room() {
        let req = PlacementRequest::new(
            Rect::new(380.0, 100.0, 40.0, 20.0),
            Size::new(100.0, 50.0),
            viewport(),
        );
        let pos = compute_placement(&req);
        assert_eq!(pos.placement, Placement::new(Side::Bottom, Align::Center));
        assert_eq!(pos.offset, Offset::new(-30.0, 20.0));
    }

    #[test]
    fn right_edge_aligns_end() {
        let req = PlacementRequest::new(
            Rect::new(760.0, 100.0, 40.0, 20.0),
            Size::new(200.0, 50.0),
            viewport(),
        );
        let pos = compute_placement(&req);
        assert_eq!(pos.placement.align, Align::End);
        assert_eq!(pos.offset.dx, -160.0);
        assert_eq!(pos.placement.to_string(), "bottom-right");
    }

    #[test]
    fn flips_to_top_when_below_is_short() {
        let req = PlacementRequest::new(
            Rect::new(300.0, 500.0, 40.0, 20.0),
            Size::new(100.0, 200.0),
            viewport(),
        )
        .side_offset(5.0);
        let pos = compute_placement(&req);
        assert_eq!(pos.placement.side, Side::Top);
        assert_eq!(pos.offset.dy, -205.0);
    }

    #[test]
    fn neither_side_fits_picks_more_space() {
        // 150 above, 430 below, panel 500 tall.
        let req = PlacementRequest::new(
            Rect::new(300.0, 150.0, 40.0, 20.0),
            Size::new(100.0, 500.0),
            viewport(),
        )
        .side(Side::Top);
        assert_eq!(compute_placement(&req).placement.side, Side::Bottom);
    }

    #[test]
    fn equal_space_keeps_preferred() {
        let req = PlacementRequest::new(
            Rect::new(300.0, 290.0, 40.0, 20.0),
            Size::new(100.0, 1000.0),
            viewport(),
        )
        .side(Side::Top);
        assert_eq!(compute_placement(&req).placement.side, Side::Top);
    }

    #[test]
    fn stability_keeps_current_side() {
        // Both sides fit; the panel is currently on top.
        let base = PlacementRequest::new(
            Rect::new(300.0, 300.0, 40.0, 20.0),
            Size::new(100.0, 100.0),
            viewport(),
        );
        let current = Some(Placement::new(Side::Top, Align::Center));
        let pos = compute_placement(&base.current(current));
        assert_eq!(pos.placement.side, Side::Top);
        assert_eq!(compute_placement(&base).placement.side, Side::Bottom);
    }

    #[test]
    fn recenters_once_center_fits_again() {
        let base = PlacementRequest::new(
            Rect::new(380.0, 100.0, 40.0, 20.0),
            Size::new(100.0, 50.0),
            viewport(),
        )
        .margin(16.0);
        let current = Some(Placement::new(Side::Bottom, Align::Start));
        let pos = compute_placement(&base.current(current));
        assert_eq!(pos.placement, Placement::new(Side::Bottom, Align::Center));
        assert_eq!(pos.offset.dx, -30.0);
    }

    #[test]
    fn edges_only_keeps_current_edge() {
        // Both edges fit; a fresh request takes Start.
        let base = PlacementRequest::new(
            Rect::new(380.0, 100.0, 40.0, 20.0),
            Size::new(100.0, 50.0),
            viewport(),
        )
        .align_policy(AlignPolicy::EdgesOnly);
        assert_eq!(compute_placement(&base).placement.align, Align::Start);

        let current = Some(Placement::new(Side::Bottom, Align::End));
        assert_eq!(compute_placement(&base.current(current)).placement.align, Align::End);
    }

    #[test]
    fn blocked_center_falls_back_to_fitting_edge() {
        // Center would start at 10, inside the 16px margin; only Start fits.
        let base = PlacementRequest::new(
            Rect::new(60.0, 100.0, 40.0, 20.0),
            Size::new(140.0, 50.0),
            viewport(),
        )
        .margin(16.0);
        assert!(!base.align_fits(Side::Bottom, Align::Center));
        let current = Some(Placement::new(Side::Bottom, Align::Center));
        assert_eq!(compute_placement(&base.current(current)).placement.align, Align::Start);
    }

    #[test]
    fn fit_respects_safe_area() {
        let req = PlacementRequest::new(
            Rect::new(300.0, 560.0, 40.0, 20.0),
            Size::new(100.0, 10.0),
            viewport(),
        )
        .margin(16.0)
        .side_offset(5.0);
        // Bottom would end at 595, past the 584 safe edge.
        assert!(!req.side_fits(Side::Bottom));
        assert!(req.side_fits(Side::Top));
    }

    #[test]
    fn stale_current_is_abandoned() {
        let base = PlacementRequest::new(
            Rect::new(300.0, 50.0, 40.0, 20.0),
            Size::new(100.0, 100.0),
            viewport(),
        );
        let current = Some(Placement::new(Side::Top, Align::Center));
        assert_eq!(compute_placement(&base.current(current)).placement.side, Side::Bottom);
    }

    #[test]
    fn current_on_other_axis_is_ignored() {
        let base = PlacementRequest::new(
            Rect::new(300.0, 300.0, 40.0, 20.0),
            Size::new(100.0, 100.0),
            viewport(),
        )
        .side(Side::Bottom);
        let current = Some(Placement::new(Side::Left, Align::Center));
        assert_eq!(compute_placement(&base.current(current)).placement.side, Side::Bottom);
    }

    #[test]
    fn horizontal_sides() {
        let trigger = Rect::new(300.0, 300.0, 40.0, 20.0);
        let req = PlacementRequest::new(trigger, Size::new(100.0, 60.0), viewport())
            .side(Side::Left)
            .side_offset(5.0);
        let pos = compute_placement(&req);
        assert_eq!(pos.placement, Placement::new(Side::Left, Align::Center));
        assert_eq!(pos.offset, Offset::new(-105.0, -20.0));
        assert_eq!(pos.placement.to_string(), "center-left");

        let right = compute_placement(&req.side(Side::Right));
        assert_eq!(right.offset, Offset::new(45.0, -20.0));
    }

    #[test]
    fn left_flips_to_right_near_edge() {
        let req = PlacementRequest::new(
            Rect::new(20.0, 300.0, 40.0, 20.0),
            Size::new(100.0, 60.0),
            viewport(),
        )
        .side(Side::Left);
        assert_eq!(compute_placement(&req).placement.side, Side::Right);
    }

    #[test]
    fn edges_only_never_centers() {
        let req = PlacementRequest::new(
            Rect::new(380.0, 100.0, 40.0, 20.0),
            Size::new(100.0, 50.0),
            viewport(),
        )
        .align_policy(AlignPolicy::EdgesOnly);
        let pos = compute_placement(&req);
        assert_eq!(pos.placement.align, Align::Start);

        let centered = Some(Placement::new(Side::Bottom, Align::Center));
        let pos = compute_placement(&req.current(centered));
        assert_ne!(pos.placement.align, Align::Center);
    }

    #[test]
    fn oversized_panel_picks_least_overflow() {
        let req = PlacementRequest::new(
            Rect::new(700.0, 100.0, 40.0, 20.0),
            Size::new(900.0, 50.0),
            viewport(),
        );
        // Start overflows by 800, center by 370, end by 160.
        assert_eq!(compute_placement(&req).placement.align, Align::End);
    }

    #[test]
    fn panel_rect_from_position() {
        let trigger = Rect::new(10.0, 10.0, 40.0, 20.0);
        let panel = Size::new(250.0, 300.0);
        let pos = compute_placement(&PlacementRequest::new(trigger, panel, viewport()));
        assert_eq!(pos.panel_rect(trigger, panel), Rect::new(10.0, 30.0, 250.0, 300.0));
    }

    #[test]
    fn axes_pairs() {
        assert_eq!(
            Placement::new(Side::Top, Align::End).axes(),
            (XAlign::Right, YAlign::Top)
        );
        assert_eq!(
            Placement::new(Side::Right, Align::Start).axes(),
            (XAlign::Right, YAlign::Top)
        );
        assert_eq!(Placement::initial(Side::Bottom).to_string(), "bottom-center");
    }

    #[test]
    fn spaces_around_trigger() {
        let s = Spaces::around(Rect::new(10.0, 10.0, 40.0, 20.0), viewport());
        assert_eq!(s.above, 10.0);
        assert_eq!(s.below, 570.0);
        assert_eq!(s.left, 10.0);
        assert_eq!(s.right, 750.0);
        assert_eq!(s.toward(Side::Right), 750.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn side_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Side::Top).unwrap(), "\"top\"");
        let policy: AlignPolicy = serde_json::from_str("\"edges-only\"").unwrap();
        assert_eq!(policy, AlignPolicy::EdgesOnly);
    }
}
