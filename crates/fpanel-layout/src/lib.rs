#![forbid(unsafe_code)]

//! Placement solver for floating panels.
//!
//! # Role in fpanel
//! `fpanel-layout` is pure geometry: given measurements it decides where a
//! floating panel goes. It never touches the host, never holds state between
//! calls, and never fails. State (what is currently placed, whether the panel
//! is visible) lives in `fpanel-widgets`.
//!
//! # Modules
//! - [`placement`]: side/alignment resolution with flip and stability rules.
//! - [`corner`]: the four-corner variant used by dropdown menus.
//! - [`arrow`]: arrow decoration geometry for a resolved placement.

pub mod arrow;
pub mod corner;
pub mod placement;

pub use arrow::{ArrowLayout, ArrowStyle, Edges, arrow_layout};
pub use corner::{Corner, CornerRequest, compute_corner};
pub use fpanel_core::geometry::{Offset, Rect, Size, Viewport};
pub use placement::{
    Align, AlignPolicy, Placement, PlacementRequest, Position, Side, Spaces, XAlign, YAlign,
    compute_placement, placement_offset,
};
