#![forbid(unsafe_code)]

//! Core: geometry, host events, and recompute scheduling.
//!
//! # Role in fpanel
//! `fpanel-core` is the boundary with the host UI runtime. The host measures
//! elements into [`geometry::Rect`]s, translates its native input into
//! [`event::Event`]s, and drives the schedulers here once per frame.
//!
//! # Primary responsibilities
//! - **Geometry**: viewport-space rectangles, sizes, offsets.
//! - **Event**: canonical key, pointer, resize, scroll, and mutation events.
//! - **Scheduling**: [`event_coalescer::EventCoalescer`] (one recompute per
//!   frame) and [`debounce::Debouncer`] (one recompute per quiet period).
//!
//! # How it fits in the system
//! `fpanel-layout` consumes the geometry types to solve placements, and
//! `fpanel-widgets` feeds events through the schedulers into the solver.

pub mod debounce;
pub mod event;
pub mod event_coalescer;
pub mod geometry;
pub mod logging;
