#![forbid(unsafe_code)]

//! The facade exposes enough to drive every widget end to end.

use fpanel::prelude::*;
use fpanel::{Corner, PanelError, TabIndicatorConfig};
use web_time::{Duration, Instant};

#[test]
fn popover_round_trip_through_prelude() {
    let now = Instant::now();
    let snap = Snapshot::new(
        Rect::new(600.0, 540.0, 60.0, 24.0),
        Size::new(220.0, 140.0),
        Viewport::new(800.0, 600.0),
    );
    let mut popover = Popover::new(PopoverConfig::default());
    popover.toggle(&mut NoopListeners, now);
    popover.on_frame(&snap, now);

    let frame = popover.content().unwrap();
    assert!(frame.visible);
    assert_eq!(frame.placement.as_deref(), Some("top-center"));
}

#[test]
fn menu_lands_on_a_corner() {
    let now = Instant::now();
    let snap = Snapshot::new(
        Rect::new(720.0, 100.0, 60.0, 24.0),
        Size::new(180.0, 120.0),
        Viewport::new(800.0, 600.0),
    );
    let mut menu = Menu::new(MenuConfig::default(), vec![MenuItem::new("open", "Open")]);
    menu.toggle(&mut NoopListeners, &snap, now);
    menu.on_frame(&snap, now + Duration::from_millis(10));
    assert_eq!(menu.corner(), Some(Corner::BottomRight));
}

#[test]
fn errors_convert_into_facade_error() {
    fn content_of_closed() -> fpanel::Result<()> {
        Popover::new(PopoverConfig::default()).content()?;
        Ok(())
    }
    let err = content_of_closed().unwrap_err();
    assert!(matches!(err, Error::Panel(PanelError::NotMounted { .. })));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn tab_indicator_via_facade() {
    let now = Instant::now();
    let mut tabs = TabIndicator::new(TabIndicatorConfig::default(), Rect::new(0.0, 0.0, 300.0, 32.0));
    tabs.register("a", Rect::new(0.0, 0.0, 100.0, 32.0), now);
    assert!(tabs.select("a", now));
    assert_eq!(tabs.geometry_at(now).map(|g| g.width), Some(100.0));
}
