use super::*;

// =============================================================
// Scroll targets
// =============================================================

#[test]
fn scroll_mode_respects_reduced_motion() {
    assert_eq!(ScrollMode::for_motion(true), ScrollMode::Instant);
    assert_eq!(ScrollMode::for_motion(false), ScrollMode::Smooth);
}

#[test]
fn target_padding_by_layout() {
    assert_eq!(target_padding(false, 20.0, 10.0), 20.0);
    assert_eq!(target_padding(true, 20.0, 10.0), 10.0);
}

#[test]
fn scroll_target_compensates_header_and_padding() {
    // Element 500px below the viewport top, page already scrolled 300px.
    assert_eq!(scroll_target(500.0, 300.0, 60.0, 20.0), 720.0);
}

#[test]
fn scroll_target_above_viewport() {
    assert_eq!(scroll_target(-200.0, 1000.0, 70.0, 10.0), 720.0);
}

// =============================================================
// NavIntent
// =============================================================

#[test]
fn intent_home_scrolls_to_top() {
    assert_eq!(NavIntent::from_href(Some("#home")), NavIntent::Top);
}

#[test]
fn intent_hash_targets_section() {
    assert_eq!(NavIntent::from_href(Some("#projects")), NavIntent::Section("projects".to_owned()));
}

#[test]
fn intent_external_links_pass_through() {
    assert_eq!(NavIntent::from_href(Some("/blog")), NavIntent::External);
    assert_eq!(NavIntent::from_href(None), NavIntent::External);
    assert!(!NavIntent::External.prevents_default());
    assert!(NavIntent::Top.prevents_default());
}

// =============================================================
// Drawer
// =============================================================

#[test]
fn drawer_starts_closed() {
    assert!(!Drawer::new(768.0).is_open());
}

#[test]
fn toggle_opens_then_closes() {
    let mut drawer = Drawer::new(768.0);
    assert_eq!(drawer.handle(DrawerEvent::ToggleButton), Some(DrawerFacets::for_state(true)));
    assert!(drawer.is_open());
    assert_eq!(drawer.handle(DrawerEvent::ToggleButton), Some(DrawerFacets::for_state(false)));
    assert!(!drawer.is_open());
}

#[test]
fn open_facets_lock_body_scroll() {
    let facets = DrawerFacets::for_state(true);
    assert!(facets.open_class && facets.aria_expanded && facets.overlay_active && facets.body_scroll_locked);
    let facets = DrawerFacets::for_state(false);
    assert!(!facets.open_class && !facets.aria_expanded && !facets.overlay_active && !facets.body_scroll_locked);
}

#[test]
fn close_events_close_an_open_drawer() {
    for event in [DrawerEvent::OverlayClick, DrawerEvent::EscapeKey, DrawerEvent::NavLinkClick] {
        let mut drawer = Drawer::new(768.0);
        drawer.handle(DrawerEvent::ToggleButton);
        assert_eq!(drawer.handle(event), Some(DrawerFacets::for_state(false)), "{event:?}");
        assert!(!drawer.is_open());
    }
}

#[test]
fn close_events_on_closed_drawer_do_nothing() {
    let mut drawer = Drawer::new(768.0);
    assert_eq!(drawer.handle(DrawerEvent::EscapeKey), None);
    assert_eq!(drawer.handle(DrawerEvent::OverlayClick), None);
    assert_eq!(drawer.handle(DrawerEvent::Resize { width: 1400.0 }), None);
}

#[test]
fn resize_past_breakpoint_closes() {
    let mut drawer = Drawer::new(768.0);
    drawer.handle(DrawerEvent::ToggleButton);
    assert_eq!(drawer.handle(DrawerEvent::Resize { width: 1024.0 }), Some(DrawerFacets::for_state(false)));
    assert!(!drawer.is_open());
}

#[test]
fn resize_within_mobile_keeps_drawer_open() {
    let mut drawer = Drawer::new(768.0);
    drawer.handle(DrawerEvent::ToggleButton);
    assert_eq!(drawer.handle(DrawerEvent::Resize { width: 768.0 }), None);
    assert_eq!(drawer.handle(DrawerEvent::Resize { width: 400.0 }), None);
    assert!(drawer.is_open());
}
