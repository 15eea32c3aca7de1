use super::*;
use crate::reveal::{Degraded, Full};
use crate::scroll::Viewport;
use crate::theme::MemoryStore;
use std::collections::HashMap;

#[derive(Default)]
struct FakeLayout {
    viewport: Viewport,
    header: Option<f64>,
    sections: Vec<f64>,
    elements: HashMap<String, f64>,
}

impl Layout for FakeLayout {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn header_height(&self) -> Option<f64> {
        self.header
    }

    fn section_tops(&self) -> Vec<f64> {
        self.sections.clone()
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.elements.get(id).copied()
    }
}

fn layout() -> FakeLayout {
    FakeLayout {
        viewport: Viewport { scroll_y: 0.0, width: 1280.0, height: 800.0, document_height: 4000.0 },
        header: Some(64.0),
        sections: vec![0.0, 900.0, 1800.0],
        elements: HashMap::from([("about".to_owned(), 900.0), ("contact-me".to_owned(), 2400.0)]),
    }
}

fn roles() -> PageRoles {
    PageRoles {
        theme_button: true,
        nav_toggle: true,
        nav_list: true,
        overlay: true,
        progress_bar: true,
        scroll_top: true,
        send_button: true,
        toast_stack: true,
        contact_link: true,
        nav_links: vec![Some("#home".to_owned()), Some("#about".to_owned()), Some("/resume.pdf".to_owned())],
        sections: vec!["home".to_owned(), "about".to_owned(), "contact-me".to_owned()],
        reveal_count: 2,
        field_keys: vec!["name".to_owned(), "email".to_owned(), "message".to_owned()],
    }
}

fn core_with(roles: PageRoles, store: MemoryStore) -> PageCore {
    PageCore::new(PageConfig::default(), roles, Box::new(store), &Full::default())
}

fn core() -> PageCore {
    core_with(roles(), MemoryStore::new())
}

fn values(name: &str, email: &str, message: &str) -> Vec<String> {
    vec![name.to_owned(), email.to_owned(), message.to_owned()]
}

fn submit(values: Vec<String>) -> PageEvent {
    PageEvent::SubmitClick { values, pointer: RipplePointer::default(), now_ms: 1000.0 }
}

fn toasts(actions: &[Action]) -> Vec<Toast> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::ShowToast { toast, .. } => Some(toast.clone()),
            _ => None,
        })
        .collect()
}

fn has_class(actions: &[Action], target: Target, class: &str, on: bool) -> bool {
    actions.iter().any(|a| {
        matches!(a, Action::SetClass { target: t, class: c, on: o } if *t == target && *c == class && *o == on)
    })
}

// =============================================================
// Startup
// =============================================================

#[test]
fn start_applies_dark_theme_by_default() {
    let mut page = core();
    let actions = page.start(&layout());
    assert!(has_class(&actions, Target::Body, "light-theme", false));
    assert!(actions.contains(&Action::SetText { target: Target::ThemeButton, text: "Light" }));
    assert!(actions.contains(&Action::SetAttribute { target: Target::ThemeButton, name: "aria-pressed", value: "false" }));
}

#[test]
fn start_applies_stored_light_theme() {
    let mut page = core_with(roles(), MemoryStore::with_entry("theme", "light"));
    let actions = page.start(&layout());
    assert!(has_class(&actions, Target::Body, "light-theme", true));
    assert!(actions.contains(&Action::SetAttribute {
        target: Target::ThemeButton,
        name: "aria-label",
        value: "Switch to dark theme",
    }));
}

#[test]
fn start_without_theme_button_leaves_theme_alone() {
    let mut page = core_with(PageRoles { theme_button: false, ..roles() }, MemoryStore::with_entry("theme", "light"));
    let actions = page.start(&layout());
    assert!(!actions.iter().any(|a| matches!(a, Action::SetClass { target: Target::Body, .. })));
}

#[test]
fn start_observes_reveal_elements() {
    let mut page = core();
    let actions = page.start(&layout());
    assert!(has_class(&actions, Target::Reveal(0), "reveal", true));
    assert!(actions.contains(&Action::Observe(0)));
    assert!(actions.contains(&Action::Observe(1)));
    assert!(!has_class(&actions, Target::Reveal(0), "is-visible", true));
}

#[test]
fn start_degraded_reveals_immediately() {
    let mut page = PageCore::new(PageConfig::default(), roles(), Box::new(MemoryStore::new()), &Degraded::default());
    let actions = page.start(&layout());
    assert!(has_class(&actions, Target::Reveal(1), "reveal", true));
    assert!(has_class(&actions, Target::Reveal(1), "is-visible", true));
    assert!(!actions.iter().any(|a| matches!(a, Action::Observe(_))));
}

#[test]
fn start_runs_initial_telemetry() {
    let mut page = core();
    let actions = page.start(&layout());
    assert!(actions.contains(&Action::SetStyle {
        target: Target::ProgressBar,
        property: "transform",
        value: "scaleX(0)".to_owned(),
    }));
    assert!(has_class(&actions, Target::NavLink(0), "is-active", true));
    assert!(has_class(&actions, Target::ScrollTop, "is-visible", false));
}

// =============================================================
// Theme
// =============================================================

#[test]
fn toggle_theme_twice_round_trips() {
    let mut page = core_with(roles(), MemoryStore::with_entry("theme", "dark"));
    page.start(&layout());
    let first = page.handle(PageEvent::ThemeToggle, &layout());
    assert!(has_class(&first, Target::Body, "light-theme", true));
    assert_eq!(page.theme.stored().as_deref(), Some("light"));
    let second = page.handle(PageEvent::ThemeToggle, &layout());
    assert!(has_class(&second, Target::Body, "light-theme", false));
    assert_eq!(page.theme.stored().as_deref(), Some("dark"));
}

// =============================================================
// Scroll telemetry
// =============================================================

#[test]
fn scroll_bursts_request_one_frame() {
    let mut page = core();
    let l = layout();
    assert_eq!(page.handle(PageEvent::Scroll, &l), vec![Action::RequestFrame]);
    assert!(page.handle(PageEvent::Scroll, &l).is_empty());
    assert!(page.handle(PageEvent::Scroll, &l).is_empty());
    page.handle(PageEvent::Frame, &l);
    assert_eq!(page.handle(PageEvent::Scroll, &l), vec![Action::RequestFrame]);
}

#[test]
fn frame_highlights_section_under_header() {
    let mut page = core();
    let mut l = layout();
    // 820 + 64 header + 20 lookahead = 904 >= 900.
    l.viewport.scroll_y = 820.0;
    let actions = page.handle(PageEvent::Frame, &l);
    assert!(has_class(&actions, Target::NavLink(0), "is-active", false));
    assert!(has_class(&actions, Target::NavLink(1), "is-active", true));
    assert!(has_class(&actions, Target::NavLink(2), "is-active", false));
    assert!(has_class(&actions, Target::ScrollTop, "is-visible", true));
}

#[test]
fn telemetry_uses_header_fallback() {
    let page = core();
    let mut l = layout();
    l.header = None;
    // 825 + 60 + 20 = 905.
    l.viewport.scroll_y = 825.0;
    assert_eq!(page.telemetry(&l).active_links, vec![false, true, false]);
    l.viewport.scroll_y = 815.0;
    assert_eq!(page.telemetry(&l).active_links, vec![true, false, false]);
}

#[test]
fn telemetry_without_sections_marks_nothing() {
    let page = core_with(PageRoles { sections: Vec::new(), ..roles() }, MemoryStore::new());
    let mut l = layout();
    l.sections.clear();
    assert_eq!(page.telemetry(&l).active_links, vec![false, false, false]);
}

#[test]
fn at_most_one_link_active() {
    let page = core();
    let mut l = layout();
    for scroll_y in [0.0, 500.0, 900.0, 1750.0, 3200.0] {
        l.viewport.scroll_y = scroll_y;
        let active = page.telemetry(&l).active_links.iter().filter(|a| **a).count();
        // The contact section has no nav link.
        assert!(active <= 1, "scroll {scroll_y}");
    }
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn home_link_scrolls_to_top() {
    let mut page = core();
    let actions = page.handle(PageEvent::NavLinkClick { index: 0 }, &layout());
    assert_eq!(actions[0], Action::PreventDefault);
    assert_eq!(actions[1], Action::ScrollTo { top: 0.0, mode: ScrollMode::Smooth });
}

#[test]
fn section_link_scrolls_below_header() {
    let mut page = core();
    let mut l = layout();
    l.viewport.scroll_y = 100.0;
    let actions = page.handle(PageEvent::NavLinkClick { index: 1 }, &l);
    // 900 + 100 - 64 - 20
    assert!(actions.contains(&Action::ScrollTo { top: 916.0, mode: ScrollMode::Smooth }));
}

#[test]
fn mobile_viewport_uses_smaller_padding() {
    let page = core();
    let mut l = layout();
    l.viewport.width = 768.0;
    assert_eq!(page.scroll_offset_for("about", &l), Some(900.0 - 64.0 - 10.0));
}

#[test]
fn missing_target_is_silently_ignored() {
    let mut page = core_with(
        PageRoles { nav_links: vec![Some("#nowhere".to_owned())], ..roles() },
        MemoryStore::new(),
    );
    let actions = page.handle(PageEvent::NavLinkClick { index: 0 }, &layout());
    assert_eq!(actions, vec![Action::PreventDefault]);
}

#[test]
fn external_link_keeps_default_navigation() {
    let mut page = core();
    let actions = page.handle(PageEvent::NavLinkClick { index: 2 }, &layout());
    assert!(!actions.contains(&Action::PreventDefault));
    assert!(!actions.iter().any(|a| matches!(a, Action::ScrollTo { .. })));
}

#[test]
fn reduced_motion_scrolls_instantly() {
    let mut page = PageCore::new(
        PageConfig::default(),
        roles(),
        Box::new(MemoryStore::new()),
        &Full { reduced_motion: true },
    );
    let actions = page.handle(PageEvent::ScrollTopClick, &layout());
    assert_eq!(actions, vec![Action::ScrollTo { top: 0.0, mode: ScrollMode::Instant }]);
}

#[test]
fn contact_link_scrolls_to_contact_section() {
    let mut page = core();
    let actions = page.handle(PageEvent::ContactLinkClick, &layout());
    assert_eq!(actions[0], Action::PreventDefault);
    assert_eq!(actions[1], Action::ScrollTo { top: 2400.0 - 64.0 - 20.0, mode: ScrollMode::Smooth });
}

// =============================================================
// Drawer
// =============================================================

#[test]
fn nav_toggle_opens_drawer_with_all_facets() {
    let mut page = core();
    let actions = page.handle(PageEvent::NavToggleClick, &layout());
    assert_eq!(actions[0], Action::StopPropagation);
    assert!(has_class(&actions, Target::NavList, "open", true));
    assert!(has_class(&actions, Target::Overlay, "active", true));
    assert!(actions.contains(&Action::SetAttribute { target: Target::NavToggle, name: "aria-expanded", value: "true" }));
    assert!(actions.contains(&Action::SetStyle { target: Target::Body, property: "overflow", value: "hidden".to_owned() }));
}

#[test]
fn overlay_click_closes_and_restores_scroll() {
    let mut page = core();
    page.handle(PageEvent::NavToggleClick, &layout());
    let actions = page.handle(PageEvent::OverlayClick, &layout());
    assert!(has_class(&actions, Target::NavList, "open", false));
    assert!(actions.contains(&Action::SetStyle { target: Target::Body, property: "overflow", value: String::new() }));
    assert!(!page.drawer.is_open());
}

#[test]
fn escape_closes_only_when_open() {
    let mut page = core();
    assert!(page.handle(PageEvent::KeyDown { key: "Escape".to_owned() }, &layout()).is_empty());
    page.handle(PageEvent::NavToggleClick, &layout());
    assert!(page.handle(PageEvent::KeyDown { key: "Enter".to_owned() }, &layout()).is_empty());
    assert!(!page.handle(PageEvent::KeyDown { key: "Escape".to_owned() }, &layout()).is_empty());
    assert!(!page.drawer.is_open());
}

#[test]
fn resize_past_breakpoint_closes_drawer() {
    let mut page = core();
    page.handle(PageEvent::NavToggleClick, &layout());
    page.handle(PageEvent::Resize { width: 1200.0 }, &layout());
    assert!(!page.drawer.is_open());
}

#[test]
fn nav_click_closes_open_drawer() {
    let mut page = core();
    page.handle(PageEvent::NavToggleClick, &layout());
    let actions = page.handle(PageEvent::NavLinkClick { index: 2 }, &layout());
    assert!(has_class(&actions, Target::NavList, "open", false));
    assert!(!page.drawer.is_open());
}

#[test]
fn drawer_without_overlay_skips_overlay_facet() {
    let mut page = core_with(PageRoles { overlay: false, ..roles() }, MemoryStore::new());
    let actions = page.handle(PageEvent::NavToggleClick, &layout());
    assert!(!actions.iter().any(|a| matches!(a, Action::SetClass { target: Target::Overlay, .. })));
    assert!(page.drawer.is_open());
}

#[test]
fn drawer_needs_toggle_and_list() {
    let mut page = core_with(PageRoles { nav_list: false, ..roles() }, MemoryStore::new());
    page.handle(PageEvent::NavToggleClick, &layout());
    assert!(!page.drawer.is_open());
}

// =============================================================
// Document readiness
// =============================================================

#[test]
fn startup_waits_only_while_document_is_loading() {
    assert!(waits_for_dom("loading"));
    assert!(!waits_for_dom("interactive"));
    assert!(!waits_for_dom("complete"));
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn intersection_reveals_and_unobserves_once() {
    let mut page = core();
    page.start(&layout());
    let event = PageEvent::Intersection { index: 1, is_intersecting: true };
    let actions = page.handle(event.clone(), &layout());
    assert_eq!(actions, vec![
        Action::SetClass { target: Target::Reveal(1), class: "is-visible", on: true },
        Action::Unobserve(1),
    ]);
    assert!(page.handle(event, &layout()).is_empty());
}

#[test]
fn first_intersecting_entry_reveals_element_that_never_fills_threshold() {
    // A reveal block taller than the viewport only ever reports a small
    // ratio; the entry delivered on observe() is enough to show it.
    let mut page = core();
    page.start(&layout());
    let actions = page.handle(PageEvent::Intersection { index: 0, is_intersecting: true }, &layout());
    assert!(actions.contains(&Action::SetClass { target: Target::Reveal(0), class: "is-visible", on: true }));
    assert_eq!(page.reveal.state(0), Some(crate::reveal::RevealState::Visible));
}

// =============================================================
// Contact form
// =============================================================

#[test]
fn invalid_submit_shows_error_toasts_and_keeps_inputs() {
    let mut page = core();
    let actions = page.handle(submit(values("", "", "")), &layout());
    assert_eq!(actions[0], Action::PreventDefault);
    assert!(matches!(actions[1], Action::SpawnRipple(_)));
    assert_eq!(toasts(&actions), vec![Toast::error("Please fill out all fields.")]);
    assert!(!actions.contains(&Action::ClearFields));
}

#[test]
fn valid_submit_greets_and_clears() {
    let mut page = core();
    let actions = page.handle(submit(values("Ada", "ada@example.com", "I would like to talk")), &layout());
    assert_eq!(toasts(&actions), vec![Toast::success("Hello Ada! Your message has been sent!")]);
    assert!(actions.contains(&Action::ClearFields));
}

#[test]
fn greeting_field_is_configurable() {
    let config = PageConfig { greeting_field: "email".to_owned(), ..PageConfig::default() };
    let mut page = PageCore::new(config, roles(), Box::new(MemoryStore::new()), &Full::default());
    let actions = page.handle(submit(values("Ada", "ada@example.com", "I would like to talk")), &layout());
    assert_eq!(toasts(&actions), vec![Toast::success("Hello ada@example.com! Your message has been sent!")]);
}

#[test]
fn toast_schedules_both_removal_paths() {
    let mut page = core();
    let actions = page.handle(submit(values("", "", "")), &layout());
    assert!(actions.contains(&Action::ScheduleToastWake { at_ms: 5200.0 }));
    assert!(actions.contains(&Action::ScheduleToastWake { at_ms: 5600.0 }));
}

#[test]
fn missing_toast_stack_falls_back_to_alert() {
    let mut page = core_with(PageRoles { toast_stack: false, ..roles() }, MemoryStore::new());
    let actions = page.handle(submit(values("Ada", "nope", "I would like to talk")), &layout());
    assert!(actions.contains(&Action::Alert("Please enter a valid email address.".to_owned())));
    assert!(toasts(&actions).is_empty());
    assert!(page.toasts.is_empty());
}

#[test]
fn enter_moves_focus_except_in_last_field() {
    let mut page = core();
    let actions = page.handle(PageEvent::FieldKeyDown { index: 0, key: "Enter".to_owned() }, &layout());
    assert_eq!(actions, vec![Action::PreventDefault, Action::Focus(1)]);
    assert!(page.handle(PageEvent::FieldKeyDown { index: 2, key: "Enter".to_owned() }, &layout()).is_empty());
}

#[test]
fn toast_timer_hides_then_removes() {
    let mut page = core();
    let shown = page.handle(submit(values("", "", "")), &layout());
    let Some(Action::ShowToast { id, .. }) = shown.iter().find(|a| matches!(a, Action::ShowToast { .. })).cloned() else {
        panic!("expected a toast");
    };
    assert_eq!(page.handle(PageEvent::ToastTimer { now_ms: 5200.0 }, &layout()), vec![Action::HideToast(id)]);
    assert_eq!(page.handle(PageEvent::ToastExitEnd { id }, &layout()), vec![Action::RemoveToast(id)]);
    assert!(page.handle(PageEvent::ToastTimer { now_ms: 5600.0 }, &layout()).is_empty());
}
