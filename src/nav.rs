//! In-page navigation and the mobile drawer state machine.
//!
//! DESIGN
//! ======
//! The drawer owns a single `open` flag. Every transition produces a full
//! [`DrawerFacets`] snapshot so the host updates the list class, the toggle's
//! `aria-expanded`, the overlay, and the body scroll lock together. Events
//! that leave the state unchanged produce nothing.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts;
use crate::scroll::link_target;

/// How a programmatic scroll animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    /// Jump immediately (`behavior: auto`).
    Instant,
    Smooth,
}

impl ScrollMode {
    #[must_use]
    pub fn for_motion(prefers_reduced_motion: bool) -> Self {
        if prefers_reduced_motion { Self::Instant } else { Self::Smooth }
    }
}

/// Gap kept between the header and a scroll target.
#[must_use]
pub fn target_padding(is_mobile: bool, desktop_padding: f64, mobile_padding: f64) -> f64 {
    if is_mobile { mobile_padding } else { desktop_padding }
}

/// Document scroll offset that places an element just below the fixed header.
///
/// `element_top` is viewport-relative (`getBoundingClientRect().top`).
#[must_use]
pub fn scroll_target(element_top: f64, scroll_y: f64, header_height: f64, padding: f64) -> f64 {
    element_top + scroll_y - header_height - padding
}

/// What clicking a link should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavIntent {
    /// `#home`: scroll to the document top.
    Top,
    /// `#<id>`: scroll to the element with this id.
    Section(String),
    /// Not an in-page link; the browser navigates normally.
    External,
}

impl NavIntent {
    #[must_use]
    pub fn from_href(href: Option<&str>) -> Self {
        match href.and_then(link_target) {
            Some(consts::HOME_TARGET) => Self::Top,
            Some(id) => Self::Section(id.to_owned()),
            None => Self::External,
        }
    }

    /// In-page intents suppress the browser's default jump.
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Self::External)
    }
}

/// Inputs that can move the drawer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawerEvent {
    ToggleButton,
    OverlayClick,
    EscapeKey,
    NavLinkClick,
    Resize { width: f64 },
}

/// Observable drawer state, applied as a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawerFacets {
    /// `open` class on the nav list.
    pub open_class: bool,
    /// `aria-expanded` on the toggle button.
    pub aria_expanded: bool,
    /// `active` class on the overlay.
    pub overlay_active: bool,
    /// `overflow: hidden` on the body.
    pub body_scroll_locked: bool,
}

impl DrawerFacets {
    #[must_use]
    pub fn for_state(open: bool) -> Self {
        Self { open_class: open, aria_expanded: open, overlay_active: open, body_scroll_locked: open }
    }
}

/// Mobile navigation drawer.
#[derive(Clone, Copy, Debug)]
pub struct Drawer {
    open: bool,
    breakpoint: f64,
}

impl Drawer {
    #[must_use]
    pub fn new(breakpoint: f64) -> Self {
        Self { open: false, breakpoint }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply `event`. Returns the new facets when the state changed.
    pub fn handle(&mut self, event: DrawerEvent) -> Option<DrawerFacets> {
        let next = match event {
            DrawerEvent::ToggleButton => !self.open,
            DrawerEvent::OverlayClick | DrawerEvent::EscapeKey | DrawerEvent::NavLinkClick => false,
            DrawerEvent::Resize { width } if width > self.breakpoint => false,
            DrawerEvent::Resize { .. } => self.open,
        };
        if next == self.open {
            return None;
        }
        self.open = next;
        log::debug!("drawer: {event:?} -> {}", if next { "open" } else { "closed" });
        Some(DrawerFacets::for_state(next))
    }
}
