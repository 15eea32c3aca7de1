//! Scroll telemetry: progress ratio, active section, scroll-top visibility.
//!
//! DESIGN
//! ======
//! All three signals are pure functions of a [`Viewport`] snapshot plus the
//! section offsets, so the host measures once per animation frame and the
//! core decides. [`FrameGate`] coalesces bursts of scroll events into a
//! single pending frame.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Geometry snapshot for one telemetry pass, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
    pub document_height: f64,
}

/// Read-only layout queries the core needs from the host.
pub trait Layout {
    /// Current scroll position and viewport/document dimensions.
    fn viewport(&self) -> Viewport;

    /// Rendered height of the fixed header, if the header exists.
    fn header_height(&self) -> Option<f64>;

    /// Document-relative top offset of each tracked section, in document order.
    fn section_tops(&self) -> Vec<f64>;

    /// Viewport-relative top of the element with `id`, if it exists.
    fn element_top(&self, id: &str) -> Option<f64>;
}

/// Fraction of the scrollable distance covered, clamped to `[0, 1]`.
///
/// Content no taller than the viewport reports 0.
#[must_use]
pub fn progress_ratio(viewport: &Viewport) -> f64 {
    let scrollable = viewport.document_height - viewport.height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (viewport.scroll_y / scrollable).clamp(0.0, 1.0)
}

/// CSS transform for the progress indicator.
#[must_use]
pub fn progress_transform(ratio: f64) -> String {
    format!("scaleX({ratio})")
}

/// Header height, falling back when the header is missing or collapsed.
#[must_use]
pub fn effective_header_height(measured: Option<f64>, fallback: f64) -> f64 {
    match measured {
        Some(h) if h > 0.0 => h,
        _ => fallback,
    }
}

/// Index of the active section.
///
/// The active section is the last one whose top is at or above `probe`
/// (scroll position plus header compensation and lookahead). The first
/// section wins when none qualifies. `None` only when there are no sections.
#[must_use]
pub fn active_section(section_tops: &[f64], probe: f64) -> Option<usize> {
    if section_tops.is_empty() {
        return None;
    }
    Some(section_tops.iter().rposition(|top| probe >= *top).unwrap_or(0))
}

/// Strip the leading `#` from an in-page link. Other hrefs are not targets.
#[must_use]
pub fn link_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Whether the scroll-to-top button should be shown.
#[must_use]
pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Derived UI state for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Telemetry {
    pub progress: f64,
    /// Active flag per nav link, aligned with the link list.
    pub active_links: Vec<bool>,
    pub scroll_top_visible: bool,
}

/// At most one pending animation-frame update at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    /// Claim the next frame. Returns `true` when the caller should schedule one.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// The scheduled update ran (or could not be scheduled).
    pub fn release(&mut self) {
        self.ticking = false;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.ticking
    }
}
