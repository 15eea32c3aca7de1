//! Shared constants for the page script.
//!
//! Numeric tunables here are the defaults for [`crate::config::PageConfig`];
//! class names and selectors form the DOM contract and are fixed.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Body class applied while the light theme is active.
pub const LIGHT_THEME_CLASS: &str = "light-theme";

// ── Geometry ────────────────────────────────────────────────────

/// Viewport width at or below which the mobile layout applies.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Scroll distance past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 420.0;

/// Header height used when the navbar element is missing or has no height.
pub const HEADER_FALLBACK_PX: f64 = 60.0;

/// Extra lookahead added to the scroll position when picking the active section.
pub const SECTION_LOOKAHEAD_PX: f64 = 20.0;

/// Gap left above a scroll target on desktop viewports.
pub const DESKTOP_PADDING_PX: f64 = 20.0;

/// Gap left above a scroll target on narrow viewports.
pub const MOBILE_PADDING_PX: f64 = 10.0;

// ── Toasts ──────────────────────────────────────────────────────

/// How long a toast stays visible before its exit transition starts.
pub const TOAST_VISIBLE_MS: f64 = 4200.0;

/// Grace period after hiding before a toast is removed unconditionally.
pub const TOAST_GRACE_MS: f64 = 400.0;

// ── Reveal ──────────────────────────────────────────────────────

/// Visible fraction at which a reveal element is shown.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Observer root margin; contracts the detection region by 80px at the bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -80px 0px";

// ── Form ────────────────────────────────────────────────────────

/// Minimum trimmed length of the contact message, in characters.
pub const MIN_MESSAGE_CHARS: usize = 12;

/// Field key validated as an email address.
pub const EMAIL_FIELD: &str = "email";

/// Field key validated for minimum length.
pub const MESSAGE_FIELD: &str = "message";

/// Keyboard key that advances focus between form fields.
pub const COMMIT_KEY: &str = "Enter";

/// Keyboard key that closes the mobile drawer.
pub const ESCAPE_KEY: &str = "Escape";

// ── Navigation ──────────────────────────────────────────────────

/// Link target that scrolls to the document top instead of an element.
pub const HOME_TARGET: &str = "home";

/// Section the contact shortcut link scrolls to.
pub const CONTACT_TARGET: &str = "contact-me";

// ── Class names ─────────────────────────────────────────────────

pub const ACTIVE_LINK_CLASS: &str = "is-active";
pub const VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_CLASS: &str = "reveal";
pub const DRAWER_OPEN_CLASS: &str = "open";
pub const OVERLAY_ACTIVE_CLASS: &str = "active";
pub const TOAST_HIDDEN_CLASS: &str = "is-hidden";
pub const RIPPLE_CLASS: &str = "button-ripple";
