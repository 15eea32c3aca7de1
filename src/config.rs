//! Page tunables with an optional JSON override.
//!
//! DESIGN
//! ======
//! Every field defaults to the matching constant in [`crate::consts`], so an
//! empty object (or no config at all) reproduces the stock page behavior.
//! The browser host reads the override from a `data-page-config` attribute
//! on `<body>`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;

/// Placeholder replaced by the greeting field's value in the success toast.
pub const GREETING_PLACEHOLDER: &str = "{name}";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub storage_key: String,
    pub mobile_breakpoint_px: f64,
    pub scroll_top_threshold_px: f64,
    pub header_fallback_px: f64,
    pub section_lookahead_px: f64,
    pub desktop_padding_px: f64,
    pub mobile_padding_px: f64,
    pub toast_visible_ms: f64,
    pub toast_grace_ms: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub min_message_chars: usize,
    /// Form field whose value is greeted in the success toast.
    pub greeting_field: String,
    pub greeting_template: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            mobile_breakpoint_px: consts::MOBILE_BREAKPOINT_PX,
            scroll_top_threshold_px: consts::SCROLL_TOP_THRESHOLD_PX,
            header_fallback_px: consts::HEADER_FALLBACK_PX,
            section_lookahead_px: consts::SECTION_LOOKAHEAD_PX,
            desktop_padding_px: consts::DESKTOP_PADDING_PX,
            mobile_padding_px: consts::MOBILE_PADDING_PX,
            toast_visible_ms: consts::TOAST_VISIBLE_MS,
            toast_grace_ms: consts::TOAST_GRACE_MS,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            reveal_root_margin: consts::REVEAL_ROOT_MARGIN.to_owned(),
            min_message_chars: consts::MIN_MESSAGE_CHARS,
            greeting_field: "name".to_owned(),
            greeting_template: format!("Hello {GREETING_PLACEHOLDER}! Your message has been sent!"),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Render the success greeting for `value`.
    #[must_use]
    pub fn greeting(&self, value: &str) -> String {
        self.greeting_template.replace(GREETING_PLACEHOLDER, value)
    }

    /// Whether `viewport_width` uses the narrow layout.
    #[must_use]
    pub fn is_mobile(&self, viewport_width: f64) -> bool {
        viewport_width <= self.mobile_breakpoint_px
    }
}
