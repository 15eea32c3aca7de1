//! Theme preference and toggle.
//!
//! The page ships dark by default. A single `localStorage` entry records
//! whether the visitor switched to light; anything other than the literal
//! `"light"` reads as dark.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

/// Visual theme variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored value. Absent or unrecognized values are dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        self == Self::Light
    }

    /// Toggle button text: names the theme the button switches to.
    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Light => "Dark",
            Self::Dark => "Light",
        }
    }

    #[must_use]
    pub fn aria_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }

    #[must_use]
    pub fn aria_pressed(self) -> &'static str {
        if self.is_light() { "true" } else { "false" }
    }
}

/// Durable per-origin key-value storage for the theme flag.
///
/// Reads and writes are best-effort: a store that cannot be reached reports
/// `None` and drops writes.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for native builds and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Owns the current theme and its persisted copy.
pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    key: String,
    current: Theme,
}

impl ThemeController {
    #[must_use]
    pub fn new(store: Box<dyn PreferenceStore>, key: &str) -> Self {
        Self { store, key: key.to_owned(), current: Theme::Dark }
    }

    /// Read the persisted preference and adopt it.
    pub fn load_preference(&mut self) -> Theme {
        let stored = self.store.get(&self.key);
        self.current = Theme::from_stored(stored.as_deref());
        log::debug!("theme: loaded {:?} (stored={stored:?})", self.current);
        self.current
    }

    /// Flip the theme and persist the result.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.set(&self.key, self.current.as_str());
        self.current
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// The raw persisted value, if any.
    #[must_use]
    pub fn stored(&self) -> Option<String> {
        self.store.get(&self.key)
    }
}
