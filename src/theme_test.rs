use super::*;

fn controller(store: MemoryStore) -> ThemeController {
    ThemeController::new(Box::new(store), "theme")
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn from_stored_only_accepts_literal_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
    assert_eq!(Theme::from_stored(None), Theme::Dark);
}

#[test]
fn affordances_name_the_other_theme() {
    assert_eq!(Theme::Light.button_label(), "Dark");
    assert_eq!(Theme::Light.aria_label(), "Switch to dark theme");
    assert_eq!(Theme::Light.aria_pressed(), "true");
    assert_eq!(Theme::Dark.button_label(), "Light");
    assert_eq!(Theme::Dark.aria_label(), "Switch to light theme");
    assert_eq!(Theme::Dark.aria_pressed(), "false");
}

#[test]
fn toggled_is_an_involution() {
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

// =============================================================
// ThemeController
// =============================================================

#[test]
fn load_preference_reads_light() {
    let mut theme = controller(MemoryStore::with_entry("theme", "light"));
    assert_eq!(theme.load_preference(), Theme::Light);
    assert_eq!(theme.current(), Theme::Light);
}

#[test]
fn load_preference_corrupt_value_is_dark() {
    let mut theme = controller(MemoryStore::with_entry("theme", "{\"x\":1}"));
    assert_eq!(theme.load_preference(), Theme::Dark);
}

#[test]
fn load_preference_does_not_write() {
    let mut theme = controller(MemoryStore::new());
    theme.load_preference();
    assert_eq!(theme.stored(), None);
}

#[test]
fn toggle_persists_new_value() {
    let mut theme = controller(MemoryStore::new());
    theme.load_preference();
    assert_eq!(theme.toggle(), Theme::Light);
    assert_eq!(theme.stored().as_deref(), Some("light"));
    assert_eq!(theme.toggle(), Theme::Dark);
    assert_eq!(theme.stored().as_deref(), Some("dark"));
}

#[test]
fn toggle_twice_restores_state_and_stored_value() {
    let mut theme = controller(MemoryStore::with_entry("theme", "light"));
    let before = theme.load_preference();
    let stored_before = theme.stored();
    theme.toggle();
    theme.toggle();
    assert_eq!(theme.current(), before);
    assert_eq!(theme.stored(), stored_before);
}

#[test]
fn custom_key_is_respected() {
    let mut theme = ThemeController::new(Box::new(MemoryStore::with_entry("site-theme", "light")), "site-theme");
    assert_eq!(theme.load_preference(), Theme::Light);
}
