//! `localStorage` adapter for the theme preference.
//!
//! Reads and writes are best-effort. Private browsing modes and disabled
//! storage surface as `None` on read and a logged warning on write.

use web_sys::Storage;

use crate::theme::PreferenceStore;

pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    #[must_use]
    pub fn new(window: &web_sys::Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("storage: localStorage unavailable: {e:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("storage: read {key} failed: {e:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("storage: write {key} failed: {e:?}");
        }
    }
}
