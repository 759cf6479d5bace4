//! localStorage-backed settings persistence.

use nowcast_core::config::SettingsStorage;

/// Per-origin localStorage as a [`SettingsStorage`]. Storage being blocked
/// (private mode, quota) degrades to in-memory defaults: reads come back
/// empty, writes are logged and dropped.
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

fn backing() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl SettingsStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        backing()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        match backing() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("Failed to persist '{key}'");
                }
            }
            None => log::warn!("localStorage unavailable, '{key}' not persisted"),
        }
    }
}
