//! `localStorage` backed session storage.

use gloo_storage::{LocalStorage, Storage};
use shared::session::{KeyValueStore, SessionStore};
use tracing::warn;

/// [`KeyValueStore`] over the origin's `localStorage`.
///
/// Values are stored raw (not JSON encoded) so they stay readable by other
/// tabs and by tooling that inspects storage directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            warn!(key, error = ?err, "localStorage write failed");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = LocalStorage::raw().remove_item(key) {
            warn!(key, error = ?err, "localStorage delete failed");
        }
    }
}

/// Session store used by every page.
pub fn session() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}
