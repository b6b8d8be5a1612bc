//! `localStorage`-backed preference store.

use web_sys::{Storage, Window};

use crate::error::FolioError;
use crate::store::{MemoryStore, PreferenceStore};

/// Writes through to `window.localStorage`, or to memory when the browser
/// denies storage access.
pub struct LocalStore {
    storage: Option<Storage>,
    fallback: MemoryStore,
}

impl LocalStore {
    #[must_use]
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage denied: {}", FolioError::from(e));
                None
            }
        };
        if storage.is_none() {
            log::info!("preferences will not persist across reloads");
        }
        Self { storage, fallback: MemoryStore::new() }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        let Some(storage) = &self.storage else {
            return self.fallback.load(key);
        };
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("localStorage read failed: {}", FolioError::from(e));
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), FolioError> {
        let Some(storage) = &self.storage else {
            return self.fallback.save(key, value);
        };
        storage
            .set_item(key, value)
            .map_err(|e| FolioError::Storage(FolioError::from(e).to_string()))
    }
}
