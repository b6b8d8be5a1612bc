//! Persistent key-value preference store.
//!
//! The page persists exactly one value (the theme). The trait keeps the theme
//! logic independent of `localStorage`, which may be missing or throw in
//! private browsing modes.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::FolioError;

/// A string-to-string store that survives page reloads.
pub trait PreferenceStore {
    /// Read `key`, or `None` if absent or unreadable.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Storage`] if the backing store rejects the write.
    fn save(&self, key: &str, value: &str) -> Result<(), FolioError>;
}

/// In-process store. Values last only as long as the page.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), FolioError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
