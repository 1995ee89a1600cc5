//! In-memory key-value store and theme surface

use std::collections::HashMap;

use bizhub_core::{KeyValueStore, ThemeSurface};
use bizhub_domain::{Result, Theme};
use parking_lot::Mutex;

#[derive(Default)]
pub struct MockStore {
    values: Mutex<HashMap<String, String>>,
}

impl MockStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.lock().insert(key.to_string(), value.to_string());
        store
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }
}

impl KeyValueStore for MockStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.lock().remove(key);
        Ok(())
    }
}

/// Records every theme applied to the document
#[derive(Default)]
pub struct RecordingSurface {
    applied: Mutex<Vec<Theme>>,
}

impl RecordingSurface {
    pub fn applied(&self) -> Vec<Theme> {
        self.applied.lock().clone()
    }
}

impl ThemeSurface for RecordingSurface {
    fn apply(&self, theme: Theme) {
        self.applied.lock().push(theme);
    }
}
