//! Port interface for the browser-style key-value store
//!
//! Holds the theme preference and the session token. Values are plain
//! strings; callers own the encoding.

use bizhub_domain::Result;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
