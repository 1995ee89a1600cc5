//! Key-value store implementations
//!
//! The terminal shell persists the theme preference and session token in a
//! small JSON file; tests use the in-memory store.

pub mod file;
pub mod memory;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
