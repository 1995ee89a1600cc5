//! Entity list and form modules
//!
//! Every module keeps the last fetched collection and replaces it wholesale
//! on each list. Mutations never patch local state; they re-list.

pub mod cache;
pub mod ports;
pub mod service;

pub use cache::RecordCache;
pub use ports::{CollectionReader, EntityGateway};
pub use service::{EntityModule, ListModule, RemoveOutcome};
