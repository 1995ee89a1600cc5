//! # BizHub Domain
//!
//! Business domain types and models for the BizHub client.
//!
//! This crate contains:
//! - Records exchanged with the backend (Client, Project, PaymentRecord, etc.)
//! - Controlled form records and their field tables
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other BizHub crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod forms;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use forms::{EditableResource, FieldKind, FieldSpec, FormFields, FormRecord};
pub use types::*;
