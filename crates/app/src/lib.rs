//! # BizHub App
//!
//! Terminal application layer - shell, commands and main entry point.
//!
//! This crate contains:
//! - Shell commands (terminal → services bridge)
//! - Application context (dependency injection)
//! - View state, controlled forms and terminal adapters
//! - Command-line parsing and rendering
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod cli;
pub mod commands;
pub mod context;
pub mod render;
pub mod shell;
pub mod utils;

// Re-export for convenience
pub use cli::Cli;
pub use context::*;
