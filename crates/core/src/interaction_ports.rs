//! Port interfaces for user interaction and page navigation
//!
//! A web view would back these with `window.confirm`, `alert`, `prompt` and
//! `window.location.href`; the terminal shell backs them with stdin/stdout.

/// Modal interaction with the user
pub trait Interaction: Send + Sync {
    /// Ask a yes/no question. `false` means declined.
    fn confirm(&self, message: &str) -> bool;

    /// Show a message the user must acknowledge.
    fn alert(&self, message: &str);

    /// Ask for a line of text. `None` means the prompt was cancelled.
    fn prompt(&self, message: &str) -> Option<String>;
}

/// Full-page navigation to an external URL
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}
