//! Shell commands
//!
//! Each command is a thin wrapper over a core service, timed and logged
//! through [`execute_command`](crate::utils::command_helpers::execute_command).

mod dashboard;
mod integrations;
mod payments;
mod profile;
mod records;
mod session;
mod theme;

pub use dashboard::*;
pub use integrations::*;
pub use payments::*;
pub use profile::*;
pub use records::*;
pub use session::*;
pub use theme::*;
