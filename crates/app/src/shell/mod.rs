//! Terminal shell: view state, controlled forms and the terminal adapters
//! for the core interaction ports

mod form;
mod surfaces;
mod terminal;
mod view;

pub use form::FormState;
pub use surfaces::{DocumentSurface, LocationNavigator};
pub use terminal::TerminalInteraction;
pub use view::{FormViews, Shell, View};
