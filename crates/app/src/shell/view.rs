use bizhub_core::SessionState;
use bizhub_domain::{Client, Project, TeamMember};
use parking_lot::RwLock;
use tracing::debug;

/// Every screen the shell can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
    Clients,
    Projects,
    Team,
    Payments,
    Integrations,
    Profile,
    AddClient,
    EditClient(String),
    AddProject,
    EditProject(String),
    AddTeamMember,
    EditTeamMember(String),
    RequestPayment,
}

impl View {
    /// List view a form returns to after a successful submit.
    pub fn parent(&self) -> Option<Self> {
        match self {
            Self::AddClient | Self::EditClient(_) => Some(Self::Clients),
            Self::AddProject | Self::EditProject(_) => Some(Self::Projects),
            Self::AddTeamMember | Self::EditTeamMember(_) => Some(Self::Team),
            Self::RequestPayment => Some(Self::Payments),
            _ => None,
        }
    }

    pub fn is_form(&self) -> bool {
        self.parent().is_some()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Dashboard => "Dashboard",
            Self::Clients => "Clients",
            Self::Projects => "Projects",
            Self::Team => "Team",
            Self::Payments => "Payments",
            Self::Integrations => "Integrations",
            Self::Profile => "Profile",
            Self::AddClient => "Add Client",
            Self::EditClient(_) => "Edit Client",
            Self::AddProject => "Add Project",
            Self::EditProject(_) => "Edit Project",
            Self::AddTeamMember => "Add Team Member",
            Self::EditTeamMember(_) => "Edit Team Member",
            Self::RequestPayment => "Request Payment",
        }
    }
}

/// Form views belonging to an editable collection
pub trait FormViews {
    fn list_view() -> View;
    fn add_view() -> View;
    fn edit_view(id: &str) -> View;
}

impl FormViews for Client {
    fn list_view() -> View {
        View::Clients
    }

    fn add_view() -> View {
        View::AddClient
    }

    fn edit_view(id: &str) -> View {
        View::EditClient(id.to_string())
    }
}

impl FormViews for Project {
    fn list_view() -> View {
        View::Projects
    }

    fn add_view() -> View {
        View::AddProject
    }

    fn edit_view(id: &str) -> View {
        View::EditProject(id.to_string())
    }
}

impl FormViews for TeamMember {
    fn list_view() -> View {
        View::Team
    }

    fn add_view() -> View {
        View::AddTeamMember
    }

    fn edit_view(id: &str) -> View {
        View::EditTeamMember(id.to_string())
    }
}

/// View-state machine
///
/// The requested view is only rendered for an authenticated session;
/// anything else renders [`View::Login`].
#[derive(Debug)]
pub struct Shell {
    requested: RwLock<View>,
}

impl Default for Shell {
    fn default() -> Self {
        Self { requested: RwLock::new(View::Dashboard) }
    }
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, view: View) {
        debug!(view = view.title(), "open view");
        *self.requested.write() = view;
    }

    /// Close a form after a successful submit.
    pub fn close_form(&self) {
        let mut requested = self.requested.write();
        if let Some(parent) = requested.parent() {
            *requested = parent;
        }
    }

    pub fn requested(&self) -> View {
        self.requested.read().clone()
    }

    /// What to draw for the given session.
    pub fn render(&self, session: &SessionState) -> View {
        match session {
            SessionState::Authenticated(_) => self.requested(),
            SessionState::Loading | SessionState::Unauthenticated => View::Login,
        }
    }
}
