//! Profile service - partial update of the current user

use std::sync::Arc;

use bizhub_domain::{BizHubError, ProfileUpdate, Result, User};
use tracing::{info, warn};

use crate::session::SessionService;

pub struct ProfileService {
    session: Arc<SessionService>,
}

impl ProfileService {
    pub fn new(session: Arc<SessionService>) -> Self {
        Self { session }
    }

    /// Send the update, then re-read the user and replace it in the session.
    pub async fn update(&self, update: &ProfileUpdate) -> Result<User> {
        if !self.session.is_authenticated() {
            return Err(BizHubError::Auth("not signed in".into()));
        }
        if update.name.trim().is_empty() {
            return Err(BizHubError::InvalidInput("name is required".into()));
        }

        let gateway = self.session.gateway();
        gateway.update_profile(update).await.map_err(|err| {
            warn!(error = %err, "profile update failed");
            err
        })?;

        let user = gateway
            .current_user()
            .await?
            .ok_or_else(|| BizHubError::Auth("session ended during profile update".into()))?;
        info!(user_id = %user.id, "profile updated");
        self.session.set_user(user.clone());
        Ok(user)
    }

    pub fn current(&self) -> Option<User> {
        self.session.user()
    }
}
