use bizhub_domain::{BizHubError, ProfileUpdate, Result as DomainResult, Theme, User};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Changes requested for the profile; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub profile_picture: Option<String>,
    pub theme: Option<Theme>,
}

pub fn show_profile(ctx: &AppContext) -> Option<User> {
    ctx.profile.current()
}

/// Merge the changes over the current user and save them.
pub async fn update_profile(ctx: &AppContext, changes: ProfileChanges) -> DomainResult<User> {
    execute_command("profile::update", || async {
        let user = ctx
            .profile
            .current()
            .ok_or_else(|| BizHubError::Auth("Not signed in".into()))?;

        let mut update = ProfileUpdate::from_user(&user);
        if let Some(name) = changes.name {
            update.name = name;
        }
        if let Some(picture) = changes.profile_picture {
            update.profile_picture = Some(picture);
        }
        if let Some(theme) = changes.theme {
            update.theme = Some(theme);
        }

        ctx.profile.update(&update).await
    })
    .await
}
