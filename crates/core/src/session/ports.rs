//! Port interfaces for the auth endpoints

use async_trait::async_trait;
use bizhub_domain::{AuthGrant, ProfileUpdate, Result, User};

#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Current user for the stored token; `None` when not signed in.
    async fn current_user(&self) -> Result<Option<User>>;

    /// Exchange an authorization code for a user and session token.
    async fn exchange_code(&self, code: &str) -> Result<AuthGrant>;

    /// Partially update the current user.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<()>;
}
