//! Session service - bootstrap, login and logout

use std::sync::Arc;

use bizhub_domain::constants::SESSION_TOKEN_STORAGE_KEY;
use bizhub_domain::{BizHubError, Result, User};
use parking_lot::RwLock;
use tracing::{info, warn};

use super::ports::AuthGateway;
use crate::storage_ports::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Bootstrap has not completed yet.
    Loading,
    Unauthenticated,
    Authenticated(User),
}

pub struct SessionService {
    gateway: Arc<dyn AuthGateway>,
    store: Arc<dyn KeyValueStore>,
    state: RwLock<SessionState>,
}

impl SessionService {
    pub fn new(gateway: Arc<dyn AuthGateway>, store: Arc<dyn KeyValueStore>) -> Self {
        Self { gateway, store, state: RwLock::new(SessionState::Loading) }
    }

    /// Ask the backend who we are. Any failure leaves the session signed out.
    pub async fn bootstrap(&self) -> SessionState {
        let next = match self.gateway.current_user().await {
            Ok(Some(user)) => SessionState::Authenticated(user),
            Ok(None) => SessionState::Unauthenticated,
            Err(err) => {
                warn!(error = %err, "session bootstrap failed");
                SessionState::Unauthenticated
            }
        };
        *self.state.write() = next.clone();
        next
    }

    /// Exchange the code, persist the token and sign in.
    pub async fn login(&self, code: &str) -> Result<User> {
        let code = code.trim();
        if code.is_empty() {
            return Err(BizHubError::InvalidInput("authorization code is required".into()));
        }

        let grant = self.gateway.exchange_code(code).await.map_err(|err| {
            warn!(error = %err, "login failed");
            err
        })?;
        self.store.set(SESSION_TOKEN_STORAGE_KEY, &grant.token)?;
        info!(user_id = %grant.user.id, "signed in");

        self.set_user(grant.user.clone());
        Ok(grant.user)
    }

    /// Local only: forget the user and the stored token.
    pub fn logout(&self) -> Result<()> {
        self.store.remove(SESSION_TOKEN_STORAGE_KEY)?;
        *self.state.write() = SessionState::Unauthenticated;
        info!("signed out");
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        match &*self.state.read() {
            SessionState::Authenticated(user) => Some(user.clone()),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(*self.state.read(), SessionState::Authenticated(_))
    }

    pub(crate) fn set_user(&self, user: User) {
        *self.state.write() = SessionState::Authenticated(user);
    }

    pub(crate) fn gateway(&self) -> &Arc<dyn AuthGateway> {
        &self.gateway
    }
}
