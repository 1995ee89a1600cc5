//! Auth endpoints

use std::sync::Arc;

use async_trait::async_trait;
use bizhub_core::AuthGateway;
use bizhub_domain::{AuthCodeExchange, AuthGrant, ProfileUpdate, Result, User};
use serde_json::Value;

use super::client::ApiClient;

const ME_PATH: &str = "/api/auth/me";
const CODE_EXCHANGE_PATH: &str = "/api/auth/google";

pub struct ApiAuthGateway {
    client: Arc<ApiClient>,
}

impl ApiAuthGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for ApiAuthGateway {
    async fn current_user(&self) -> Result<Option<User>> {
        Ok(self.client.get_optional(ME_PATH).await?)
    }

    async fn exchange_code(&self, code: &str) -> Result<AuthGrant> {
        let body = AuthCodeExchange { code: code.to_string() };
        Ok(self.client.post(CODE_EXCHANGE_PATH, &body).await?)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        let _: Value = self.client.put(ME_PATH, update).await?;
        Ok(())
    }
}
