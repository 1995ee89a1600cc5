//! REST collection gateways for clients, projects and team members

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use bizhub_core::EntityGateway;
use bizhub_domain::{EditableResource, Resource, Result};
use serde_json::Value;

use super::client::ApiClient;

/// `GET/POST {collection}`, `GET/PUT/DELETE {collection}/:id`
pub struct ApiEntityGateway<R> {
    client: Arc<ApiClient>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ApiEntityGateway<R> {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client, _resource: PhantomData }
    }
}

#[async_trait]
impl<R: EditableResource> EntityGateway<R> for ApiEntityGateway<R> {
    async fn list(&self) -> Result<Vec<R>> {
        Ok(self.client.get(R::COLLECTION_PATH).await?)
    }

    async fn get(&self, id: &str) -> Result<R> {
        Ok(self.client.get(&R::item_path(id)).await?)
    }

    async fn create(&self, form: &R::Form) -> Result<R> {
        Ok(self.client.post(R::COLLECTION_PATH, form).await?)
    }

    async fn update(&self, id: &str, form: &R::Form) -> Result<()> {
        // The server answers with a {"message": ...} acknowledgement
        let _: Value = self.client.put(&R::item_path(id), form).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let _: Value = self.client.delete(&R::item_path(id)).await?;
        Ok(())
    }
}
