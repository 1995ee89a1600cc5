//! Port interfaces for REST collections

use async_trait::async_trait;
use bizhub_domain::{EditableResource, Result};

/// Read access to a collection
#[async_trait]
pub trait CollectionReader<R>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>>;

    async fn get(&self, id: &str) -> Result<R>;
}

/// Full CRUD over a collection whose records are edited through forms
#[async_trait]
pub trait EntityGateway<R: EditableResource>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>>;

    async fn get(&self, id: &str) -> Result<R>;

    /// Create from the submitted form; the server returns the stored record.
    async fn create(&self, form: &R::Form) -> Result<R>;

    async fn update(&self, id: &str, form: &R::Form) -> Result<()>;

    async fn delete(&self, id: &str) -> Result<()>;
}
