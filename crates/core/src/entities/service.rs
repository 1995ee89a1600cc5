//! Entity services - list, create, update and remove with full re-fetch

use std::sync::Arc;

use bizhub_domain::{EditableResource, Resource, Result};
use tracing::{info, warn};

use super::cache::RecordCache;
use super::ports::{CollectionReader, EntityGateway};
use crate::interaction_ports::Interaction;

/// Result of a confirm-gated removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The user declined; nothing was sent.
    Declined,
}

/// Read-only collection module (payments)
pub struct ListModule<R: Resource> {
    reader: Arc<dyn CollectionReader<R>>,
    cache: RecordCache<R>,
}

impl<R: Resource> ListModule<R> {
    pub fn new(reader: Arc<dyn CollectionReader<R>>) -> Self {
        Self { reader, cache: RecordCache::new() }
    }

    pub async fn list(&self) -> Result<Vec<R>> {
        self.cache.refresh(self.reader.list()).await
    }

    pub async fn get(&self, id: &str) -> Result<R> {
        self.reader.get(id).await
    }

    pub fn items(&self) -> Vec<R> {
        self.cache.snapshot()
    }
}

/// CRUD module for a form-edited collection
pub struct EntityModule<R: EditableResource> {
    gateway: Arc<dyn EntityGateway<R>>,
    interaction: Arc<dyn Interaction>,
    cache: RecordCache<R>,
}

impl<R: EditableResource> EntityModule<R> {
    pub fn new(gateway: Arc<dyn EntityGateway<R>>, interaction: Arc<dyn Interaction>) -> Self {
        Self { gateway, interaction, cache: RecordCache::new() }
    }

    /// Fetch the whole collection and replace local state.
    pub async fn list(&self) -> Result<Vec<R>> {
        self.cache.refresh(self.gateway.list()).await
    }

    pub async fn get(&self, id: &str) -> Result<R> {
        self.gateway.get(id).await
    }

    /// Create, then re-list. The form has already passed the required-field gate.
    pub async fn create(&self, form: &R::Form) -> Result<R> {
        let created = self.gateway.create(form).await.map_err(|err| {
            warn!(resource = R::LABEL, error = %err, "create failed");
            err
        })?;
        info!(resource = R::LABEL, id = created.id(), "created");
        self.relist().await;
        Ok(created)
    }

    pub async fn update(&self, id: &str, form: &R::Form) -> Result<()> {
        self.gateway.update(id, form).await.map_err(|err| {
            warn!(resource = R::LABEL, id, error = %err, "update failed");
            err
        })?;
        info!(resource = R::LABEL, id, "updated");
        self.relist().await;
        Ok(())
    }

    /// Ask first; a declined confirmation sends nothing.
    pub async fn remove(&self, id: &str) -> Result<RemoveOutcome> {
        let question = format!("Are you sure you want to delete this {}?", R::LABEL);
        if !self.interaction.confirm(&question) {
            return Ok(RemoveOutcome::Declined);
        }

        self.gateway.delete(id).await.map_err(|err| {
            warn!(resource = R::LABEL, id, error = %err, "delete failed");
            err
        })?;
        info!(resource = R::LABEL, id, "deleted");
        self.relist().await;
        Ok(RemoveOutcome::Removed)
    }

    pub fn items(&self) -> Vec<R> {
        self.cache.snapshot()
    }

    /// Record from the last fetched collection.
    pub fn cached(&self, id: &str) -> Option<R> {
        self.cache.find(id)
    }

    // The mutation already succeeded; a failed re-list only leaves stale rows.
    async fn relist(&self) {
        let _ = self.list().await;
    }
}
