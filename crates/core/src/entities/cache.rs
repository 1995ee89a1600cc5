use std::future::Future;

use bizhub_domain::{Resource, Result};
use parking_lot::RwLock;
use tracing::{debug, warn};

/// Last fetched collection of one resource
pub struct RecordCache<R> {
    items: RwLock<Vec<R>>,
}

impl<R: Resource> RecordCache<R> {
    pub fn new() -> Self {
        Self { items: RwLock::new(Vec::new()) }
    }

    /// Await `fetch` and replace the cached collection with its result.
    ///
    /// On failure the previous collection stays in place.
    pub async fn refresh<F>(&self, fetch: F) -> Result<Vec<R>>
    where
        F: Future<Output = Result<Vec<R>>>,
    {
        match fetch.await {
            Ok(items) => {
                debug!(resource = R::LABEL, count = items.len(), "collection refreshed");
                *self.items.write() = items.clone();
                Ok(items)
            }
            Err(err) => {
                warn!(resource = R::LABEL, error = %err, "list failed; keeping previous state");
                Err(err)
            }
        }
    }

    pub fn snapshot(&self) -> Vec<R> {
        self.items.read().clone()
    }

    pub fn find(&self, id: &str) -> Option<R> {
        self.items.read().iter().find(|item| item.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl<R: Resource> Default for RecordCache<R> {
    fn default() -> Self {
        Self::new()
    }
}
