use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::ResultStore;
use crate::{
    entities::RouteResult,
    error::{storage_error, Error},
};

/// Process-local store. Results are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    results: RwLock<HashMap<Uuid, RouteResult>>,
    capacity: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuses new tokens once `capacity` results are held. Existing tokens can
    /// still be updated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            results: RwLock::new(HashMap::with_capacity(capacity)),
            capacity: Some(capacity),
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.results.read().await.len()
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn get(&self, token: &Uuid) -> Result<Option<RouteResult>, Error> {
        Ok(self.results.read().await.get(token).cloned())
    }

    async fn set(&self, token: &Uuid, result: &RouteResult) -> Result<(), Error> {
        let mut results = self.results.write().await;

        if let Some(capacity) = self.capacity {
            if results.len() >= capacity && !results.contains_key(token) {
                return Err(storage_error(format!(
                    "memory store capacity of {} results reached",
                    capacity
                )));
            }
        }

        results.insert(*token, result.clone());

        Ok(())
    }
}
