mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::{config::StorageConfig, entities::RouteResult, error::Error};

/// Key/value storage for route results.
///
/// A `get` never observes a partially written result and a `set` replaces the
/// whole entry for its token atomically.
#[async_trait]
pub trait ResultStore {
    async fn get(&self, token: &Uuid) -> Result<Option<RouteResult>, Error>;
    async fn set(&self, token: &Uuid, result: &RouteResult) -> Result<(), Error>;
}

pub type DynStore = Arc<dyn ResultStore + Send + Sync>;

#[tracing::instrument(skip_all)]
pub async fn connect(config: &StorageConfig) -> Result<DynStore, Error> {
    match config {
        StorageConfig::Memory { capacity } => {
            tracing::info!(?capacity, "using in-memory result store");
            let store = match capacity {
                Some(capacity) => MemoryStore::with_capacity(*capacity),
                None => MemoryStore::new(),
            };
            Ok(Arc::new(store))
        }
        StorageConfig::Postgres {
            url,
            max_connections,
        } => {
            tracing::info!(max_connections, "using postgres result store");
            Ok(Arc::new(PgStore::new(url, *max_connections).await?))
        }
    }
}
