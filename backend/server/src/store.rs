//! # Record Store
//!
//! Durable keyed storage for recipes.
//!
//! ## Requirements
//!
//! - Exact lookups by store-assigned id
//! - Case-insensitive substring query on name
//! - Single-record writes are atomic: an update and a delete on the same id never interleave
//!
//! ## Backends
//!
//! - [`RedisStore`](crate::database::RedisStore): one Redis hash, id -> JSON record. Update and
//!   delete are Lua scripts so the existence check and the write happen as one operation.
//! - [`MemoryStore`](crate::memory::MemoryStore): a locked vector, for local runs and tests.
use std::sync::Arc;

use async_trait::async_trait;
use bank::{Food, NewFood};
use thiserror::Error;
use tracing::info;

use crate::{
    config::{Config, StoreBackend},
    database::RedisStore,
    memory::MemoryStore,
};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Corrupt record: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// `Ok(None)` always means "no record with this id", never a fault.
#[async_trait]
pub trait FoodStore: Send + Sync {
    async fn insert(&self, food: NewFood) -> Result<Food, StoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Food>, StoreError>;

    async fn update_by_id(&self, id: &str, food: NewFood) -> Result<Option<Food>, StoreError>;

    async fn delete_by_id(&self, id: &str) -> Result<Option<Food>, StoreError>;

    async fn list_all(&self) -> Result<Vec<Food>, StoreError>;

    /// Empty `query` matches every record.
    async fn find_by_name_contains(&self, query: &str) -> Result<Vec<Food>, StoreError>;
}

pub type SharedStore = Arc<dyn FoodStore>;

pub async fn init_store(config: &Config) -> Result<SharedStore, StoreError> {
    match config.store_backend {
        StoreBackend::Redis => {
            info!("Connecting to Redis...");

            Ok(Arc::new(RedisStore::connect(&config.redis_url).await?))
        }
        StoreBackend::Memory => {
            info!("Using in-memory store, records will not survive a restart");

            Ok(Arc::new(MemoryStore::default()))
        }
    }
}

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
