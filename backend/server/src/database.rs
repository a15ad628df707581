//! # Redis
//!
//! Persistent recipe storage.
//!
//! ## Implementation
//!
//! - Redis hash: 1 big key (`foods`), then id -> JSON record pairs
//! - Ids are UUID v4 strings, written with `HSETNX` so an id is never handed out twice
//! - Update and delete are server-side scripts, Redis runs each one atomically
//! - Listing and searching read every value with `HVALS`, then filter by name here
use std::time::Duration;

use async_trait::async_trait;
use bank::{Food, NewFood};
use redis::{
    AsyncCommands, Client, RedisError, Script,
    aio::{ConnectionManager, ConnectionManagerConfig},
};

use crate::{
    search::{name_matches, normalize_query},
    store::{FoodStore, StoreError, new_id},
};

pub const FOODS_KEY: &str = "foods";

const UPDATE_SCRIPT: &str = r#"
    if redis.call('HEXISTS', KEYS[1], ARGV[1]) == 1 then
        redis.call('HSET', KEYS[1], ARGV[1], ARGV[2])
        return 1
    end
    return 0
"#;

const DELETE_SCRIPT: &str = r#"
    local food = redis.call('HGET', KEYS[1], ARGV[1])
    if food then
        redis.call('HDEL', KEYS[1], ARGV[1])
    end
    return food
"#;

fn connection_config() -> ConnectionManagerConfig {
    ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(500))
}

pub async fn init_redis(redis_url: &str) -> Result<ConnectionManager, RedisError> {
    let client = Client::open(redis_url)?;

    client
        .get_connection_manager_with_config(connection_config())
        .await
}

pub struct RedisStore {
    connection: ConnectionManager,
    key: String,
    update_script: Script,
    delete_script: Script,
}

impl RedisStore {
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let connection = init_redis(redis_url).await?;

        Ok(Self::with_key(connection, FOODS_KEY))
    }

    /// Records live under `key`; tests use their own key to stay out of the way of real data.
    pub fn with_key(connection: ConnectionManager, key: impl Into<String>) -> Self {
        Self {
            connection,
            key: key.into(),
            update_script: Script::new(UPDATE_SCRIPT),
            delete_script: Script::new(DELETE_SCRIPT),
        }
    }
}

fn decode(value: &str) -> Result<Food, StoreError> {
    Ok(serde_json::from_str(value)?)
}

#[async_trait]
impl FoodStore for RedisStore {
    async fn insert(&self, food: NewFood) -> Result<Food, StoreError> {
        let mut connection = self.connection.clone();

        loop {
            let record = Food::new(new_id(), food.clone());
            let payload = serde_json::to_string(&record)?;

            let inserted: bool = connection.hset_nx(&self.key, &record.id, payload).await?;
            if inserted {
                return Ok(record);
            }
        }
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Food>, StoreError> {
        let mut connection = self.connection.clone();
        let value: Option<String> = connection.hget(&self.key, id).await?;

        value.as_deref().map(decode).transpose()
    }

    async fn update_by_id(&self, id: &str, food: NewFood) -> Result<Option<Food>, StoreError> {
        let mut connection = self.connection.clone();
        let food = Food::new(id, food);
        let payload = serde_json::to_string(&food)?;

        let updated: bool = self
            .update_script
            .key(&self.key)
            .arg(id)
            .arg(payload)
            .invoke_async(&mut connection)
            .await?;

        Ok(updated.then_some(food))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Food>, StoreError> {
        let mut connection = self.connection.clone();

        let value: Option<String> = self
            .delete_script
            .key(&self.key)
            .arg(id)
            .invoke_async(&mut connection)
            .await?;

        value.as_deref().map(decode).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Food>, StoreError> {
        let mut connection = self.connection.clone();
        let values: Vec<String> = connection.hvals(&self.key).await?;

        values.iter().map(|value| decode(value)).collect()
    }

    async fn find_by_name_contains(&self, query: &str) -> Result<Vec<Food>, StoreError> {
        let query = normalize_query(Some(query));
        let foods = self.list_all().await?;

        Ok(foods
            .into_iter()
            .filter(|food| name_matches(&food.name, &query))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_config_builds() {
        let _config = connection_config();

        assert!(Client::open("redis://127.0.0.1:6379").is_ok());
    }

    #[tokio::test]
    async fn test_init_redis_rejects_bad_url() {
        assert!(init_redis("http://127.0.0.1:6379").await.is_err());
        assert!(init_redis("not a url").await.is_err());
    }

    #[test]
    fn test_stored_record_decodes() {
        let food = Food::new("1", NewFood::new("Pho", "beef, noodles"));
        let payload = serde_json::to_string(&food).unwrap();

        assert_eq!(decode(&payload).unwrap(), food);
        assert!(matches!(decode("{"), Err(StoreError::Corrupt(_))));
    }
}
