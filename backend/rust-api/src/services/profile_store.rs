use std::collections::HashMap;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use tokio::sync::RwLock;

use crate::metrics::track_store_operation;

/// Key under which a client's user blob lives.
pub fn profile_key(client_id: &str) -> String {
    format!("edupath_user:{}", client_id)
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("profile store backend error: {0}")]
    Backend(#[from] redis::RedisError),
    #[error("stored profile is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Client-side storage for the serialized user blob. Writes replace the
/// whole value; there is no versioning, the last write wins.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
    /// Liveness check used by `/health`.
    async fn ping(&self) -> Result<(), StoreError>;
    fn backend_name(&self) -> &'static str;
}

#[derive(Default)]
pub struct MemoryProfileStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

pub struct RedisProfileStore {
    redis: ConnectionManager,
}

impl RedisProfileStore {
    pub fn new(redis: ConnectionManager) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl ProfileStore for RedisProfileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        // clone connection for this operation
        let mut conn = self.redis.clone();
        track_store_operation("get", async {
            redis::cmd("GET")
                .arg(key)
                .query_async::<Option<String>>(&mut conn)
                .await
                .map_err(StoreError::from)
        })
        .await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut conn = self.redis.clone();
        track_store_operation("set", async {
            redis::cmd("SET")
                .arg(key)
                .arg(value)
                .query_async::<()>(&mut conn)
                .await
                .map_err(StoreError::from)
        })
        .await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.redis.clone();
        track_store_operation("del", async {
            redis::cmd("DEL")
                .arg(key)
                .query_async::<()>(&mut conn)
                .await
                .map_err(StoreError::from)
        })
        .await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.redis.clone();
        redis::cmd("PING").query_async::<String>(&mut conn).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_namespaced_per_client() {
        assert_eq!(profile_key("tab-1"), "edupath_user:tab-1");
    }

    #[tokio::test]
    async fn memory_store_overwrites_and_removes() {
        let store = MemoryProfileStore::new();
        store.set("k", "one".to_string()).await.unwrap();
        store.set("k", "two".to_string()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("two"));

        store.remove("k").await.unwrap();
        assert!(store.get("k").await.unwrap().is_none());
        // removing again is fine
        store.remove("k").await.unwrap();
    }
}
