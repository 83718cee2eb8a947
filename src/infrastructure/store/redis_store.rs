//! Redis-backed store implementation.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisResult, aio::ConnectionManager};
use tracing::{debug, info, warn};

use crate::domain::entities::ScoredMember;
use crate::domain::store::{KeyValueStore, ScanPage, StoreError};

/// Redis implementation of [`KeyValueStore`].
///
/// Uses `ConnectionManager` for automatic reconnection. Every command is
/// bounded by a deadline and surfaces [`StoreError::Timeout`] when it
/// expires. Failures are returned to the caller, never retried.
#[derive(Clone)]
pub struct RedisStore {
    client: ConnectionManager,
    timeout: Duration,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StoreError {
    if err.is_timeout() {
        StoreError::Timeout(format!("{operation}: {err}"))
    } else {
        StoreError::Backend(format!("{operation}: {err}"))
    }
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `timeout` - Deadline applied to the PING and to every later command
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the URL is invalid or the connection
    /// cannot be established, and [`StoreError::Timeout`] if the PING does
    /// not answer in time.
    pub async fn connect(redis_url: &str, timeout: Duration) -> Result<Self, StoreError> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url)
            .map_err(|e| StoreError::Backend(format!("Failed to create Redis client: {}", e)))?;

        let manager = tokio::time::timeout(timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Timeout("connect".to_string()))?
            .map_err(|e| StoreError::Backend(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self {
            client: manager,
            timeout,
        };
        store.ping().await?;

        info!("✓ Connected to Redis");

        Ok(store)
    }

    async fn bounded<T>(
        &self,
        operation: &str,
        command: impl Future<Output = RedisResult<T>>,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.timeout, command).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                warn!("Redis {} error: {}", operation, e);
                Err(map_redis_error(operation, e))
            }
            Err(_) => {
                warn!("Redis {} timed out after {:?}", operation, self.timeout);
                Err(StoreError::Timeout(operation.to_string()))
            }
        }
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.client.clone();
        self.bounded("SET", conn.set::<_, _, ()>(key, value)).await?;
        debug!("Redis SET {}", key);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<String, StoreError> {
        let mut conn = self.client.clone();
        self.bounded("GET", conn.get::<_, Option<String>>(key))
            .await?
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn zincr_by(&self, set: &str, delta: f64, member: &str) -> Result<(), StoreError> {
        let mut conn = self.client.clone();
        let score = self
            .bounded("ZINCRBY", conn.zincr::<_, _, _, f64>(set, member, delta))
            .await?;
        debug!("Redis ZINCRBY {} {} -> {}", set, member, score);
        Ok(())
    }

    async fn zrev_range_with_scores(
        &self,
        set: &str,
        start: i64,
        stop: i64,
    ) -> Result<Vec<ScoredMember>, StoreError> {
        let mut conn = self.client.clone();
        let mut cmd = redis::cmd("ZREVRANGE");
        cmd.arg(set).arg(start).arg(stop).arg("WITHSCORES");

        let entries = self
            .bounded(
                "ZREVRANGE",
                cmd.query_async::<Vec<(String, f64)>>(&mut conn),
            )
            .await?;

        Ok(entries
            .into_iter()
            .map(|(member, score)| ScoredMember { member, score })
            .collect())
    }

    async fn scan(
        &self,
        cursor: u64,
        pattern: &str,
        count: usize,
    ) -> Result<ScanPage, StoreError> {
        let mut conn = self.client.clone();
        let mut cmd = redis::cmd("SCAN");
        cmd.arg(cursor)
            .arg("MATCH")
            .arg(pattern)
            .arg("COUNT")
            .arg(count);

        let (next_cursor, keys) = self
            .bounded("SCAN", cmd.query_async::<(u64, Vec<String>)>(&mut conn))
            .await?;

        debug!(
            "Redis SCAN {} {} -> {} keys, next cursor {}",
            cursor,
            pattern,
            keys.len(),
            next_cursor
        );

        Ok(ScanPage { keys, next_cursor })
    }

    async fn delete(&self, keys: &[String]) -> Result<(), StoreError> {
        if keys.is_empty() {
            return Ok(());
        }

        let mut conn = self.client.clone();
        let deleted = self
            .bounded("DEL", conn.del::<_, i64>(keys.to_vec()))
            .await?;
        debug!("Redis DEL removed {} of {} keys", deleted, keys.len());
        Ok(())
    }

    async fn flush_all(&self) -> Result<(), StoreError> {
        let mut conn = self.client.clone();
        let cmd = redis::cmd("FLUSHDB");
        self.bounded("FLUSHDB", cmd.query_async::<()>(&mut conn))
            .await?;
        info!("Redis FLUSHDB completed");
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.client.clone();
        self.bounded("PING", conn.ping::<()>()).await
    }
}
