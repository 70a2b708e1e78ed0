//! Redis-backed visit counter.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use std::time::Duration;
use tracing::{info, warn};

use crate::domain::entities::LinkMetric;
use crate::domain::repositories::{StoreError, VisitCounter};
use crate::infrastructure::bounded;

/// Sorted set holding one member per visited link.
pub const METRICS_KEY: &str = "metrics";

/// Visit counters stored in a Redis sorted set.
///
/// Members are link ids rendered as decimal strings, scores are visit counts.
/// `ZINCRBY` is atomic, so concurrent increments for the same link are never lost.
pub struct RedisVisitCounter {
    client: ConnectionManager,
    key: String,
    timeout: Duration,
}

impl RedisVisitCounter {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `timeout` - upper bound applied to every command
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails. Returns [`StoreError::Timeout`]
    /// if the connection is not established within `timeout`.
    pub async fn connect(redis_url: &str, timeout: Duration) -> Result<Self, StoreError> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = bounded(timeout, ConnectionManager::new(client))
            .await?
            .map_err(|e| StoreError::Unavailable(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        bounded(timeout, test_conn.ping::<()>())
            .await?
            .map_err(|e| StoreError::Unavailable(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key: METRICS_KEY.to_string(),
            timeout,
        })
    }

    /// Uses `key` instead of [`METRICS_KEY`] for the sorted set.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }
}

fn map_redis_error(e: RedisError) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

/// Converts raw `(member, score)` pairs into metrics.
///
/// Members that are not link ids are skipped. Scores are truncated to whole visits.
fn parse_entries(entries: Vec<(String, f64)>) -> Vec<LinkMetric> {
    entries
        .into_iter()
        .filter_map(|(member, score)| match member.parse::<i64>() {
            Ok(link_id) => Some(LinkMetric::new(link_id, score.max(0.0) as u64)),
            Err(_) => {
                warn!(%member, "Skipping counter entry that is not a link id");
                None
            }
        })
        .collect()
}

#[async_trait]
impl VisitCounter for RedisVisitCounter {
    async fn increment(&self, link_id: i64) -> Result<u64, StoreError> {
        let mut conn = self.client.clone();
        let member = link_id.to_string();

        let score: f64 = bounded(self.timeout, conn.zincr(&self.key, member, 1))
            .await?
            .map_err(map_redis_error)?;

        Ok(score.max(0.0) as u64)
    }

    async fn scores_up_to(&self, ceiling: u64) -> Result<Vec<LinkMetric>, StoreError> {
        let mut conn = self.client.clone();

        let entries: Vec<(String, f64)> = bounded(
            self.timeout,
            conn.zrangebyscore_withscores(&self.key, 0, ceiling),
        )
        .await?
        .map_err(map_redis_error)?;

        Ok(parse_entries(entries))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        matches!(bounded(self.timeout, conn.ping::<()>()).await, Ok(Ok(())))
    }
}
