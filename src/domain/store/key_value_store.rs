//! Store trait and error types.

use crate::domain::entities::ScoredMember;
use async_trait::async_trait;

/// Errors reported by a store backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// Exact-match lookup found no value for the key.
    #[error("key not found: {0}")]
    NotFound(String),

    /// The backend did not answer within the configured deadline.
    #[error("store operation timed out: {0}")]
    Timeout(String),

    /// Any other backend failure (connection loss, wrong type, protocol error).
    #[error("store backend error: {0}")]
    Backend(String),
}

/// One page of a cursor-based key scan.
///
/// A `next_cursor` of zero signals that the scan is complete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanPage {
    pub keys: Vec<String>,
    pub next_cursor: u64,
}

/// Capability interface for a key-value store with sorted-set support.
///
/// Each method maps to a single store primitive and is expected to be atomic
/// on its own. No method spans more than one primitive, so callers get no
/// cross-call transactionality.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis via `ConnectionManager`
/// - [`crate::infrastructure::store::MemoryStore`] - In-process maps for tests and local runs
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value. No expiry.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the key does not exist.
    async fn get(&self, key: &str) -> Result<String, StoreError>;

    /// Adds `delta` to the score of `member` in the sorted set `set`,
    /// creating both if necessary.
    async fn zincr_by(&self, set: &str, delta: f64, member: &str) -> Result<(), StoreError>;

    /// Returns members of `set` ranked by score descending, from rank `start`
    /// to rank `stop` inclusive. Negative ranks count from the end.
    ///
    /// A missing set yields an empty vector.
    async fn zrev_range_with_scores(
        &self,
        set: &str,
        start: i64,
        stop: i64,
    ) -> Result<Vec<ScoredMember>, StoreError>;

    /// Scans keys matching the glob `pattern`, starting from `cursor`.
    ///
    /// `count` is a hint for the page size. A scan started at cursor 0 and
    /// followed until the returned cursor is 0 visits every key present for
    /// the whole duration of the scan at least once.
    async fn scan(&self, cursor: u64, pattern: &str, count: usize)
    -> Result<ScanPage, StoreError>;

    /// Removes the given keys. Missing keys are ignored.
    async fn delete(&self, keys: &[String]) -> Result<(), StoreError>;

    /// Clears every key of the current logical database.
    async fn flush_all(&self) -> Result<(), StoreError>;

    /// Checks whether the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
