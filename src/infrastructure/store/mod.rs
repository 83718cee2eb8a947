//! Store backends for the [`crate::domain::store::KeyValueStore`] capability.
//!
//! - [`RedisStore`] - Production Redis backend with per-command deadlines
//! - [`MemoryStore`] - In-process backend for testing and local development

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
