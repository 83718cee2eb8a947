//! Key-value / sorted-set store capability consumed by the shortening engine.
//!
//! The engine never talks to a concrete backend. It depends on the
//! [`KeyValueStore`] trait, implemented in `crate::infrastructure::store` by a
//! Redis client and by an in-process map.
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

mod key_scan;
mod key_value_store;

pub use key_scan::KeyScan;
pub use key_value_store::{KeyValueStore, ScanPage, StoreError};

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
