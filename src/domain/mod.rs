//! Domain layer containing the shortening model and the store contract.
//!
//! # Architecture
//!
//! - [`short_key`] - Deterministic short key derivation and store key layout
//! - [`entities`] - Plain data returned by the store and the engine
//! - [`store`] - The [`store::KeyValueStore`] capability trait and key scanning
//! - [`errors`] - Typed engine errors
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The store trait defines the contract implemented by the infrastructure layer
//! - Business logic lives in [`crate::application::services`]

pub mod entities;
pub mod errors;
pub mod short_key;
pub mod store;

pub use errors::ShortenerError;
pub use short_key::ShortKey;
