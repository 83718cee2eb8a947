//! Infrastructure layer for external integrations.
//!
//! This layer implements the store interface defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Redis and in-memory store backends

pub mod store;
