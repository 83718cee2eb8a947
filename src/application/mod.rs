//! Application layer services implementing business logic.
//!
//! This layer orchestrates store calls into the shortening operations and
//! provides a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Shorten, resolve, analytics, enumeration and reset

pub mod services;
