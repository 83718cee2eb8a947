//! Utility functions shared across the application.
//!
//! - [`hostname`] - Hostname extraction from submitted URLs

pub mod hostname;
