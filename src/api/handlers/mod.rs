//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod delete_all;
pub mod health;
pub mod metrics;
pub mod redirect;
pub mod shorten;
pub mod view_all;

pub use delete_all::delete_all_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use view_all::view_all_handler;
