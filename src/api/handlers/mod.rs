//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analytics;
pub mod health;
pub mod index;
pub mod qr;
pub mod redirect;
pub mod shorten;

pub use analytics::analytics_handler;
pub use health::{health_handler, health_status_handler};
pub use index::index_handler;
pub use qr::qr_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
