//! # Shortly
//!
//! A small, fast URL shortening service built with Axum. Links live in memory
//! for the lifetime of the process.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Short link model, identifier generation, store contract
//! - **Application Layer** ([`application`]) - Shortening, analytics and health services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and QR rendering
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Collision-checked short identifiers with a bounded retry budget
//! - Click counting coupled to every successful redirect
//! - Side-effect-free analytics reads
//! - PNG QR codes for every short link
//! - Optional link expiry
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- --port 8000 --debug
//!
//! curl -X POST localhost:8000/shorten -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AnalyticsReporter, HealthMonitor, ShortenerService};
    pub use crate::domain::entities::{LinkAnalytics, ShortLink, ShortReference};
    pub use crate::domain::generator::{CodeGenerator, RandomGenerator, SequentialGenerator};
    pub use crate::domain::store::LinkStore;
    pub use crate::domain::{CapacityExceeded, ShortCode, ShortenerError, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::MemoryLinkStore;
    pub use crate::state::AppState;
}
