//! Application layer services implementing the shortening workflow.
//!
//! Services consume the [`crate::domain::store::LinkStore`] trait and provide a
//! small synchronous API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Shorten, resolve, analytics
//! - [`services::analytics_service::AnalyticsReporter`] - Side-effect-free click reads
//! - [`services::health_service::HealthMonitor`] - Uptime and liveness reporting

pub mod services;
