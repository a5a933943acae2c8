//! Business logic services for the application layer.

pub mod analytics_service;
pub mod health_service;
pub mod shortener_service;

pub use analytics_service::AnalyticsReporter;
pub use health_service::{HealthMonitor, HealthReport, HealthStatus, Liveness, LivenessProbe};
pub use shortener_service::ShortenerService;
