//! DTOs for health check endpoints.

use serde::Serialize;

use crate::application::services::{HealthReport, HealthStatus, Liveness};

/// Short health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
}

/// Detailed health response with uptime and component status.
#[derive(Debug, Serialize)]
pub struct HealthStatusResponse {
    pub status: HealthStatus,
    pub uptime: String,
    pub components: HealthComponents,
}

/// Health status for each system component.
#[derive(Debug, Serialize)]
pub struct HealthComponents {
    pub routes: Liveness,
}

impl From<HealthReport> for HealthStatusResponse {
    fn from(report: HealthReport) -> Self {
        Self {
            status: report.status,
            uptime: report.uptime,
            components: HealthComponents {
                routes: report.routes,
            },
        }
    }
}
