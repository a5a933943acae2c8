//! Process uptime and liveness reporting.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::utils::uptime::format_uptime;

/// Whether the request-serving routes are operational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Liveness {
    Up,
    Down,
}

/// Overall service health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl From<Liveness> for HealthStatus {
    fn from(liveness: Liveness) -> Self {
        match liveness {
            Liveness::Up => Self::Healthy,
            Liveness::Down => Self::Unhealthy,
        }
    }
}

/// Source of the liveness signal consumed by [`HealthMonitor`].
#[cfg_attr(test, mockall::automock)]
pub trait LivenessProbe: Send + Sync {
    fn liveness(&self) -> Liveness;
}

/// Detailed health snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub uptime: String,
    pub routes: Liveness,
}

/// Tracks when the process started and asks the core whether it is alive.
pub struct HealthMonitor {
    started_at: DateTime<Utc>,
    probe: Arc<dyn LivenessProbe>,
}

impl HealthMonitor {
    /// Creates a monitor whose uptime is measured from now.
    pub fn new(probe: Arc<dyn LivenessProbe>) -> Self {
        Self::with_start_time(probe, Utc::now())
    }

    pub fn with_start_time(probe: Arc<dyn LivenessProbe>, started_at: DateTime<Utc>) -> Self {
        Self { started_at, probe }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn uptime(&self) -> TimeDelta {
        Utc::now() - self.started_at
    }

    /// Overall status derived from the routes' liveness.
    pub fn status(&self) -> HealthStatus {
        let routes = self.probe.liveness();
        if routes == Liveness::Down {
            tracing::warn!("Liveness probe reports routes down");
        }
        routes.into()
    }

    /// Full report with uptime and per-component status.
    pub fn report(&self) -> HealthReport {
        let routes = self.probe.liveness();
        let report = HealthReport {
            status: routes.into(),
            uptime: format_uptime(self.uptime()),
            routes,
        };
        tracing::debug!(status = ?report.status, uptime = %report.uptime, "Health status calculated");
        report
    }
}
