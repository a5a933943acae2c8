//! DTOs for the analytics endpoint.

use serde::Serialize;

use crate::domain::entities::LinkAnalytics;

/// Click count for one short link.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub short_id: String,
    pub click_count: u64,
}

impl From<LinkAnalytics> for AnalyticsResponse {
    fn from(analytics: LinkAnalytics) -> Self {
        Self {
            short_id: analytics.short_id.into_inner(),
            click_count: analytics.click_count,
        }
    }
}
