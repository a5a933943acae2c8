//! DTO for the service index.

use serde::Serialize;

/// Greeting plus the route map.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub health_status: &'static str,
    pub shorten_url: &'static str,
    pub retrieve_url: &'static str,
    pub analytics: &'static str,
    pub generate_qr: &'static str,
}

impl Default for IndexResponse {
    fn default() -> Self {
        Self {
            message: "Welcome to Shortly URL Shortener!",
            endpoints: Endpoints {
                health: "/health",
                health_status: "/health/status",
                shorten_url: "/shorten",
                retrieve_url: "/{short_id}",
                analytics: "/{short_id}/analytics",
                generate_qr: "/{short_id}/qr",
            },
        }
    }
}
