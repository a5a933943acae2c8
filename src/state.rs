//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{HealthMonitor, ShortenerService};
use crate::infrastructure::{MemoryLinkStore, QrRenderer};

/// Handles to the long-lived services, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService<MemoryLinkStore>>,
    pub health: Arc<HealthMonitor>,
    pub qr: Arc<QrRenderer>,
    /// Public origin prepended to codes when rendering QR codes.
    pub base_url: String,
}

impl AppState {
    /// Builds the state around an existing store.
    ///
    /// The health monitor's uptime starts counting here.
    pub fn new(store: Arc<MemoryLinkStore>, base_url: impl Into<String>) -> Self {
        let shortener = Arc::new(ShortenerService::new(store));
        let health = Arc::new(HealthMonitor::new(shortener.clone()));

        Self {
            shortener,
            health,
            qr: Arc::new(QrRenderer::default()),
            base_url: base_url.into(),
        }
    }

    /// Absolute URL for a short code, e.g. `http://localhost:8000/a1b2c3`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
