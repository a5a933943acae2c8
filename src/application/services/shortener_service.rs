//! Short link creation, resolution and analytics.

use std::sync::Arc;
use tracing::{debug, error, info};

use crate::application::services::analytics_service::AnalyticsReporter;
use crate::application::services::health_service::{Liveness, LivenessProbe};
use crate::domain::entities::{LinkAnalytics, ShortLink, ShortReference};
use crate::domain::error::ShortenerError;
use crate::domain::store::LinkStore;
use crate::utils::url_check::ensure_usable_url;

/// Service orchestrating the store for the HTTP boundary.
///
/// The store is injected at construction; the service holds no other state.
pub struct ShortenerService<S: LinkStore> {
    store: Arc<S>,
    analytics: AnalyticsReporter<S>,
}

impl<S: LinkStore> ShortenerService<S> {
    /// Creates a new service over `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            analytics: AnalyticsReporter::new(store.clone()),
            store,
        }
    }

    /// Creates a short link for `url`.
    ///
    /// The URL is expected to be validated already; this only rejects values
    /// that could never be redirected to.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::InvalidUrl`] if the URL is not an absolute
    /// HTTP(S) URL with a host.
    ///
    /// Returns [`ShortenerError::CapacityExceeded`] if the store ran out of
    /// retries while looking for a free identifier.
    pub fn shorten(&self, url: &str) -> Result<ShortReference, ShortenerError> {
        ensure_usable_url(url).map_err(|e| ShortenerError::InvalidUrl {
            reason: e.to_string(),
        })?;

        let link = self.store.insert(url).map_err(|e| {
            error!(attempts = e.attempts, "Failed to reserve a unique short identifier");
            ShortenerError::from(e)
        })?;

        info!(code = %link.identifier, "Short link created");
        debug!(code = %link.identifier, url, "Short link target");

        Ok(ShortReference::new(link.identifier))
    }

    /// Returns the redirect target for `code` and counts one click.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] if the code is unknown.
    pub fn resolve(&self, code: &str) -> Result<String, ShortenerError> {
        let target = self
            .store
            .resolve(code)
            .map_err(|e| ShortenerError::from_store(e, code))?;

        debug!(code, target = %target, "Short link resolved");
        Ok(target)
    }

    /// Returns click analytics for `code` without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] if the code is unknown.
    pub fn analytics(&self, code: &str) -> Result<LinkAnalytics, ShortenerError> {
        self.analytics.report(code)
    }

    /// Returns a snapshot of the link without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] if the code is unknown.
    pub fn link(&self, code: &str) -> Result<ShortLink, ShortenerError> {
        self.store
            .get(code)
            .map_err(|e| ShortenerError::from_store(e, code))
    }

}

impl<S: LinkStore> LivenessProbe for ShortenerService<S> {
    fn liveness(&self) -> Liveness {
        if self.store.is_available() {
            Liveness::Up
        } else {
            Liveness::Down
        }
    }
}
