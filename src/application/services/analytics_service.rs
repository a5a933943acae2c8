//! Read-only click analytics.

use std::sync::Arc;

use crate::domain::code::ShortCode;
use crate::domain::entities::LinkAnalytics;
use crate::domain::error::ShortenerError;
use crate::domain::store::LinkStore;

/// Projection over the store exposing click counts.
///
/// Reports never change a counter. Only
/// [`crate::application::services::ShortenerService::resolve`] does.
pub struct AnalyticsReporter<S: LinkStore> {
    store: Arc<S>,
}

impl<S: LinkStore> AnalyticsReporter<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the current click count for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] if the code is unknown.
    pub fn report(&self, code: &str) -> Result<LinkAnalytics, ShortenerError> {
        let click_count = self
            .store
            .clicks(code)
            .map_err(|e| ShortenerError::from_store(e, code))?;

        tracing::debug!(code, click_count, "Analytics read");

        Ok(LinkAnalytics {
            short_id: ShortCode::new(code),
            click_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::StoreError;
    use crate::domain::store::MockLinkStore;

    #[test]
    fn test_report_reads_clicks_only() {
        let mut store = MockLinkStore::new();
        store
            .expect_clicks()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(7));
        store.expect_resolve().times(0);

        let reporter = AnalyticsReporter::new(Arc::new(store));
        let analytics = reporter.report("abc123").unwrap();

        assert_eq!(analytics.short_id.as_str(), "abc123");
        assert_eq!(analytics.click_count, 7);
    }

    #[test]
    fn test_report_unknown_code() {
        let mut store = MockLinkStore::new();
        store
            .expect_clicks()
            .returning(|_| Err(StoreError::NotFound));

        let reporter = AnalyticsReporter::new(Arc::new(store));

        assert_eq!(
            reporter.report("nope"),
            Err(ShortenerError::NotFound {
                code: "nope".to_string()
            })
        );
    }
}
