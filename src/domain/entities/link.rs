//! Short link entity and the values derived from it.

use chrono::{DateTime, Utc};

use crate::domain::code::ShortCode;

/// A snapshot of one shortened URL.
///
/// `click_count` reflects the counter at the moment the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub identifier: ShortCode,
    pub target_url: String,
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// The externally presented form of a freshly created link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortReference {
    pub code: ShortCode,
}

impl ShortReference {
    pub fn new(code: ShortCode) -> Self {
        Self { code }
    }

    /// Path fragment served by the redirect route, e.g. `/a1b2c3`.
    pub fn path(&self) -> String {
        format!("/{}", self.code)
    }
}

/// Click analytics for one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAnalytics {
    pub short_id: ShortCode,
    pub click_count: u64,
}
