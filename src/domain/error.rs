//! Typed failures of the shortening core.
//!
//! None of these format user-facing text; translation into HTTP responses
//! happens in [`crate::error::AppError`].

/// Lookup failure raised by a [`crate::domain::store::LinkStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("short link not found")]
    NotFound,
}

/// Raised by [`crate::domain::store::LinkStore::insert`] when every candidate
/// within the retry bound was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no free identifier after {attempts} attempts")]
pub struct CapacityExceeded {
    pub attempts: usize,
}

/// Errors raised by [`crate::application::services::ShortenerService`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenerError {
    #[error("short link not found: {code}")]
    NotFound { code: String },

    #[error("invalid URL: {reason}")]
    InvalidUrl { reason: String },

    #[error("identifier space exhausted after {attempts} attempts")]
    CapacityExceeded { attempts: usize },
}

impl ShortenerError {
    /// Lifts a store error, attaching the code that was looked up.
    pub fn from_store(err: StoreError, code: &str) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound {
                code: code.to_string(),
            },
        }
    }
}

impl From<CapacityExceeded> for ShortenerError {
    fn from(err: CapacityExceeded) -> Self {
        Self::CapacityExceeded {
            attempts: err.attempts,
        }
    }
}
