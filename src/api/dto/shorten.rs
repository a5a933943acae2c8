//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortReference;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Path of the created short link, e.g. `{"short_url": "/a1b2c3"}`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

impl From<ShortReference> for ShortenResponse {
    fn from(reference: ShortReference) -> Self {
        Self {
            short_url: reference.path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        let valid = ShortenRequest {
            url: "https://example.com".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = ShortenRequest {
            url: "not a url".to_string(),
        };
        assert!(invalid.validate().is_err());
    }
}
