//! Structural URL checks for values about to be shortened.
//!
//! The request DTO validates syntax first. This is a second line that keeps
//! non-redirectable values (other schemes, relative or host-less URLs) out of
//! the store.

use url::Url;

/// Reasons a URL cannot be shortened.
#[derive(Debug, thiserror::Error)]
pub enum UrlCheckError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,

    #[error("URL contains control characters or surrounding whitespace")]
    UnsafeCharacters,
}

/// Ensures `input` is an absolute HTTP(S) URL with a host.
///
/// The input is not rewritten; a URL that passes is stored exactly as given.
/// The parser silently strips or escapes control characters and surrounding
/// whitespace, so those are rejected up front. Anything that passes is a valid
/// `Location` header value as-is.
///
/// # Security
///
/// Rejects potentially dangerous protocols like `javascript:`, `data:`, `file:`, etc.
///
/// # Errors
///
/// Returns [`UrlCheckError::InvalidFormat`] for malformed or relative URLs.
/// Returns [`UrlCheckError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlCheckError::MissingHost`] if no host is present.
/// Returns [`UrlCheckError::UnsafeCharacters`] for raw control characters
/// (including tab and DEL) or leading/trailing whitespace.
pub fn ensure_usable_url(input: &str) -> Result<(), UrlCheckError> {
    if input.chars().any(char::is_control) || input.trim() != input {
        return Err(UrlCheckError::UnsafeCharacters);
    }

    let url = Url::parse(input).map_err(|e| UrlCheckError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlCheckError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlCheckError::MissingHost),
    }
}
