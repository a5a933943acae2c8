//! Short identifier newtype.

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// Path segments that must never be handed out as identifiers.
///
/// These collide with fixed routes such as `/health` and `/shorten`.
pub const RESERVED_CODES: &[&str] = &["health", "shorten", "analytics", "qr"];

/// An opaque short identifier naming one link.
///
/// Generated codes are ASCII alphanumeric, so they can be embedded in a URL
/// path segment without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Wraps a generated value.
    ///
    /// Callers outside the generators should not need this; the store only
    /// accepts codes produced by a [`crate::domain::generator::CodeGenerator`].
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns true if the code shadows a fixed route.
    pub fn is_reserved(&self) -> bool {
        RESERVED_CODES.contains(&self.0.as_str())
    }

    /// Returns true if every character is safe in a path segment as-is.
    pub fn is_path_safe(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_alphanumeric())
    }
}

impl Borrow<str> for ShortCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
