//! Storage contract for short links.

use crate::domain::entities::ShortLink;
use crate::domain::error::{CapacityExceeded, StoreError};

/// Authoritative mapping from identifier to target URL and click counter.
///
/// All operations are synchronous and complete without blocking on I/O.
/// Implementations must make identifier reservation atomic with respect to
/// other inserts, and must make each resolve's counter increment part of the
/// same logical step as its read.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory_store::MemoryLinkStore`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkStore: Send + Sync {
    /// Reserves a fresh identifier and records `target_url` under it with a
    /// zero click count.
    ///
    /// The URL is stored as given; validation happens before this call.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] if no unused identifier was
    /// found within the retry bound.
    fn insert(&self, target_url: &str) -> Result<ShortLink, CapacityExceeded>;

    /// Returns the target URL and counts one click.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for unknown or expired codes. Nothing
    /// is mutated in that case.
    fn resolve(&self, code: &str) -> Result<String, StoreError>;

    /// Returns the click count without touching it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for unknown or expired codes.
    fn clicks(&self, code: &str) -> Result<u64, StoreError>;

    /// Returns a snapshot of the link without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for unknown or expired codes.
    fn get(&self, code: &str) -> Result<ShortLink, StoreError>;

    /// Returns true if an entry is stored under `code`.
    fn exists(&self, code: &str) -> bool;

    /// Number of stored links.
    fn len(&self) -> usize;

    /// Returns true if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every expired link together with its counter.
    ///
    /// Returns the number of links removed.
    fn purge_expired(&self) -> usize;

    /// Returns true if the store can serve requests right now.
    fn is_available(&self) -> bool;
}
