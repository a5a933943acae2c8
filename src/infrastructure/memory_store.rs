//! In-memory link store guarded by a single reader-writer lock.

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::domain::code::ShortCode;
use crate::domain::entities::ShortLink;
use crate::domain::error::{CapacityExceeded, StoreError};
use crate::domain::generator::CodeGenerator;
use crate::domain::store::LinkStore;

/// Default number of candidates tried per insert.
pub const DEFAULT_MAX_ATTEMPTS: usize = 8;

/// How long the liveness probe waits for the lock.
const PROBE_TIMEOUT: std::time::Duration = std::time::Duration::from_millis(100);

/// One stored link. The counter lives in the same entry as the URL, so the
/// two are created and dropped together.
#[derive(Debug)]
struct Entry {
    target_url: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    clicks: AtomicU64,
}

impl Entry {
    fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| now >= e)
    }

    fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_expired_at(now)
    }

    fn snapshot(&self, code: &ShortCode) -> ShortLink {
        ShortLink {
            identifier: code.clone(),
            target_url: self.target_url.clone(),
            click_count: self.clicks.load(Ordering::Acquire),
            created_at: self.created_at,
            expires_at: self.expires_at,
        }
    }
}

/// Returns true if `code` names a live link. An expired entry no longer
/// occupies its code. Shared by `exists` and the insert collision check.
fn is_occupied(links: &HashMap<ShortCode, Entry>, code: &str, now: DateTime<Utc>) -> bool {
    links.get(code).is_some_and(|entry| entry.is_live_at(now))
}

/// Volatile [`LinkStore`] for a single process.
///
/// # Synchronization
///
/// - `insert` holds the write lock across generate, check and publish, so two
///   inserts can never both see a candidate as free.
/// - `resolve` holds the read lock and bumps the entry's atomic counter; it
///   can only ever see fully built entries.
/// - No I/O happens while the lock is held.
pub struct MemoryLinkStore {
    links: RwLock<HashMap<ShortCode, Entry>>,
    generator: Box<dyn CodeGenerator>,
    max_attempts: usize,
    ttl: Option<Duration>,
}

impl MemoryLinkStore {
    /// Creates an empty store.
    ///
    /// `max_attempts` is clamped to at least one.
    pub fn new(generator: Box<dyn CodeGenerator>, max_attempts: usize) -> Self {
        Self {
            links: RwLock::new(HashMap::new()),
            generator,
            max_attempts: max_attempts.max(1),
            ttl: None,
        }
    }

    /// Gives every new link an expiry `ttl` after creation.
    pub fn with_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Drops `code` if it is still expired at `now`.
    fn remove_if_expired(&self, code: &str, now: DateTime<Utc>) {
        let mut links = self.links.write();
        if links.get(code).is_some_and(|entry| entry.is_expired_at(now)) {
            links.remove(code);
            debug!(code, "Expired short link removed");
        }
    }

    /// Runs `read` against a live entry, purging it if it turned out expired.
    fn with_live_entry<T>(
        &self,
        code: &str,
        read: impl FnOnce(&ShortCode, &Entry) -> T,
    ) -> Result<T, StoreError> {
        let now = Utc::now();
        {
            let links = self.links.read();
            match links.get_key_value(code) {
                Some((key, entry)) if !entry.is_expired_at(now) => return Ok(read(key, entry)),
                Some(_) => {}
                None => return Err(StoreError::NotFound),
            }
        }
        self.remove_if_expired(code, now);
        Err(StoreError::NotFound)
    }
}

impl LinkStore for MemoryLinkStore {
    fn insert(&self, target_url: &str) -> Result<ShortLink, CapacityExceeded> {
        let mut links = self.links.write();

        for attempt in 1..=self.max_attempts {
            let candidate = self.generator.generate();
            let created_at = Utc::now();

            if candidate.is_reserved() || is_occupied(&links, candidate.as_str(), created_at) {
                debug!(code = %candidate, attempt, "Identifier collision, regenerating");
                continue;
            }

            // A TTL reaching past the representable range means no expiry.
            let entry = Entry {
                target_url: target_url.to_string(),
                created_at,
                expires_at: self
                    .ttl
                    .and_then(|ttl| created_at.checked_add_signed(ttl)),
                clicks: AtomicU64::new(0),
            };
            let link = entry.snapshot(&candidate);
            links.insert(candidate, entry);

            return Ok(link);
        }

        Err(CapacityExceeded {
            attempts: self.max_attempts,
        })
    }

    fn resolve(&self, code: &str) -> Result<String, StoreError> {
        self.with_live_entry(code, |_, entry| {
            entry.clicks.fetch_add(1, Ordering::AcqRel);
            entry.target_url.clone()
        })
    }

    fn clicks(&self, code: &str) -> Result<u64, StoreError> {
        self.with_live_entry(code, |_, entry| entry.clicks.load(Ordering::Acquire))
    }

    fn get(&self, code: &str) -> Result<ShortLink, StoreError> {
        self.with_live_entry(code, |key, entry| entry.snapshot(key))
    }

    fn exists(&self, code: &str) -> bool {
        is_occupied(&self.links.read(), code, Utc::now())
    }

    fn len(&self) -> usize {
        let now = Utc::now();
        self.links
            .read()
            .values()
            .filter(|entry| entry.is_live_at(now))
            .count()
    }

    fn purge_expired(&self) -> usize {
        if self.ttl.is_none() {
            return 0;
        }

        let now = Utc::now();
        let mut links = self.links.write();
        let before = links.len();
        links.retain(|_, entry| !entry.is_expired_at(now));
        before - links.len()
    }

    fn is_available(&self) -> bool {
        self.links.try_read_for(PROBE_TIMEOUT).is_some()
    }
}
