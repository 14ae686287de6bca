//! Time-limited cache for the host's geolocation lookup.
//!
//! Holds a single entry: the most recent successful lookup. Expiry is
//! checked lazily on read; nothing sweeps the cache in the background.
//! Time comes from an injected [`Clock`] so TTL behaviour can be driven
//! deterministically in tests.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;
use tracing::trace;

use crate::geo::GeoRecord;

/// Source of the current time.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same instant.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Jump to `instant`.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    /// Move forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now = add_saturating(*now, by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn add_saturating(instant: DateTime<Utc>, by: Duration) -> DateTime<Utc> {
    TimeDelta::from_std(by)
        .ok()
        .and_then(|delta| instant.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// The one cached lookup.
#[derive(Debug, Clone)]
struct CacheEntry {
    key: String,
    value: GeoRecord,
    expires_at: DateTime<Utc>,
}

/// Single-slot TTL cache for geolocation records.
///
/// A `set` under any key replaces whatever was stored before, so at most
/// one entry exists at a time.
#[derive(Debug)]
pub struct LocationCache {
    slot: RwLock<Option<CacheEntry>>,
    clock: Arc<dyn Clock>,
}

impl LocationCache {
    /// Create an empty cache reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: RwLock::new(None),
            clock,
        }
    }

    /// Create an empty cache on wall-clock time.
    pub fn with_system_clock() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    /// Get the record stored under `key`, if it has not expired.
    ///
    /// An expired entry is evicted on the way out.
    pub async fn get(&self, key: &str) -> Option<GeoRecord> {
        let now = self.clock.now();

        {
            let slot = self.slot.read().await;
            match slot.as_ref() {
                None => return None,
                Some(entry) if now < entry.expires_at => {
                    return (entry.key == key).then(|| entry.value.clone());
                }
                Some(_) => {}
            }
        }

        let mut slot = self.slot.write().await;
        // Re-check: a concurrent set may have refreshed the slot.
        if slot.as_ref().is_some_and(|entry| now >= entry.expires_at) {
            trace!(key, "evicting expired location entry");
            *slot = None;
        }
        None
    }

    /// Store `value` under `key` for `ttl`, replacing any previous entry.
    pub async fn set(&self, key: impl Into<String>, value: GeoRecord, ttl: Duration) {
        let expires_at = add_saturating(self.clock.now(), ttl);
        let entry = CacheEntry {
            key: key.into(),
            value,
            expires_at,
        };

        *self.slot.write().await = Some(entry);
    }

    /// Number of stored entries (0 or 1), counting ones not yet evicted.
    pub async fn entry_count(&self) -> usize {
        usize::from(self.slot.read().await.is_some())
    }

    /// When the current entry expires, if there is one.
    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.slot.read().await.as_ref().map(|entry| entry.expires_at)
    }
}
