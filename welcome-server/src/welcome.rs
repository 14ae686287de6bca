//! Welcome payload orchestration.
//!
//! Locates this host's public address (from cache when fresh, otherwise
//! with one lookup), then resolves the greeting, address and distance for
//! it. The lookup takes no per-request input, so one cached record serves
//! every caller.
//!
//! Concurrent callers that both miss the cache each perform their own
//! lookup; the last one to finish wins the cache slot. Both records are
//! complete, so the race only costs a redundant request.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, Timelike};
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::{Clock, LocationCache, SystemClock};
use crate::geo::{Coordinate, FetchError, GeoRecord, GeoSource, REFERENCE_POINT};
use crate::greeting::{UNKNOWN, resolve, time_greeting};

/// Cache key for the looked-up location.
pub const LOCATION_KEY: &str = "location";

/// How long a lookup stays fresh (24 hours).
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Configuration for the welcome service.
#[derive(Debug, Clone)]
pub struct WelcomeConfig {
    /// Key the lookup is cached under.
    pub cache_key: String,

    /// TTL for the cached lookup.
    pub cache_ttl: Duration,

    /// Point distances are measured from.
    pub reference: Coordinate,
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            cache_key: LOCATION_KEY.to_string(),
            cache_ttl: DEFAULT_TTL,
            reference: REFERENCE_POINT,
        }
    }
}

/// Everything needed to render a welcome.
///
/// Computed fresh per request; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomePayload {
    pub address: String,
    pub greeting: String,
    pub distance_km: u32,
    /// Public address the service saw, or `未知` when it did not report one.
    pub ip: String,
    pub time_greeting: String,
}

impl WelcomePayload {
    /// Build the payload for `record` at local hour `hour`.
    pub fn compose(record: &GeoRecord, reference: Coordinate, hour: u32) -> Self {
        let resolution = resolve(record, reference);

        Self {
            address: resolution.address,
            greeting: resolution.greeting.to_string(),
            distance_km: resolution.distance_km,
            ip: record.ip.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            time_greeting: time_greeting(hour).to_string(),
        }
    }
}

/// Produces welcome payloads, caching the location lookup.
#[derive(Debug)]
pub struct WelcomeService<S> {
    source: S,
    cache: LocationCache,
    clock: Arc<dyn Clock>,
    config: WelcomeConfig,
}

impl<S: GeoSource> WelcomeService<S> {
    /// Create a service on wall-clock time with default configuration.
    pub fn new(source: S) -> Self {
        Self::with_clock(source, Arc::new(SystemClock), WelcomeConfig::default())
    }

    /// Create a service with an explicit clock and configuration.
    pub fn with_clock(source: S, clock: Arc<dyn Clock>, config: WelcomeConfig) -> Self {
        Self {
            source,
            cache: LocationCache::new(clock.clone()),
            clock,
            config,
        }
    }

    /// Resolve the welcome from the shared cached lookup.
    ///
    /// Fails only when the cache is cold and the lookup fails; nothing is
    /// cached in that case.
    pub async fn resolve_welcome(&self) -> Result<WelcomePayload, FetchError> {
        let record = self.locate().await?;
        let hour = self.clock.now().with_timezone(&Local).hour();

        Ok(WelcomePayload::compose(&record, self.config.reference, hour))
    }

    async fn locate(&self) -> Result<GeoRecord, FetchError> {
        let key = self.config.cache_key.as_str();

        if let Some(record) = self.cache.get(key).await {
            debug!(key, "location cache hit");
            return Ok(record);
        }

        debug!(key, "location cache miss, looking up");
        let record = self.source.lookup().await.inspect_err(|e| {
            warn!(error = %e, "geolocation lookup failed");
        })?;

        self.cache
            .set(key, record.clone(), self.config.cache_ttl)
            .await;

        Ok(record)
    }

    /// The location cache (for monitoring).
    pub fn cache(&self) -> &LocationCache {
        &self.cache
    }

    /// The underlying lookup source.
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &WelcomeConfig {
        &self.config
    }
}
