//! Mock geolocation source for running without network access.
//!
//! Serves a fixed record (loaded from a captured JSON response, or built in
//! code) as if it were a live lookup, and counts how often it was asked.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::RwLock;

use super::error::FetchError;
use super::types::{GeoRecord, parse_response};

#[derive(Debug, Clone)]
enum Outcome {
    Record(GeoRecord),
    Fail(String),
}

/// Mock geolocation client.
///
/// Clones share the outcome and the lookup counter.
#[derive(Debug, Clone)]
pub struct MockGeoClient {
    outcome: Arc<RwLock<Outcome>>,
    lookups: Arc<AtomicUsize>,
}

impl MockGeoClient {
    /// Load a captured lookup response from disk.
    ///
    /// The file must be in the live wire format and carry a success code.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| FetchError::Mock {
            message: format!("failed to read {:?}: {}", path, e),
        })?;

        let record = parse_response(&json).map_err(|e| FetchError::Mock {
            message: format!("failed to parse {:?}: {}", path, e),
        })?;

        Ok(Self::with_record(record))
    }

    /// Always answer with `record`.
    pub fn with_record(record: GeoRecord) -> Self {
        Self::from_outcome(Outcome::Record(record))
    }

    /// Always fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::from_outcome(Outcome::Fail(message.into()))
    }

    fn from_outcome(outcome: Outcome) -> Self {
        Self {
            outcome: Arc::new(RwLock::new(outcome)),
            lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Answer subsequent lookups with `record`.
    pub async fn respond_with(&self, record: GeoRecord) {
        *self.outcome.write().await = Outcome::Record(record);
    }

    /// Fail subsequent lookups with `message`.
    pub async fn fail_with(&self, message: impl Into<String>) {
        *self.outcome.write().await = Outcome::Fail(message.into());
    }

    /// Number of lookups served so far, successful or not.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Mimics [`GeoClient::fetch`](super::GeoClient::fetch).
    ///
    /// Yields once before answering, so concurrent callers interleave the
    /// way they would around a real request.
    pub async fn fetch(&self) -> Result<GeoRecord, FetchError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        match &*self.outcome.read().await {
            Outcome::Record(record) => Ok(record.clone()),
            Outcome::Fail(message) => Err(FetchError::Mock {
                message: message.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_fixture() {
        let client = MockGeoClient::from_file("data/mock_location.json").unwrap();
        let record = client.fetch().await.unwrap();

        assert_eq!(record.country, "中国");
        assert_eq!(record.province, "北京市");
        assert_eq!(client.lookups(), 1);
    }

    #[test]
    fn missing_fixture_is_error() {
        let result = MockGeoClient::from_file("data/does_not_exist.json");
        assert!(matches!(result, Err(FetchError::Mock { .. })));
    }

    #[tokio::test]
    async fn failing_client_counts_lookups() {
        let client = MockGeoClient::failing("offline");

        assert!(client.fetch().await.is_err());
        assert!(client.fetch().await.is_err());
        assert_eq!(client.lookups(), 2);
    }

    #[tokio::test]
    async fn outcome_can_be_switched() {
        let client = MockGeoClient::failing("offline");
        assert!(client.fetch().await.is_err());

        let record = GeoRecord {
            ip: None,
            country: "法国".into(),
            province: String::new(),
            city: String::new(),
            district: String::new(),
            longitude: 2.35,
            latitude: 48.85,
        };
        client.respond_with(record.clone()).await;
        assert_eq!(client.fetch().await.unwrap(), record);

        client.fail_with("offline again").await;
        assert!(client.fetch().await.is_err());
    }
}
