//! Abstraction over where location lookups come from.

use std::future::Future;

use super::client::GeoClient;
use super::error::FetchError;
use super::mock::MockGeoClient;
use super::types::GeoRecord;

/// Something that can locate this host by its public address.
pub trait GeoSource: Send + Sync {
    /// Perform one lookup. Implementations must not retry.
    fn lookup(&self) -> impl Future<Output = Result<GeoRecord, FetchError>> + Send;
}

impl GeoSource for GeoClient {
    async fn lookup(&self) -> Result<GeoRecord, FetchError> {
        self.fetch().await
    }
}

impl GeoSource for MockGeoClient {
    async fn lookup(&self) -> Result<GeoRecord, FetchError> {
        self.fetch().await
    }
}

/// Source chosen at startup: the live service or a local fixture.
#[derive(Debug, Clone)]
pub enum GeoBackend {
    Live(GeoClient),
    Mock(MockGeoClient),
}

impl GeoSource for GeoBackend {
    async fn lookup(&self) -> Result<GeoRecord, FetchError> {
        match self {
            GeoBackend::Live(client) => client.fetch().await,
            GeoBackend::Mock(client) => client.fetch().await,
        }
    }
}
