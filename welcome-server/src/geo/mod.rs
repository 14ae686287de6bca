//! IP geolocation lookup.
//!
//! This module provides an HTTP client for a third-party geolocation
//! service that locates the caller from its public address, plus the
//! great-circle distance used to tell visitors how far away they are.
//!
//! Key characteristics of the service:
//! - A single parameterless GET; the caller is identified by its address
//! - Success is signalled in-band by `"code": "Success"`, not by HTTP status
//! - Province, city and district are only filled in for Chinese addresses

mod client;
mod distance;
mod error;
mod mock;
mod source;
mod types;

pub use client::{GeoClient, GeoClientConfig};
pub use distance::{Coordinate, EARTH_RADIUS_KM, REFERENCE_POINT, distance_km};
pub use error::FetchError;
pub use mock::MockGeoClient;
pub use source::{GeoBackend, GeoSource};
pub use types::{GeoRecord, LocationData, LocationResponse, SUCCESS_CODE, parse_response};
