//! Geolocation API response DTOs and the validated record built from them.
//!
//! The service omits or nulls fields freely (overseas lookups carry no
//! province/city/district), so every string field is optional on the wire
//! and normalised to an empty string in [`GeoRecord`].

use serde::{Deserialize, Deserializer};

use super::distance::Coordinate;
use super::error::FetchError;

/// Value of `code` on a successful lookup.
pub const SUCCESS_CODE: &str = "Success";

/// Top-level response from the geolocation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationResponse {
    /// Status sentinel; anything other than [`SUCCESS_CODE`] is a failure.
    #[serde(default)]
    pub code: String,

    /// Caller's public address as seen by the service.
    pub ip: Option<String>,

    /// Location payload. Absent on most failures.
    pub data: Option<LocationData>,
}

/// The `data` object of a lookup response.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationData {
    pub country: Option<String>,

    /// Province, autonomous region, municipality or SAR (China only).
    pub prov: Option<String>,

    pub city: Option<String>,

    pub district: Option<String>,

    /// Longitude in degrees. Sent as a number or a numeric string;
    /// NaN when missing, null or blank.
    #[serde(default = "unknown_degrees", deserialize_with = "de_degrees")]
    pub lng: f64,

    /// Latitude in degrees. Same encoding as `lng`.
    #[serde(default = "unknown_degrees", deserialize_with = "de_degrees")]
    pub lat: f64,
}

fn unknown_degrees() -> f64 {
    f64::NAN
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

fn de_degrees<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Number(n)) => Ok(n),
        Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(f64::NAN),
        Some(NumberOrString::String(s)) => s.trim().parse().map_err(serde::de::Error::custom),
        None => Ok(f64::NAN),
    }
}

/// A successful geolocation lookup.
///
/// Immutable once obtained; cached as-is and fed to the greeting resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRecord {
    /// `None` when the service did not report an address.
    pub ip: Option<String>,
    pub country: String,
    pub province: String,
    pub city: String,
    pub district: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoRecord {
    /// The record's position on the globe.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl LocationResponse {
    /// Validate the status sentinel and flatten into a [`GeoRecord`].
    pub fn into_record(self) -> Result<GeoRecord, FetchError> {
        if self.code != SUCCESS_CODE {
            return Err(FetchError::Rejected { code: self.code });
        }

        let data = self.data.ok_or(FetchError::MissingData)?;

        Ok(GeoRecord {
            ip: self.ip.filter(|ip| !ip.is_empty()),
            country: data.country.unwrap_or_default(),
            province: data.prov.unwrap_or_default(),
            city: data.city.unwrap_or_default(),
            district: data.district.unwrap_or_default(),
            longitude: data.lng,
            latitude: data.lat,
        })
    }
}

/// Parse a raw response body into a record.
pub fn parse_response(body: &str) -> Result<GeoRecord, FetchError> {
    let response: LocationResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Json {
            message: e.to_string(),
        })?;
    response.into_record()
}
