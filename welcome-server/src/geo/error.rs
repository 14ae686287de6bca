//! Geolocation lookup error types.

/// Errors that can occur when looking up the caller's location.
///
/// Every variant is a failed lookup: nothing is cached and no welcome
/// payload is produced.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-2xx status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Service answered, but the `code` field was not the success sentinel
    #[error("lookup rejected with code {code:?}")]
    Rejected { code: String },

    /// Success code with no `data` object attached
    #[error("lookup succeeded but returned no location data")]
    MissingData,

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Mock source could not be loaded or was configured to fail
    #[error("mock source: {message}")]
    Mock { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FetchError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = FetchError::Rejected {
            code: "LimitExceeded".into(),
        };
        assert_eq!(err.to_string(), "lookup rejected with code \"LimitExceeded\"");

        let err = FetchError::MissingData;
        assert_eq!(
            err.to_string(),
            "lookup succeeded but returned no location data"
        );

        let err = FetchError::Json {
            message: "expected value".into(),
        };
        assert!(err.to_string().contains("expected value"));
    }
}
