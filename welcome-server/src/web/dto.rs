//! Data transfer objects for web responses.
//!
//! The success body is [`WelcomePayload`](crate::welcome::WelcomePayload)
//! serialised directly.

use serde::Serialize;

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
