//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::geo::FetchError;
use crate::welcome::WelcomePayload;

use super::dto::ErrorResponse;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/welcome", get(welcome))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Welcome payload built from the cached lookup of this host's own public
/// address. The request's origin is not consulted, so every caller gets the
/// same location until the cache entry expires.
async fn welcome(State(state): State<AppState>) -> Result<Json<WelcomePayload>, AppError> {
    let payload = state.welcome.resolve_welcome().await?;
    Ok(Json(payload))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The geolocation lookup failed; there is nothing to show.
    Upstream { message: String },
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
        };

        debug!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
