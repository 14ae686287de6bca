//! Web layer for the welcome service.
//!
//! Serves the welcome payload as JSON for the site's front end to render.

mod dto;
mod routes;
mod state;

pub use dto::ErrorResponse;
pub use routes::{AppError, create_router};
pub use state::AppState;
