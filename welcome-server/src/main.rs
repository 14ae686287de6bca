use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use welcome_server::geo::{GeoBackend, GeoClient, GeoClientConfig, MockGeoClient};
use welcome_server::web::{AppState, create_router};
use welcome_server::welcome::WelcomeService;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr: SocketAddr = std::env::var("WELCOME_BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .expect("WELCOME_BIND_ADDR must be a socket address");

    // Serve from a captured response instead of the live API, if asked
    let backend = match std::env::var("GEO_MOCK_FILE") {
        Ok(path) => {
            info!(%path, "using mock geolocation data");
            let mock = MockGeoClient::from_file(&path).expect("Failed to load mock location");
            GeoBackend::Mock(mock)
        }
        Err(_) => {
            let mut config = GeoClientConfig::new();
            if let Ok(url) = std::env::var("GEO_API_URL") {
                config = config.with_url(url);
            }
            if let Ok(secs) = std::env::var("GEO_TIMEOUT_SECS") {
                let secs = secs.parse().expect("GEO_TIMEOUT_SECS must be a whole number");
                config = config.with_timeout(secs);
            }
            let client = GeoClient::new(config).expect("Failed to create geolocation client");
            info!(url = %client.url(), "using live geolocation service");
            GeoBackend::Live(client)
        }
    };

    let state = AppState::new(WelcomeService::new(backend));
    let app = create_router(state);

    info!("welcome server listening on http://{addr}");
    info!("  GET  /health       - Health check");
    info!("  GET  /api/welcome  - Welcome payload (host lookup, shared by all requests)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
