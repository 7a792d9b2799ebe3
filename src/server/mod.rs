//! Web server for the geocoding proxy.
//!
//! One route does the work: `GET /:query` forwards the place query to
//! the upstream provider and returns the annotated payload. Requests
//! are independent; the shared state is an immutable client handle.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::geocode::GeocodeClient;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub geocoder: Arc<GeocodeClient>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            geocoder: Arc::new(GeocodeClient::new(settings)),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
