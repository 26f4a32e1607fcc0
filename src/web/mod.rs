//! Browser UI for the scanner.
//!
//! Endpoints:
//! - `/` - scan form
//! - `/scan?ip=...` - HTML result page
//! - `/api/scan?ip=...` - JSON result (raw normalized record)
//! - `/health` - liveness probe
//!
//! Each request runs its own scan to completion; handlers share only the
//! immutable [`GeoLookup`].

mod handlers;
mod render;
mod types;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::lookup::GeoLookup;
use crate::provider::GeoProvider;
use handlers::{health_handler, index_handler, scan_api_handler, scan_page_handler};
pub use render::{INVALID_INPUT_MESSAGE, LOOKUP_FAILED_MESSAGE};

/// Builds the router serving the scan UI.
pub fn router<P, S>(lookup: Arc<GeoLookup<P, S>>) -> Router
where
    P: GeoProvider + Send + Sync + 'static,
    S: GeoProvider + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index_handler))
        .route("/scan", get(scan_page_handler::<P, S>))
        .route("/api/scan", get(scan_api_handler::<P, S>))
        .route("/health", get(health_handler))
        .with_state(lookup)
}

/// Binds `bind:port` and serves the scan UI until the process exits.
pub async fn start_server<P, S>(
    bind: &str,
    port: u16,
    lookup: Arc<GeoLookup<P, S>>,
) -> Result<(), anyhow::Error>
where
    P: GeoProvider + Send + Sync + 'static,
    S: GeoProvider + Send + Sync + 'static,
{
    let app = router(lookup);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind web UI to {}:{}: {}", bind, port, e))?;

    log::info!("IP scanner listening on http://{}:{}/", bind, port);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Web UI server error: {}", e))?;

    Ok(())
}
