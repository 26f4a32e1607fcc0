//! HTTP handlers for the scan UI.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};

use super::render::{index_page, scan_page, INVALID_INPUT_MESSAGE, LOOKUP_FAILED_MESSAGE};
use super::types::{ErrorResponse, ScanParams, ScanResponse};
use crate::lookup::{scan, GeoLookup, ScanOutcome};
use crate::provider::GeoProvider;

/// Landing page with the scan form
pub async fn index_handler() -> Html<String> {
    Html(index_page())
}

/// Runs one scan and renders the result page
pub async fn scan_page_handler<P, S>(
    State(lookup): State<Arc<GeoLookup<P, S>>>,
    Query(params): Query<ScanParams>,
) -> Html<String>
where
    P: GeoProvider + Send + Sync + 'static,
    S: GeoProvider + Send + Sync + 'static,
{
    let outcome = scan(&*lookup, &params.ip).await;
    Html(scan_page(&params.ip, &outcome))
}

/// Runs one scan and returns the normalized record as JSON
pub async fn scan_api_handler<P, S>(
    State(lookup): State<Arc<GeoLookup<P, S>>>,
    Query(params): Query<ScanParams>,
) -> Response
where
    P: GeoProvider + Send + Sync + 'static,
    S: GeoProvider + Send + Sync + 'static,
{
    match scan(&*lookup, &params.ip).await {
        ScanOutcome::Found(result) => Json(ScanResponse {
            source: result.source.as_str(),
            record: result.record,
        })
        .into_response(),
        ScanOutcome::InvalidInput => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: INVALID_INPUT_MESSAGE,
            }),
        )
            .into_response(),
        ScanOutcome::LookupFailed => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: LOOKUP_FAILED_MESSAGE,
            }),
        )
            .into_response(),
    }
}

/// Liveness probe
pub async fn health_handler() -> &'static str {
    "ok"
}
