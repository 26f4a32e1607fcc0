//! Web request and response data structures.

use serde::{Deserialize, Serialize};

use crate::geo::GeoRecord;

/// Query string for `/scan` and `/api/scan`
#[derive(Debug, Deserialize)]
pub struct ScanParams {
    #[serde(default)]
    pub ip: String,
}

/// JSON response for a successful `/api/scan`
#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub source: &'static str,
    pub record: GeoRecord,
}

/// JSON response for a failed `/api/scan`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}
