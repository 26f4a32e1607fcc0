//! Configuration constants.
//!
//! This module defines the endpoints, headers, and timeouts the provider
//! adapters and the web server fall back to when nothing is overridden.

use std::time::Duration;

/// Primary provider endpoint (KeyCDN geolocation API)
pub const PRIMARY_ENDPOINT: &str = "https://tools.keycdn.com/geo.json";

/// Client-identifying User-Agent sent to the primary provider.
///
/// KeyCDN rejects requests whose User-Agent is not of the form
/// `keycdn-tools:<url>`. Override via `--primary-user-agent`.
pub const PRIMARY_USER_AGENT: &str = "keycdn-tools:https://yourdashboard.com";

/// Query parameter carrying the target IP on the primary endpoint
pub const PRIMARY_HOST_PARAM: &str = "host";

/// Secondary provider endpoint (ip-api.com JSON API); the IP is appended as a path segment
pub const SECONDARY_ENDPOINT: &str = "http://ip-api.com/json";

/// ip-api.com field mask selecting the full field set
pub const SECONDARY_FIELDS: &str = "66846719";

/// Per-call provider timeout in seconds
pub const PROVIDER_TIMEOUT_SECS: u64 = 4;

/// Per-call provider timeout
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(PROVIDER_TIMEOUT_SECS);

/// Default bind address for the web UI
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// Default port for the web UI
pub const DEFAULT_PORT: u16 = 8501;

/// IP prefilled in the scan form
pub const DEFAULT_SCAN_IP: &str = "8.8.8.8";

/// Address family reported in every record
pub const RECORD_KIND_IPV4: &str = "IPv4";
