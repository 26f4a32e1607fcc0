// Shared test helpers for building providers against mock servers.
//
// This module provides canned provider responses and adapter constructors used
// across multiple test files.

use std::time::Duration;

use httptest::Server;
use serde_json::{json, Value};

use ip_scanner::{GeoLookup, GeoRecord, PrimaryProvider, ProviderConfig, SecondaryProvider};

/// Path the mock primary provider serves.
#[allow(dead_code)] // Used by other test files
pub const PRIMARY_PATH: &str = "/geo.json";

/// Path prefix the mock secondary provider serves.
#[allow(dead_code)] // Used by other test files
pub const SECONDARY_PATH: &str = "/json";

/// A complete KeyCDN success body for 8.8.8.8.
#[allow(dead_code)] // Used by other test files
pub fn keycdn_body() -> Value {
    json!({
        "status": "success",
        "description": "Data successfully received.",
        "data": {
            "geo": {
                "host": "8.8.8.8",
                "ip": "8.8.8.8",
                "rdns": "dns.google",
                "asn": 15169,
                "isp": "GOOGLE",
                "country_name": "United States",
                "country_code": "US",
                "region_name": "California",
                "city": "Mountain View",
                "postal_code": "94043",
                "continent_name": "North America",
                "latitude": 37.4223,
                "longitude": -122.085,
                "timezone": "America/Los_Angeles",
                "datetime": "2024-05-01 09:30:00"
            }
        }
    })
}

/// A complete ip-api.com success body for 8.8.8.8.
#[allow(dead_code)] // Used by other test files
pub fn ipapi_body() -> Value {
    json!({
        "status": "success",
        "continent": "North America",
        "country": "United States",
        "countryCode": "US",
        "regionName": "Virginia",
        "city": "Ashburn",
        "zip": "20149",
        "lat": 39.03,
        "lon": -77.5,
        "timezone": "America/New_York",
        "isp": "Google LLC",
        "org": "Google Public DNS",
        "as": "AS15169 Google LLC",
        "reverse": "dns.google",
        "query": "8.8.8.8"
    })
}

/// Builds a lookup whose adapters point at the two mock servers.
#[allow(dead_code)] // Used by other test files
pub fn lookup_against(primary: &Server, secondary: &Server) -> GeoLookup {
    let timeout = Duration::from_secs(2);
    let primary = PrimaryProvider::new(ProviderConfig {
        endpoint: primary.url(PRIMARY_PATH).to_string(),
        timeout,
        user_agent: Some("keycdn-tools:https://example.test".to_string()),
    })
    .expect("primary client should build");
    let secondary = SecondaryProvider::new(ProviderConfig {
        endpoint: secondary.url(SECONDARY_PATH).to_string(),
        timeout,
        user_agent: None,
    })
    .expect("secondary client should build");
    GeoLookup::new(primary, secondary)
}

/// Compares two records while ignoring `local_time_iso`, which may be synthesized per call.
#[allow(dead_code)] // Used by other test files
pub fn same_data(a: &GeoRecord, b: &GeoRecord) -> bool {
    let mut b = b.clone();
    b.local_time_iso.clone_from(&a.local_time_iso);
    *a == b
}
