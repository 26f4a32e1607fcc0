//! Failover tests running both real adapters against mock providers.
//!
//! A mock server with no expectations panics on drop if it receives any
//! request, which is how these tests assert a provider was never called.

mod helpers;

use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::json;

use helpers::{ipapi_body, keycdn_body, lookup_against, same_data};
use ip_scanner::{scan, ProviderSource, ScanOutcome};

#[tokio::test]
async fn test_primary_success_never_reaches_secondary() {
    let primary = Server::run();
    let secondary = Server::run();
    primary.expect(
        Expectation::matching(request::method_path("GET", "/geo.json"))
            .respond_with(json_encoded(keycdn_body())),
    );

    let lookup = lookup_against(&primary, &secondary);
    let result = lookup.lookup("8.8.8.8").await.expect("primary should answer");

    assert_eq!(result.source, ProviderSource::Primary);
    assert_eq!(result.record.city.as_deref(), Some("Mountain View"));
    assert_eq!(result.record.asn.as_deref(), Some("AS15169"));
}

#[tokio::test]
async fn test_primary_error_status_falls_back_to_secondary() {
    let primary = Server::run();
    let secondary = Server::run();
    primary.expect(
        Expectation::matching(request::method_path("GET", "/geo.json")).respond_with(
            json_encoded(json!({"status": "error", "description": "Rate limit exceeded"})),
        ),
    );
    secondary.expect(
        Expectation::matching(request::method_path("GET", "/json/8.8.8.8"))
            .respond_with(json_encoded(ipapi_body())),
    );

    let lookup = lookup_against(&primary, &secondary);
    let result = lookup.lookup("8.8.8.8").await.expect("secondary should answer");

    assert_eq!(result.source, ProviderSource::SecondaryFallback);
    assert_eq!(result.record.city.as_deref(), Some("Ashburn"));
    assert_eq!(result.record.network, result.record.asn);
    assert!(!result.record.is_eu);
    assert!(result.record.device_type.is_none());
    assert!(result.record.user_agent.is_none());
}

#[tokio::test]
async fn test_primary_garbage_body_falls_back() {
    let primary = Server::run();
    let secondary = Server::run();
    primary.expect(
        Expectation::matching(request::method_path("GET", "/geo.json"))
            .respond_with(status_code(502).body("<html>Bad Gateway</html>")),
    );
    secondary.expect(
        Expectation::matching(request::method_path("GET", "/json/8.8.8.8"))
            .respond_with(json_encoded(ipapi_body())),
    );

    let lookup = lookup_against(&primary, &secondary);
    let result = lookup.lookup("8.8.8.8").await.expect("secondary should answer");
    assert_eq!(result.source, ProviderSource::SecondaryFallback);
}

#[tokio::test]
async fn test_both_providers_failing_is_total_failure() {
    let primary = Server::run();
    let secondary = Server::run();
    primary.expect(
        Expectation::matching(request::method_path("GET", "/geo.json"))
            .respond_with(json_encoded(json!({"status": "success", "data": {"geo": {}}}))),
    );
    secondary.expect(
        Expectation::matching(request::method_path("GET", "/json/10.0.0.1")).respond_with(
            json_encoded(json!({"status": "fail", "message": "private range"})),
        ),
    );

    let lookup = lookup_against(&primary, &secondary);
    assert!(lookup.lookup("10.0.0.1").await.is_none());
}

#[tokio::test]
async fn test_each_provider_tried_once_per_scan() {
    let primary = Server::run();
    let secondary = Server::run();
    primary.expect(
        Expectation::matching(request::method_path("GET", "/geo.json"))
            .times(2)
            .respond_with(status_code(500)),
    );
    secondary.expect(
        Expectation::matching(request::method_path("GET", "/json/8.8.8.8"))
            .times(2)
            .respond_with(json_encoded(ipapi_body())),
    );

    let lookup = lookup_against(&primary, &secondary);
    let first = lookup.lookup("8.8.8.8").await.unwrap();
    let second = lookup.lookup("8.8.8.8").await.unwrap();
    assert!(same_data(&first.record, &second.record));
}

#[tokio::test]
async fn test_scan_invalid_input_sends_no_requests() {
    let primary = Server::run();
    let secondary = Server::run();

    let lookup = lookup_against(&primary, &secondary);
    assert_eq!(scan(&lookup, "not.an.ip").await, ScanOutcome::InvalidInput);
    assert_eq!(scan(&lookup, "1.2.3.4.5").await, ScanOutcome::InvalidInput);
    assert_eq!(scan(&lookup, " 8.8.8.8").await, ScanOutcome::InvalidInput);
}
