//! Geolocation provider adapters.
//!
//! Each adapter wraps one external web service: it builds the request, applies
//! the configured timeout, parses the provider-specific response, and maps it
//! into a [`GeoRecord`]. Every failure mode (timeout, connection error,
//! non-JSON body, explicit error status) collapses into `None`.

mod primary;
mod secondary;

use std::future::Future;

use log::{debug, warn};

use crate::error_handling::ProviderError;
use crate::geo::GeoRecord;

// Re-export public API
pub use primary::PrimaryProvider;
pub use secondary::SecondaryProvider;

/// A source of geolocation records.
pub trait GeoProvider {
    /// Human-readable provider name for log lines.
    fn name(&self) -> &'static str;

    /// Looks up `ip`, returning `None` when the provider has no usable answer.
    fn lookup(&self, ip: &str) -> impl Future<Output = Option<GeoRecord>> + Send;
}

/// Logs the outcome of one provider call and collapses errors into absence.
fn settle(provider: &str, ip: &str, result: Result<GeoRecord, ProviderError>) -> Option<GeoRecord> {
    match result {
        Ok(record) => {
            debug!("{} returned a record for {}", provider, ip);
            Some(record)
        }
        Err(e) => {
            warn!("{} lookup for {} failed ({}): {}", provider, ip, e.as_str(), e);
            None
        }
    }
}
