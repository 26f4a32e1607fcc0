//! Two-tier lookup with failover, and the scan handler built on it.

use std::fmt;

use log::{info, warn};

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::geo::GeoRecord;
use crate::provider::{GeoProvider, PrimaryProvider, SecondaryProvider};
use crate::validation::parse_ipv4;

/// Which provider satisfied a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderSource {
    /// The primary provider answered
    Primary,
    /// The primary was absent and the secondary answered
    SecondaryFallback,
}

impl ProviderSource {
    /// Label shown to the user
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderSource::Primary => "Primary",
            ProviderSource::SecondaryFallback => "Secondary (Fallback)",
        }
    }
}

impl fmt::Display for ProviderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record together with the provider that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult {
    /// The normalized record
    pub record: GeoRecord,
    /// Provider that produced it
    pub source: ProviderSource,
}

/// Fallback orchestrator: primary first, secondary only if the primary is absent.
///
/// Holds nothing but the two immutable adapters, so one instance can serve
/// any number of independent scans.
#[derive(Debug, Clone)]
pub struct GeoLookup<P = PrimaryProvider, S = SecondaryProvider> {
    primary: P,
    secondary: S,
}

impl GeoLookup {
    /// Builds both real adapters from the library configuration.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::new(
            PrimaryProvider::new(config.primary.clone())?,
            SecondaryProvider::new(config.secondary.clone())?,
        ))
    }
}

impl<P: GeoProvider, S: GeoProvider> GeoLookup<P, S> {
    /// Wraps two adapters in priority order.
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    /// Looks up `ip`, trying each provider exactly once.
    ///
    /// Returns `None` only when both providers are absent. The first record
    /// obtained is returned unmodified; nothing is merged across providers.
    pub async fn lookup(&self, ip: &str) -> Option<LookupResult> {
        if let Some(record) = self.primary.lookup(ip).await {
            return Some(LookupResult {
                record,
                source: ProviderSource::Primary,
            });
        }

        info!(
            "{} had no result for {}, falling back to {}",
            self.primary.name(),
            ip,
            self.secondary.name()
        );
        if let Some(record) = self.secondary.lookup(ip).await {
            return Some(LookupResult {
                record,
                source: ProviderSource::SecondaryFallback,
            });
        }

        warn!(
            "Lookup for {} failed: both {} and {} unavailable",
            ip,
            self.primary.name(),
            self.secondary.name()
        );
        None
    }
}

/// Outcome of one user-triggered scan.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// The input text is not a valid IPv4 address; no provider was called.
    InvalidInput,
    /// Both providers were absent.
    LookupFailed,
    /// One of the providers returned a record.
    Found(LookupResult),
}

/// Validates `input` and, if it is an IPv4 address, runs the failover lookup.
pub async fn scan<P: GeoProvider, S: GeoProvider>(
    lookup: &GeoLookup<P, S>,
    input: &str,
) -> ScanOutcome {
    if parse_ipv4(input).is_none() {
        info!("Rejected scan input {:?}: not an IPv4 address", input);
        return ScanOutcome::InvalidInput;
    }

    info!("Scanning IP: {}", input);
    match lookup.lookup(input).await {
        Some(result) => {
            info!("Lookup successful for {} (Source: {})", input, result.source);
            ScanOutcome::Found(result)
        }
        None => ScanOutcome::LookupFailed,
    }
}
