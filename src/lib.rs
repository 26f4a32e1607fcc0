//! ip_scanner library: IPv4 geolocation lookup with provider failover
//!
//! This library validates an IPv4 address, queries a primary geolocation
//! provider (KeyCDN), falls back to a secondary provider (ip-api.com) when the
//! primary has no usable answer, and normalizes either response into one
//! [`GeoRecord`] shape. A small axum web UI renders the result.
//!
//! # Example
//!
//! ```no_run
//! use ip_scanner::{scan, Config, GeoLookup, ScanOutcome};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let lookup = GeoLookup::from_config(&Config::default())?;
//!
//! match scan(&lookup, "8.8.8.8").await {
//!     ScanOutcome::Found(result) => {
//!         println!("{} (Source: {})", result.record.ip, result.source);
//!     }
//!     ScanOutcome::InvalidInput => println!("Invalid IPv4 address format!"),
//!     ScanOutcome::LookupFailed => println!("Both providers unavailable"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are async and require a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod geo;
pub mod initialization;
mod lookup;
mod provider;
mod validation;
pub mod web;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, ProviderConfig};
pub use error_handling::{InitializationError, ProviderError};
pub use geo::{local_time_now, GeoRecord};
pub use lookup::{scan, GeoLookup, LookupResult, ProviderSource, ScanOutcome};
pub use provider::{GeoProvider, PrimaryProvider, SecondaryProvider};
pub use validation::{parse_ipv4, validate_ipv4};
