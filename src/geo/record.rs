//! Unified geolocation record.

use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::config::RECORD_KIND_IPV4;

/// Provider-agnostic geolocation and network metadata for one IP.
///
/// Only `ip` and `kind` are guaranteed. Everything else is best effort and
/// stays `None` when the provider did not report it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    /// Dotted-quad address the record describes
    pub ip: String,
    /// Address family, always `IPv4`
    #[serde(rename = "type")]
    pub kind: String,
    /// Reverse DNS hostname
    pub reverse_dns: Option<String>,

    /// Continent name
    pub continent: Option<String>,
    /// Country name
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    pub country_code: Option<String>,
    /// Region or state name
    pub region: Option<String>,
    /// City name
    pub city: Option<String>,
    /// IANA timezone name
    pub timezone: Option<String>,
    /// ISO-8601 local time, synthesized at lookup time when the provider has none
    pub local_time_iso: String,
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
    /// Postal or ZIP code
    pub postal_code: Option<String>,

    /// Autonomous system, e.g. `AS15169`
    pub asn: Option<String>,
    /// Internet service provider
    pub isp: Option<String>,
    /// Organization holding the address
    pub organization: Option<String>,
    /// Network the address belongs to
    pub network: Option<String>,

    /// Whether the address geolocates to an EU member state
    pub is_eu: bool,
    /// Device class, rarely reported
    pub device_type: Option<String>,
    /// User-Agent, rarely reported
    pub user_agent: Option<String>,
}

impl GeoRecord {
    /// Creates a record carrying only the required fields.
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            kind: RECORD_KIND_IPV4.to_string(),
            reverse_dns: None,
            continent: None,
            country: None,
            country_code: None,
            region: None,
            city: None,
            timezone: None,
            local_time_iso: local_time_now(),
            latitude: None,
            longitude: None,
            postal_code: None,
            asn: None,
            isp: None,
            organization: None,
            network: None,
            is_eu: false,
            device_type: None,
            user_agent: None,
        }
    }

    /// Compares two records while ignoring `local_time_iso`.
    #[cfg(test)]
    pub(crate) fn same_data_as(&self, other: &GeoRecord) -> bool {
        let mut other = other.clone();
        other.local_time_iso.clone_from(&self.local_time_iso);
        *self == other
    }
}

/// Current local wall-clock time as an ISO-8601 string with offset.
pub fn local_time_now() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Drops empty or whitespace-only strings.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
