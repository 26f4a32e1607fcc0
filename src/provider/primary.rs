//! Primary provider: KeyCDN geolocation API.
//!
//! Request: `GET <endpoint>?host=<ip>` with a `keycdn-tools:<url>` User-Agent.
//! Response: `{"status": "success", "description": ..., "data": {"geo": {...}}}`.

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

use super::{settle, GeoProvider};
use crate::config::{ProviderConfig, PRIMARY_HOST_PARAM};
use crate::error_handling::{InitializationError, ProviderError};
use crate::geo::{local_time_now, non_blank, GeoRecord};
use crate::initialization::init_client;

/// KeyCDN reports the ASN as a number; tolerate a string as well.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AsnField {
    Number(u64),
    Text(String),
}

impl AsnField {
    fn into_label(self) -> Option<String> {
        match self {
            AsnField::Number(n) => Some(format!("AS{n}")),
            AsnField::Text(s) => non_blank(Some(s)),
        }
    }
}

/// The `data.geo` payload. Unknown fields (`host`, `metro_code`, ...) are ignored.
#[derive(Debug, Default, Deserialize)]
struct KeyCdnGeo {
    ip: Option<String>,
    rdns: Option<String>,
    continent_name: Option<String>,
    country_name: Option<String>,
    country_code: Option<String>,
    region_name: Option<String>,
    city: Option<String>,
    timezone: Option<String>,
    datetime: Option<String>,
    local_time: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    postal_code: Option<String>,
    asn: Option<AsnField>,
    isp: Option<String>,
    provider: Option<String>,
    organization: Option<String>,
    network: Option<String>,
    is_eu: Option<bool>,
    device_type: Option<String>,
    user_agent: Option<String>,
}

impl KeyCdnGeo {
    fn into_record(self, queried_ip: &str) -> GeoRecord {
        let local_time_iso = self
            .datetime
            .as_deref()
            .or(self.local_time.as_deref())
            .and_then(normalize_local_time)
            .unwrap_or_else(local_time_now);

        let ip = non_blank(self.ip).unwrap_or_else(|| queried_ip.to_string());
        let mut record = GeoRecord::new(ip);
        record.reverse_dns = non_blank(self.rdns);
        record.continent = non_blank(self.continent_name);
        record.country = non_blank(self.country_name);
        record.country_code = non_blank(self.country_code);
        record.region = non_blank(self.region_name);
        record.city = non_blank(self.city);
        record.timezone = non_blank(self.timezone);
        record.local_time_iso = local_time_iso;
        record.latitude = self.latitude;
        record.longitude = self.longitude;
        record.postal_code = non_blank(self.postal_code);
        record.asn = self.asn.and_then(AsnField::into_label);
        record.isp = non_blank(self.isp).or_else(|| non_blank(self.provider));
        record.organization = non_blank(self.organization);
        record.network = non_blank(self.network);
        record.is_eu = self.is_eu.unwrap_or(false);
        record.device_type = non_blank(self.device_type);
        record.user_agent = non_blank(self.user_agent);
        record
    }
}

/// Converts KeyCDN's `YYYY-MM-DD HH:MM:SS` (or an RFC 3339 value) to ISO-8601.
fn normalize_local_time(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if DateTime::parse_from_rfc3339(raw).is_ok() {
        return Some(raw.to_string());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S").to_string())
}

/// Maps a KeyCDN response body to a record.
///
/// The HTTP status code is not consulted; KeyCDN reports failures in the body.
fn parse_response(queried_ip: &str, body: &str) -> Result<GeoRecord, ProviderError> {
    let value: Value = serde_json::from_str(body)?;

    if value.get("status").and_then(Value::as_str) == Some("error") {
        let reason = value
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("status=error");
        return Err(ProviderError::Rejected(reason.to_string()));
    }

    match value.pointer("/data/geo") {
        Some(Value::Object(geo)) if !geo.is_empty() => {
            let geo: KeyCdnGeo = serde_json::from_value(Value::Object(geo.clone()))?;
            Ok(geo.into_record(queried_ip))
        }
        _ => Err(ProviderError::MissingPayload),
    }
}

/// Adapter for the KeyCDN geolocation endpoint.
#[derive(Debug, Clone)]
pub struct PrimaryProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl PrimaryProvider {
    /// Builds the adapter and its HTTP client from immutable settings.
    pub fn new(config: ProviderConfig) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        Ok(Self { client, config })
    }

    async fn fetch(&self, ip: &str) -> Result<GeoRecord, ProviderError> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[(PRIMARY_HOST_PARAM, ip)])
            .send()
            .await?;
        let body = response.text().await?;
        parse_response(ip, &body)
    }
}

impl GeoProvider for PrimaryProvider {
    fn name(&self) -> &'static str {
        "KeyCDN"
    }

    async fn lookup(&self, ip: &str) -> Option<GeoRecord> {
        settle(self.name(), ip, self.fetch(ip).await)
    }
}
