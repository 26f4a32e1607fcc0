//! Secondary provider: ip-api.com JSON API.
//!
//! Request: `GET <endpoint>/<ip>?fields=66846719`.
//! Response: a flat camelCase object with `status` set to `"success"` or `"fail"`.

use serde::Deserialize;

use super::{settle, GeoProvider};
use crate::config::{ProviderConfig, SECONDARY_FIELDS};
use crate::error_handling::{InitializationError, ProviderError};
use crate::geo::{non_blank, GeoRecord};
use crate::initialization::init_client;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IpApiResponse {
    status: Option<String>,
    message: Option<String>,
    continent: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
    region_name: Option<String>,
    city: Option<String>,
    timezone: Option<String>,
    zip: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    isp: Option<String>,
    org: Option<String>,
    /// ASN and its holder in one string, e.g. `AS15169 Google LLC`
    #[serde(rename = "as")]
    as_field: Option<String>,
    reverse: Option<String>,
}

impl IpApiResponse {
    fn into_record(self, queried_ip: &str) -> GeoRecord {
        let asn = non_blank(self.as_field);

        // local_time_iso keeps the wall-clock value GeoRecord::new stamps
        let mut record = GeoRecord::new(queried_ip);
        record.reverse_dns = non_blank(self.reverse);
        record.continent = non_blank(self.continent);
        record.country = non_blank(self.country);
        record.country_code = non_blank(self.country_code);
        record.region = non_blank(self.region_name);
        record.city = non_blank(self.city);
        record.timezone = non_blank(self.timezone);
        record.latitude = self.lat;
        record.longitude = self.lon;
        record.postal_code = non_blank(self.zip);
        record.network = asn.clone();
        record.asn = asn;
        record.isp = non_blank(self.isp);
        record.organization = non_blank(self.org);
        record.is_eu = false;
        record.device_type = None;
        record.user_agent = None;
        record
    }
}

fn parse_response(queried_ip: &str, body: &str) -> Result<GeoRecord, ProviderError> {
    let response: IpApiResponse = serde_json::from_str(body)?;

    if response.status.as_deref() == Some("fail") {
        let reason = response.message.unwrap_or_else(|| "status=fail".to_string());
        return Err(ProviderError::Rejected(reason));
    }

    Ok(response.into_record(queried_ip))
}

/// Adapter for the ip-api.com endpoint.
#[derive(Debug, Clone)]
pub struct SecondaryProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl SecondaryProvider {
    /// Builds the adapter and its HTTP client from immutable settings.
    pub fn new(config: ProviderConfig) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        Ok(Self { client, config })
    }

    fn url_for(&self, ip: &str) -> String {
        format!("{}/{}", self.config.endpoint.trim_end_matches('/'), ip)
    }

    async fn fetch(&self, ip: &str) -> Result<GeoRecord, ProviderError> {
        let response = self
            .client
            .get(self.url_for(ip))
            .query(&[("fields", SECONDARY_FIELDS)])
            .send()
            .await?;
        let body = response.text().await?;
        parse_response(ip, &body)
    }
}

impl GeoProvider for SecondaryProvider {
    fn name(&self) -> &'static str {
        "ip-api.com"
    }

    async fn lookup(&self, ip: &str) -> Option<GeoRecord> {
        settle(self.name(), ip, self.fetch(ip).await)
    }
}
