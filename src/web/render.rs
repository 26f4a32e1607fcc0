//! HTML rendering for the scan pages.

use std::fmt::Display;
use std::fmt::Write as _;

use crate::config::DEFAULT_SCAN_IP;
use crate::geo::GeoRecord;
use crate::lookup::{LookupResult, ScanOutcome};

/// Shown when the input is not an IPv4 address
pub const INVALID_INPUT_MESSAGE: &str = "Invalid IPv4 address format!";
/// Shown when both providers are absent
pub const LOOKUP_FAILED_MESSAGE: &str =
    "Lookup failed: both the primary and the fallback provider are unavailable.";

/// Escapes text for interpolation into HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn value_or_none<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => escape_html(&v.to_string()),
        None => "None".to_string(),
    }
}

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>IP Scanner</title>\n</head>\n<body>\n\
         <h1>Real-Time IP Address Scanner</h1>\n\
         <p>Fetch <strong>geolocation</strong>, <strong>ISP</strong>, <strong>RDNS</strong>, \
         <strong>ASN</strong>, and more, with automatic failover.</p>\n{body}</body>\n</html>\n"
    )
}

fn scan_form(value: &str) -> String {
    format!(
        "<form action=\"/scan\" method=\"get\">\n\
         <label for=\"ip\">Enter IP Address:</label>\n\
         <input id=\"ip\" name=\"ip\" type=\"text\" value=\"{}\">\n\
         <button type=\"submit\">Scan IP</button>\n</form>\n",
        escape_html(value)
    )
}

fn field(out: &mut String, label: &str, value: String) {
    let _ = writeln!(out, "<p><strong>{label}:</strong> {value}</p>");
}

fn render_record(out: &mut String, record: &GeoRecord) {
    out.push_str("<h2>IP Address Information</h2>\n");
    field(out, "IP", escape_html(&record.ip));
    field(out, "Type", escape_html(&record.kind));
    field(out, "RDNS", value_or_none(&record.reverse_dns));

    out.push_str("<h2>Location</h2>\n");
    field(out, "Continent", value_or_none(&record.continent));
    field(
        out,
        "Country",
        format!(
            "{} ({})",
            value_or_none(&record.country),
            value_or_none(&record.country_code)
        ),
    );
    field(out, "Region", value_or_none(&record.region));
    field(out, "City", value_or_none(&record.city));
    field(out, "Timezone", value_or_none(&record.timezone));
    field(out, "Local Time", escape_html(&record.local_time_iso));
    field(out, "Latitude", value_or_none(&record.latitude));
    field(out, "Longitude", value_or_none(&record.longitude));
    field(out, "Postal Code", value_or_none(&record.postal_code));

    out.push_str("<h2>Network &amp; ISP</h2>\n");
    field(out, "ASN", value_or_none(&record.asn));
    field(out, "ISP", value_or_none(&record.isp));
    field(out, "Organization", value_or_none(&record.organization));
    field(out, "Network", value_or_none(&record.network));

    out.push_str("<h2>Raw JSON Response</h2>\n");
    let raw = serde_json::to_string_pretty(record).unwrap_or_default();
    let _ = writeln!(out, "<pre>{}</pre>", escape_html(&raw));
}

fn render_found(out: &mut String, result: &LookupResult) {
    let _ = writeln!(
        out,
        "<p class=\"success\">Lookup Successful (Source: {})</p>",
        result.source
    );
    render_record(out, &result.record);
}

/// The landing page: an empty scan form.
pub fn index_page() -> String {
    page(&scan_form(DEFAULT_SCAN_IP))
}

/// The form followed by the outcome of scanning `input`.
pub fn scan_page(input: &str, outcome: &ScanOutcome) -> String {
    let mut body = scan_form(input);
    match outcome {
        ScanOutcome::InvalidInput => {
            let _ = writeln!(body, "<p class=\"error\">{INVALID_INPUT_MESSAGE}</p>");
        }
        ScanOutcome::LookupFailed => {
            let _ = writeln!(body, "<p class=\"error\">{LOOKUP_FAILED_MESSAGE}</p>");
        }
        ScanOutcome::Found(result) => render_found(&mut body, result),
    }
    page(&body)
}
