//! IPv4 input validation.

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;

/// Four dot-separated groups of one to three ASCII digits, nothing else.
static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A(?:[0-9]{1,3}\.){3}[0-9]{1,3}\z").expect("IPv4 pattern is a valid regex")
});

/// Parses user-supplied text as a dotted-quad IPv4 address.
///
/// Each group must be an integer in `[0, 255]`. Leading zeros inside a group
/// are accepted (`010.0.0.1` parses as `10.0.0.1`). Surrounding whitespace,
/// extra or missing groups, signs, and non-ASCII digits are rejected.
///
/// Returns `None` for anything that is not a valid address.
pub fn parse_ipv4(text: &str) -> Option<Ipv4Addr> {
    if !IPV4_PATTERN.is_match(text) {
        return None;
    }

    let mut octets = [0u8; 4];
    for (slot, group) in octets.iter_mut().zip(text.split('.')) {
        *slot = group.parse::<u8>().ok()?;
    }
    Some(Ipv4Addr::from(octets))
}

/// Returns `true` iff `text` is a syntactically valid IPv4 address.
///
/// See [`parse_ipv4`] for the accepted form.
pub fn validate_ipv4(text: &str) -> bool {
    parse_ipv4(text).is_some()
}
