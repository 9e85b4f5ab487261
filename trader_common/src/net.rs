//! URL, host and port helpers.

use std::collections::BTreeMap;

use url::Url;
use url::form_urlencoded;

use crate::consts::{DEFAULT_HOST, DEFAULT_PORT};

/// Append `values` to `base` as a form-encoded query, sorted by key.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use trader_common::net::encode_url_values;
///
/// let values = BTreeMap::from([
///     ("format".to_string(), "json".to_string()),
///     ("env".to_string(), "TEST/DATABASE".to_string()),
/// ]);
/// assert_eq!(
///     encode_url_values("https://www.test.com", &values),
///     "https://www.test.com?env=TEST%2FDATABASE&format=json"
/// );
/// ```
pub fn encode_url_values(base: &str, values: &BTreeMap<String, String>) -> String {
    if values.is_empty() {
        return base.to_string();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(values)
        .finish();
    format!("{base}?{query}")
}

/// Split `host:port`, accepting bracketed IPv6 hosts.
fn split_host_port(address: &str) -> Option<(&str, &str)> {
    if let Some(rest) = address.strip_prefix('[') {
        let (host, tail) = rest.split_once(']')?;
        let port = tail.strip_prefix(':')?;
        return Some((host, port));
    }
    let (host, port) = address.rsplit_once(':')?;
    if host.contains(':') {
        return None;
    }
    Some((host, port))
}

/// Host part of `host:port`; an empty or unparsable host is `localhost`.
pub fn extract_host(address: &str) -> String {
    match split_host_port(address) {
        Some((host, _)) if !host.is_empty() => host.to_string(),
        _ => DEFAULT_HOST.to_string(),
    }
}

/// Port part of `host:port`; missing or invalid ports give 80.
pub fn extract_port(address: &str) -> u16 {
    split_host_port(address)
        .and_then(|(_, port)| port.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

/// Path and query of `uri`, or an empty string if it does not parse.
pub fn get_uri_path(uri: &str) -> String {
    if !has_valid_escapes(uri) {
        return String::new();
    }
    let Ok(url) = Url::parse(uri) else {
        return String::new();
    };
    match url.query() {
        Some(query) if !query.is_empty() => format!("{}?{}", url.path(), query),
        _ => url.path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_url_values_empty() {
        assert_eq!(
            encode_url_values("https://www.test.com", &BTreeMap::new()),
            "https://www.test.com"
        );
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(extract_host("localhost:1337"), "localhost");
        assert_eq!(extract_host(":1337"), "localhost");
        assert_eq!(extract_host("192.168.1.100:1337"), "192.168.1.100");
        assert_eq!(extract_host("[::1]:8080"), "::1");
        assert_eq!(extract_host("no-port"), "localhost");
    }

    #[test]
    fn test_extract_port() {
        assert_eq!(extract_port("localhost:1337"), 1337);
        assert_eq!(extract_port("localhost"), 80);
        assert_eq!(extract_port("localhost:http"), 80);
    }

    #[test]
    fn test_get_uri_path() {
        for (input, expected) in [
            ("https://api.pro.coinbase.com/accounts", "/accounts"),
            ("https://api.pro.coinbase.com/accounts?a=1&b=2", "/accounts?a=1&b=2"),
            ("http://www.google.com/accounts?!@#$%;^^", ""),
        ] {
            assert_eq!(get_uri_path(input), expected, "{input}");
        }
    }
}
