//! Outbound HTTP dispatch.
//!
//! A single process-wide [`reqwest::Client`] and user agent are shared by
//! every call to [`send_http_request`]. Both can be replaced at runtime; a
//! request picks up whatever settings are current when it starts.

use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::header::USER_AGENT;
use reqwest::{Client, Method};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::consts::DEFAULT_HTTP_TIMEOUT_SECS;

/// Errors from HTTP dispatch and client configuration.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Method is not a standard HTTP verb.
    #[error("invalid HTTP method specified: {0}")]
    InvalidMethod(String),

    /// URL could not be parsed.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },

    /// URL scheme is neither http nor https.
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// Timeout of zero.
    #[error("cannot set invalid HTTP client timeout")]
    InvalidTimeout,

    /// Empty user agent.
    #[error("HTTP user agent is invalid")]
    UserAgentInvalid,

    /// Transport or protocol failure.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

struct HttpSettings {
    client: Client,
    user_agent: Option<String>,
}

static SETTINGS: LazyLock<RwLock<HttpSettings>> = LazyLock::new(|| {
    RwLock::new(HttpSettings {
        client: build_client(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
            .unwrap_or_else(|_| Client::new()),
        user_agent: None,
    })
});

fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

/// Parse a method name case-insensitively, accepting only standard verbs.
pub fn parse_method(method: &str) -> Result<Method, HttpError> {
    let parsed = match method.to_ascii_uppercase().as_str() {
        "GET" => Method::GET,
        "POST" => Method::POST,
        "PUT" => Method::PUT,
        "DELETE" => Method::DELETE,
        "HEAD" => Method::HEAD,
        "PATCH" => Method::PATCH,
        "OPTIONS" => Method::OPTIONS,
        "CONNECT" => Method::CONNECT,
        "TRACE" => Method::TRACE,
        _ => return Err(HttpError::InvalidMethod(method.to_string())),
    };
    Ok(parsed)
}

fn parse_url(raw: &str) -> Result<Url, HttpError> {
    let url = Url::parse(raw).map_err(|source| HttpError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(HttpError::UnsupportedScheme(other.to_string())),
    }
}

/// Send a request and return the response body as text.
///
/// The body is returned whatever the status code; callers decide what a
/// non-success status means. With `verbose` the request line and response
/// body are logged at debug level.
///
/// # Errors
///
/// - [`HttpError::InvalidMethod`] for anything but a standard verb
/// - [`HttpError::InvalidUrl`] / [`HttpError::UnsupportedScheme`] for bad URLs
/// - [`HttpError::Request`] for transport failures
pub async fn send_http_request(
    method: &str,
    url: &str,
    headers: &HashMap<String, String>,
    body: impl Into<reqwest::Body>,
    verbose: bool,
) -> Result<String, HttpError> {
    let method = parse_method(method)?;
    let url = parse_url(url)?;

    let (client, user_agent) = {
        let settings = SETTINGS.read();
        (settings.client.clone(), settings.user_agent.clone())
    };

    let mut request = client.request(method.clone(), url.clone());
    if let Some(agent) = user_agent {
        request = request.header(USER_AGENT, agent);
    }
    for (name, value) in headers {
        request = request.header(name.as_str(), value.as_str());
    }

    if verbose {
        debug!(%method, %url, "sending HTTP request");
    }
    let response = request.body(body).send().await?;
    let status = response.status();
    let contents = response.text().await?;
    if verbose {
        debug!(%status, body = %contents, "received HTTP response");
    }
    Ok(contents)
}

/// Replace the shared client with one using `timeout`.
pub fn set_http_client_with_timeout(timeout: Duration) -> Result<(), HttpError> {
    if timeout.is_zero() {
        return Err(HttpError::InvalidTimeout);
    }
    let client = build_client(timeout)?;
    SETTINGS.write().client = client;
    Ok(())
}

/// Set the user agent sent with every request.
pub fn set_http_user_agent(agent: &str) -> Result<(), HttpError> {
    if agent.is_empty() {
        return Err(HttpError::UserAgentInvalid);
    }
    SETTINGS.write().user_agent = Some(agent.to_string());
    Ok(())
}

/// Current user agent, if one was set.
pub fn http_user_agent() -> Option<String> {
    SETTINGS.read().user_agent.clone()
}

/// Replace the shared client outright.
pub fn set_http_client(client: Client) {
    SETTINGS.write().client = client;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_headers() -> HashMap<String, String> {
        HashMap::from([(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        )])
    }

    #[test]
    fn methods_are_case_insensitive() {
        assert_eq!(parse_method("pOst").unwrap(), Method::POST);
        assert_eq!(parse_method("GeT").unwrap(), Method::GET);
        assert_eq!(parse_method("dEleTe").unwrap(), Method::DELETE);
        assert!(matches!(parse_method("ding"), Err(HttpError::InvalidMethod(_))));
    }

    #[tokio::test]
    async fn garbage_method_is_rejected_before_dispatch() {
        let result =
            send_http_request("ding", "https://www.example.com", &form_headers(), "", true).await;
        assert!(matches!(result, Err(HttpError::InvalidMethod(m)) if m == "ding"));
    }

    #[tokio::test]
    async fn missing_scheme_is_rejected() {
        let result =
            send_http_request("GET", ":missingprotocolscheme", &form_headers(), "", true).await;
        assert!(matches!(result, Err(HttpError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn unsupported_scheme_is_rejected() {
        let result = send_http_request(
            "GET",
            "test://unsupportedprotocolscheme",
            &form_headers(),
            "",
            true,
        )
        .await;
        assert!(matches!(result, Err(HttpError::UnsupportedScheme(s)) if s == "test"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(matches!(
            set_http_client_with_timeout(Duration::ZERO),
            Err(HttpError::InvalidTimeout)
        ));
        assert!(set_http_client_with_timeout(Duration::from_secs(15)).is_ok());
    }

    #[test]
    fn user_agent_must_not_be_empty() {
        assert!(matches!(set_http_user_agent(""), Err(HttpError::UserAgentInvalid)));
        set_http_user_agent("testy test").unwrap();
        assert!(http_user_agent().is_some());
    }

    #[test]
    fn client_can_be_replaced() {
        set_http_client(Client::new());
    }
}
