//! HTTP transport for the Outofbox API.
//!
//! This module provides the [`Transport`] collaborator: a single awaitable
//! `issue` call that sends one HTTP request and returns the raw response.
//! Connection pooling, TLS, and timeouts live here (inside reqwest); the
//! dispatch core never inspects them.

use std::collections::HashMap;

use crate::config::ClientOptions;

/// HTTP methods used by the Outofbox API operation catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Transport parameters for one request: headers, query, body, and an
/// optional base-URI override.
///
/// Built by each request type; the dispatcher merges in the `X-WSSE` header
/// and the client's default base URI before handing the parameters to
/// [`Transport::issue`].
#[derive(Clone, Debug, Default)]
pub struct RequestParams {
    /// Base URI override; the client default is used when unset.
    pub base_uri: Option<String>,
    /// Headers to send with the request.
    pub headers: HashMap<String, String>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// JSON request body, if any.
    pub body: Option<serde_json::Value>,
}

/// A raw HTTP response: status code and unparsed body text.
///
/// Decoding and error detection happen downstream in
/// [`decode`](crate::clients::decode).
#[derive(Clone, Debug)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body as received.
    pub body: String,
}

impl RawResponse {
    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }
}

/// The reqwest-backed transport collaborator.
///
/// # Thread Safety
///
/// `Transport` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct Transport {
    client: reqwest::Client,
}

// Verify Transport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Transport>();
};

impl Transport {
    /// Creates a transport with the given timeout options.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(options: &ClientOptions) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(options.connect_timeout)
            .timeout(options.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Issues one HTTP request and returns the raw response.
    ///
    /// The URI is joined onto the base URI from `params`; headers, query
    /// parameters, and the JSON body are applied as provided. No retries,
    /// no response interpretation.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`reqwest::Error`] on connection or protocol
    /// failure. The dispatcher translates this into an
    /// [`ApiError`](crate::ApiError) before it reaches callers.
    pub async fn issue(
        &self,
        method: HttpMethod,
        uri: &str,
        params: &RequestParams,
    ) -> Result<RawResponse, reqwest::Error> {
        let base = params.base_uri.as_deref().unwrap_or_default();
        let url = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            uri.trim_start_matches('/')
        );

        let mut builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &params.headers {
            builder = builder.header(key, value);
        }
        if let Some(query) = &params.query {
            builder = builder.query(query);
        }
        if let Some(body) = &params.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(RawResponse { status, body })
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new(&ClientOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_raw_response_is_ok_for_2xx_only() {
        for status in [200, 201, 204, 299] {
            let response = RawResponse {
                status,
                body: String::new(),
            };
            assert!(response.is_ok(), "expected is_ok() for status {status}");
        }
        for status in [199, 301, 400, 404, 500] {
            let response = RawResponse {
                status,
                body: String::new(),
            };
            assert!(!response.is_ok(), "expected !is_ok() for status {status}");
        }
    }

    #[test]
    fn test_request_params_default_is_empty() {
        let params = RequestParams::default();
        assert!(params.base_uri.is_none());
        assert!(params.headers.is_empty());
        assert!(params.query.is_none());
        assert!(params.body.is_none());
    }

    #[test]
    fn test_transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Transport>();
    }
}
