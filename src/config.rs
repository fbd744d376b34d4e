//! Client configuration types.
//!
//! This module provides [`Credential`], the long-lived username/shared-token
//! pair owned by a client instance, and [`ClientOptions`], the transport
//! tuning knobs (connection and request timeouts).

use std::fmt;
use std::time::Duration;

/// Default connection timeout, in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 4;

/// Default total request timeout, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// API credentials: a username plus the shared token used for WSSE signing.
///
/// The shared token may be empty, for example when the client is only used
/// to exchange a password for a token via the auth-token operation. Requests
/// issued with an empty token carry no `X-WSSE` header.
///
/// # Security
///
/// The `Debug` implementation masks the shared token so it cannot leak into
/// logs.
///
/// # Example
///
/// ```rust
/// use outofbox_sdk::Credential;
///
/// let credential = Credential::new("shop-user", "shared-token");
/// assert_eq!(credential.username(), "shop-user");
/// assert!(credential.has_token());
/// assert_eq!(format!("{credential:?}"), r#"Credential { username: "shop-user", token: ***** }"#);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    token: String,
}

impl Credential {
    /// Creates a credential from a username and shared token.
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }

    /// Creates a credential with no shared token (pre-authentication).
    pub fn unauthenticated(username: impl Into<String>) -> Self {
        Self::new(username, String::new())
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the shared token (possibly empty).
    #[must_use]
    pub fn shared_token(&self) -> &str {
        &self.token
    }

    /// Returns `true` if a non-empty shared token is configured.
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Credential {{ username: {:?}, token: ***** }}",
            self.username
        )
    }
}

/// Transport tuning options for an [`ApiClient`](crate::ApiClient).
///
/// Timeouts are a transport concern; the dispatch core never inspects them.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use outofbox_sdk::ClientOptions;
///
/// let options = ClientOptions {
///     timeout: Duration::from_secs(30),
///     ..ClientOptions::default()
/// };
/// assert_eq!(options.connect_timeout, Duration::from_secs(4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    /// Maximum time to wait for a connection to be established.
    pub connect_timeout: Duration,
    /// Maximum total time for a single request/response round trip.
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
