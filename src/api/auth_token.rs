//! Auth-token exchange operation.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::{decode_response, ApiRequest, ApiResponse};
use crate::clients::{HttpMethod, RequestParams};
use crate::error::ApiError;
use crate::serializer::DenormalizerRegistry;

/// Exchanges a username and password for an API token.
///
/// This is the one operation issued without a shared token, so it carries
/// no `X-WSSE` header.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthTokenRequest {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl AuthTokenRequest {
    /// Creates an auth-token request.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl ApiRequest for AuthTokenRequest {
    type Response = AuthTokenResponse;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn uri(&self) -> String {
        "api/auth-token".to_string()
    }

    fn params(&self) -> RequestParams {
        RequestParams {
            body: Some(json!({
                "username": self.username,
                "password": self.password,
            })),
            ..RequestParams::default()
        }
    }
}

/// The issued API token.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthTokenResponse {
    /// The shared token to use for subsequent WSSE-signed requests.
    pub token: String,
}

impl ApiResponse for AuthTokenResponse {
    fn from_payload(payload: &Value, _registry: &DenormalizerRegistry) -> Result<Self, ApiError> {
        decode_response(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let request = AuthTokenRequest::new("user", "pass");
        assert_eq!(request.http_method(), HttpMethod::Post);
        assert_eq!(request.uri(), "api/auth-token");

        let params = request.params();
        assert_eq!(
            params.body,
            Some(json!({"username": "user", "password": "pass"}))
        );
    }

    #[test]
    fn test_response_decodes_token() {
        let registry = DenormalizerRegistry::new();
        let response =
            AuthTokenResponse::from_payload(&json!({"token": "t-123"}), &registry).unwrap();
        assert_eq!(response.token, "t-123");
    }

    #[test]
    fn test_response_without_token_is_decode_error() {
        let registry = DenormalizerRegistry::new();
        let error = AuthTokenResponse::from_payload(&json!({}), &registry).unwrap_err();
        assert!(error.message.starts_with("Unable to decode response"));
    }
}
