//! Response decoding and API error detection.
//!
//! The Outofbox API signals failures in two independent envelope shapes:
//!
//! - **Success-path envelope**: a 2xx body carrying both top-level `code`
//!   and `message` keys is an error despite the status code. Checked by
//!   [`check_error`].
//! - **Failure-path envelope**: a non-2xx body of the form
//!   `{"error": {"message": …, "code"?: …}}`. Checked by
//!   [`error_from_failure`].
//!
//! Both paths must be supported; a response can only travel one of them.

use serde_json::Value;

use crate::clients::transport::RawResponse;
use crate::error::ApiError;

/// Parses a raw response body as JSON.
///
/// # Errors
///
/// Returns `ApiError { message: "Invalid response data" }` when the body is
/// not valid JSON.
pub fn decode_body(raw: &str) -> Result<Value, ApiError> {
    serde_json::from_str(raw).map_err(|e| {
        tracing::debug!(error = %e, "Invalid response data");
        ApiError::new("Invalid response data")
    })
}

/// Checks a decoded 2xx payload for the success-path error envelope.
///
/// # Errors
///
/// Returns `ApiError(message, code)` when the payload carries both a
/// top-level `code` and `message` key; otherwise passes the payload through.
pub fn check_error(payload: Value) -> Result<Value, ApiError> {
    if payload.get("code").is_some() && payload.get("message").is_some() {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let code = payload.get("code").and_then(Value::as_i64);
        tracing::debug!(?code, message = %message, "Outofbox API error envelope in success body");
        return Err(ApiError { message, code });
    }
    Ok(payload)
}

/// Builds the [`ApiError`] for a non-2xx response.
///
/// - Empty body: a generic transport error carrying the HTTP status.
/// - Unparseable body: `"Unable to decode error response data"`.
/// - Body with an `error` object: the message and optional code from it.
/// - Parseable body without an `error` key: the generic transport error.
#[must_use]
pub fn error_from_failure(response: &RawResponse) -> ApiError {
    if !response.body.is_empty() {
        let Ok(payload) = serde_json::from_str::<Value>(&response.body) else {
            tracing::debug!(status = response.status, "Unable to decode error response data");
            return ApiError::new("Unable to decode error response data");
        };

        if let Some(error) = payload.get("error") {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let code = error.get("code").and_then(Value::as_i64);
            tracing::debug!(status = response.status, message = %message, "Outofbox API error response");
            return ApiError { message, code };
        }
    }

    ApiError::new(format!(
        "Outofbox API request error: HTTP {}",
        response.status
    ))
}
