//! Warehouse store listing operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{decode_response, ApiRequest, ApiResponse};
use crate::clients::HttpMethod;
use crate::error::ApiError;
use crate::model::Store;
use crate::serializer::DenormalizerRegistry;

/// Lists the warehouse stores available for fulfillment.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StoresListRequest {}

impl StoresListRequest {
    /// Creates a stores listing request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ApiRequest for StoresListRequest {
    type Response = StoresListResponse;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn uri(&self) -> String {
        "api/stores".to_string()
    }
}

/// All configured warehouse stores.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StoresListResponse {
    /// All stores, wire order preserved.
    #[serde(default)]
    pub stores: Vec<Store>,
}

impl ApiResponse for StoresListResponse {
    fn from_payload(payload: &Value, _registry: &DenormalizerRegistry) -> Result<Self, ApiError> {
        decode_response(payload)
    }
}
