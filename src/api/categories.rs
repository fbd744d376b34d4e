//! Category listing operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{decode_response, ApiRequest, ApiResponse};
use crate::clients::HttpMethod;
use crate::error::ApiError;
use crate::model::Category;
use crate::serializer::DenormalizerRegistry;

/// Lists the product category tree.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CategoriesListRequest {}

impl CategoriesListRequest {
    /// Creates a categories listing request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ApiRequest for CategoriesListRequest {
    type Response = CategoriesListResponse;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn uri(&self) -> String {
        "api/categories".to_string()
    }
}

/// The category tree, flattened.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CategoriesListResponse {
    /// All categories, wire order preserved.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl ApiResponse for CategoriesListResponse {
    fn from_payload(payload: &Value, _registry: &DenormalizerRegistry) -> Result<Self, ApiError> {
        decode_response(payload)
    }
}
