//! Product catalog operations: list, contractor list, view, update.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::{require_key, ApiRequest, ApiResponse};
use crate::clients::{HttpMethod, RequestParams};
use crate::error::ApiError;
use crate::model::Product;
use crate::serializer::DenormalizerRegistry;

/// Lists products, optionally paginated and filtered by category.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductsListRequest {
    /// Page number, 1-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Restrict the listing to one category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
}

impl ProductsListRequest {
    fn query(&self) -> Option<HashMap<String, String>> {
        let mut query = HashMap::new();
        if let Some(page) = self.page {
            query.insert("page".to_string(), page.to_string());
        }
        if let Some(per_page) = self.per_page {
            query.insert("per_page".to_string(), per_page.to_string());
        }
        if let Some(category_id) = self.category_id {
            query.insert("category_id".to_string(), category_id.to_string());
        }
        (!query.is_empty()).then_some(query)
    }
}

impl ApiRequest for ProductsListRequest {
    type Response = ProductsListResponse;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn uri(&self) -> String {
        "api/products".to_string()
    }

    fn params(&self) -> RequestParams {
        RequestParams {
            query: self.query(),
            ..RequestParams::default()
        }
    }
}

/// Lists the products of one contractor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContractorProductsListRequest {
    /// Contractor identifier.
    pub contractor_id: u64,
    /// Page number, 1-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ContractorProductsListRequest {
    /// Creates a contractor products listing request.
    #[must_use]
    pub fn new(contractor_id: u64) -> Self {
        Self {
            contractor_id,
            page: None,
        }
    }
}

impl ApiRequest for ContractorProductsListRequest {
    type Response = ProductsListResponse;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn uri(&self) -> String {
        format!("api/contractors/{}/products", self.contractor_id)
    }

    fn params(&self) -> RequestParams {
        let query = self
            .page
            .map(|page| HashMap::from([("page".to_string(), page.to_string())]));
        RequestParams {
            query,
            ..RequestParams::default()
        }
    }
}

/// A page of denormalized products plus listing counters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductsListResponse {
    /// Denormalized products, wire order preserved.
    pub products: Vec<Product>,
    /// Total product count across all pages, when reported.
    pub count: Option<u64>,
    /// The page this response covers, when reported.
    pub page: Option<u64>,
}

impl ApiResponse for ProductsListResponse {
    fn from_payload(payload: &Value, registry: &DenormalizerRegistry) -> Result<Self, ApiError> {
        let products = payload
            .get("products")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(|entry| registry.product(entry)).collect())
            .unwrap_or_default();

        Ok(Self {
            products,
            count: payload.get("count").and_then(Value::as_u64),
            page: payload.get("page").and_then(Value::as_u64),
        })
    }
}

/// Fetches one product by id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductViewRequest {
    /// Product identifier.
    pub id: u64,
}

impl ProductViewRequest {
    /// Creates a product view request.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

impl ApiRequest for ProductViewRequest {
    type Response = ProductViewResponse;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn uri(&self) -> String {
        format!("api/products/{}", self.id)
    }
}

/// One denormalized product.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductViewResponse {
    /// The requested product.
    pub product: Product,
}

impl ApiResponse for ProductViewResponse {
    fn from_payload(payload: &Value, registry: &DenormalizerRegistry) -> Result<Self, ApiError> {
        let product = registry.product(require_key(payload, "product")?);
        Ok(Self { product })
    }
}

/// Updates the dynamic fields of one product.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductUpdateRequest {
    /// Product identifier.
    pub id: u64,
    /// Field values to write, keyed by property name.
    pub product: Value,
}

impl ProductUpdateRequest {
    /// Creates a product update request from the fields to write.
    pub fn new(id: u64, product: Value) -> Self {
        Self { id, product }
    }
}

impl ApiRequest for ProductUpdateRequest {
    type Response = ProductUpdateResponse;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Put
    }

    fn uri(&self) -> String {
        format!("api/products/{}", self.id)
    }

    fn params(&self) -> RequestParams {
        RequestParams {
            body: Some(json!({"product": self.product})),
            ..RequestParams::default()
        }
    }
}

/// The product state after an update, when the API echoes it back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductUpdateResponse {
    /// The updated product, when returned.
    pub product: Option<Product>,
}

impl ApiResponse for ProductUpdateResponse {
    fn from_payload(payload: &Value, registry: &DenormalizerRegistry) -> Result<Self, ApiError> {
        Ok(Self {
            product: payload.get("product").map(|value| registry.product(value)),
        })
    }
}
