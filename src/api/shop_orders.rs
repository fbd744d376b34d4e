//! Shop order operations: create and fetch by number.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::{require_key, ApiRequest, ApiResponse};
use crate::clients::{HttpMethod, RequestParams};
use crate::error::ApiError;
use crate::model::ShopOrder;
use crate::serializer::DenormalizerRegistry;

/// Creates a shop order from a raw order payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateShopOrderRequest {
    /// The order payload to submit.
    pub shop_order: Value,
}

impl CreateShopOrderRequest {
    /// Creates a shop-order creation request.
    pub fn new(shop_order: Value) -> Self {
        Self { shop_order }
    }
}

impl ApiRequest for CreateShopOrderRequest {
    type Response = CreateShopOrderResponse;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn uri(&self) -> String {
        "api/shop-orders".to_string()
    }

    fn params(&self) -> RequestParams {
        RequestParams {
            body: Some(json!({"shop_order": self.shop_order})),
            ..RequestParams::default()
        }
    }
}

/// The created order, as stored by the service.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateShopOrderResponse {
    /// The stored order.
    pub shop_order: ShopOrder,
}

impl ApiResponse for CreateShopOrderResponse {
    fn from_payload(payload: &Value, registry: &DenormalizerRegistry) -> Result<Self, ApiError> {
        let shop_order = registry.shop_order(require_key(payload, "shop_order")?);
        Ok(Self { shop_order })
    }
}

/// Fetches a shop order by its shop-facing number.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetShopOrderRequest {
    /// The shop-facing order number.
    pub shop_order_number: String,
}

impl GetShopOrderRequest {
    /// Creates a request for the order with the given number.
    pub fn with_number(shop_order_number: impl Into<String>) -> Self {
        Self {
            shop_order_number: shop_order_number.into(),
        }
    }
}

impl ApiRequest for GetShopOrderRequest {
    type Response = GetShopOrderResponse;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn uri(&self) -> String {
        format!("api/shop-orders/{}", self.shop_order_number)
    }
}

/// One denormalized shop order.
#[derive(Clone, Debug, PartialEq)]
pub struct GetShopOrderResponse {
    /// The requested order.
    pub shop_order: ShopOrder,
}

impl ApiResponse for GetShopOrderResponse {
    fn from_payload(payload: &Value, registry: &DenormalizerRegistry) -> Result<Self, ApiError> {
        let shop_order = registry.shop_order(require_key(payload, "shop_order")?);
        Ok(Self { shop_order })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_wraps_payload() {
        let request = CreateShopOrderRequest::new(json!({"number": "A-1"}));
        assert_eq!(request.http_method(), HttpMethod::Post);
        assert_eq!(request.uri(), "api/shop-orders");
        assert_eq!(
            request.params().body,
            Some(json!({"shop_order": {"number": "A-1"}}))
        );
    }

    #[test]
    fn test_get_request_embeds_number_in_uri() {
        let request = GetShopOrderRequest::with_number("A-100");
        assert_eq!(request.uri(), "api/shop-orders/A-100");
    }

    #[test]
    fn test_get_response_denormalizes_order() {
        let registry = DenormalizerRegistry::new();
        let payload = json!({
            "shop_order": {
                "number": "A-100",
                "delivery_method": {"id": 3, "value": "Courier"},
                "items": [{"product_id": 1}],
            },
        });

        let response = GetShopOrderResponse::from_payload(&payload, &registry).unwrap();
        assert_eq!(response.shop_order.number.as_deref(), Some("A-100"));
        assert!(response.shop_order.delivery_method.is_some());
        assert_eq!(response.shop_order.items.len(), 1);
    }

    #[test]
    fn test_get_response_requires_shop_order_key() {
        let registry = DenormalizerRegistry::new();
        let error = GetShopOrderResponse::from_payload(&json!({}), &registry).unwrap_err();
        assert!(error.message.contains("missing key 'shop_order'"));
    }
}
