//! Typed request/response pairs for the Outofbox operation catalog.
//!
//! Every operation is a value object implementing [`ApiRequest`]; its
//! expected response type is fixed at construction through the `Response`
//! associated type, so the dispatcher resolves the pairing at compile time.
//! The dynamic surface ([`Operation`] + [`AnyResponse`]) exists for callers
//! that route by operation name; unknown names are a programming error
//! reported as [`OperationNotFoundError`], never as an
//! [`ApiError`](crate::ApiError).

mod auth_token;
mod categories;
mod products;
mod shipments;
mod shop_orders;
mod warehouse;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use auth_token::{AuthTokenRequest, AuthTokenResponse};
pub use categories::{CategoriesListRequest, CategoriesListResponse};
pub use products::{
    ContractorProductsListRequest, ProductUpdateRequest, ProductUpdateResponse,
    ProductViewRequest, ProductViewResponse, ProductsListRequest, ProductsListResponse,
};
pub use shipments::{
    ShipmentByBarcodeRequest, ShipmentByBarcodeResponse, ShipmentRegisterRequest,
    ShipmentRegisterResponse,
};
pub use shop_orders::{
    CreateShopOrderRequest, CreateShopOrderResponse, GetShopOrderRequest, GetShopOrderResponse,
};
pub use warehouse::{StoresListRequest, StoresListResponse};

use crate::clients::{HttpMethod, RequestParams};
use crate::error::{ApiError, OperationNotFoundError};
use crate::serializer::DenormalizerRegistry;

/// An API operation: HTTP shape plus the response type it produces.
///
/// Implementations are immutable value objects; [`params`](Self::params)
/// builds the transport parameters (query, body, headers, optional base-URI
/// override) from the captured state.
pub trait ApiRequest: Send + Sync {
    /// The response type this request materializes into.
    type Response: ApiResponse;

    /// The HTTP method of the operation.
    fn http_method(&self) -> HttpMethod;

    /// The request path, relative to the client base URI.
    fn uri(&self) -> String;

    /// Transport parameters derived from the request state.
    fn params(&self) -> RequestParams {
        RequestParams::default()
    }
}

/// A typed operation result, constructed only from a decoded payload.
pub trait ApiResponse: Sized {
    /// Materializes the response from a checked payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the payload cannot be decoded into the
    /// response shape.
    fn from_payload(payload: &Value, registry: &DenormalizerRegistry) -> Result<Self, ApiError>;
}

/// Decodes a payload into a structurally-typed response via serde.
///
/// Used by the responses without irregular entities (auth token,
/// categories, stores); the entity-backed responses go through the
/// denormalizer registry instead.
pub(crate) fn decode_response<T: DeserializeOwned>(payload: &Value) -> Result<T, ApiError> {
    serde_json::from_value(payload.clone()).map_err(|e| {
        tracing::debug!(error = %e, "Unable to decode response");
        ApiError::new(format!("Unable to decode response: {e}"))
    })
}

/// Extracts a required key from a payload.
pub(crate) fn require_key<'a>(payload: &'a Value, key: &str) -> Result<&'a Value, ApiError> {
    payload.get(key).ok_or_else(|| {
        tracing::debug!(key, "missing key in response body");
        ApiError::new(format!("Unable to decode response: missing key '{key}'"))
    })
}

/// The logical operations of the Outofbox API, keyed by their wire names.
///
/// This is the explicit dispatch table behind
/// [`ApiClient::send_named`](crate::ApiClient::send_named); the typed
/// [`ApiRequest`] surface does not consult it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Exchange username/password for an API token.
    AuthToken,
    /// List products.
    ProductsList,
    /// List a contractor's products.
    ContractorProductsList,
    /// Fetch one product.
    ProductView,
    /// Update one product.
    ProductUpdate,
    /// List product categories.
    CategoriesList,
    /// List warehouse stores.
    StoresList,
    /// Create a shop order.
    CreateShopOrder,
    /// Fetch a shop order by number.
    GetShopOrder,
    /// Register a shipment.
    ShipmentRegister,
    /// Look a shipment up by barcode.
    ShipmentByBarcode,
}

impl Operation {
    /// Every operation paired with its wire name.
    pub const ALL: &'static [(&'static str, Self)] = &[
        ("auth_token", Self::AuthToken),
        ("products_list", Self::ProductsList),
        ("contractor_products_list", Self::ContractorProductsList),
        ("product_view", Self::ProductView),
        ("product_update", Self::ProductUpdate),
        ("categories_list", Self::CategoriesList),
        ("stores_list", Self::StoresList),
        ("create_shop_order", Self::CreateShopOrder),
        ("get_shop_order", Self::GetShopOrder),
        ("shipment_register", Self::ShipmentRegister),
        ("shipment_by_barcode", Self::ShipmentByBarcode),
    ];

    /// Resolves an operation by name.
    ///
    /// # Errors
    ///
    /// Returns [`OperationNotFoundError`] for names outside the catalog:
    /// a caller bug, deliberately distinct from [`ApiError`].
    pub fn resolve(name: &str) -> Result<Self, OperationNotFoundError> {
        Self::ALL
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, operation)| *operation)
            .ok_or_else(|| {
                tracing::debug!(name, "Operation not found in [ApiClient]");
                OperationNotFoundError {
                    name: name.to_string(),
                }
            })
    }

    /// Returns the wire name of this operation.
    #[must_use]
    pub fn name(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(_, operation)| *operation == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }
}

/// A response from the dynamic dispatch surface, tagged by operation family.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyResponse {
    /// Result of `auth_token`.
    AuthToken(AuthTokenResponse),
    /// Result of `products_list` / `contractor_products_list`.
    ProductsList(ProductsListResponse),
    /// Result of `product_view`.
    ProductView(ProductViewResponse),
    /// Result of `product_update`.
    ProductUpdate(ProductUpdateResponse),
    /// Result of `categories_list`.
    CategoriesList(CategoriesListResponse),
    /// Result of `stores_list`.
    StoresList(StoresListResponse),
    /// Result of `create_shop_order`.
    CreateShopOrder(CreateShopOrderResponse),
    /// Result of `get_shop_order`.
    GetShopOrder(GetShopOrderResponse),
    /// Result of `shipment_register`.
    ShipmentRegister(ShipmentRegisterResponse),
    /// Result of `shipment_by_barcode`.
    ShipmentByBarcode(ShipmentByBarcodeResponse),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_operations() {
        assert_eq!(Operation::resolve("auth_token").unwrap(), Operation::AuthToken);
        assert_eq!(
            Operation::resolve("get_shop_order").unwrap(),
            Operation::GetShopOrder
        );
        assert_eq!(
            Operation::resolve("shipment_by_barcode").unwrap(),
            Operation::ShipmentByBarcode
        );
    }

    #[test]
    fn test_resolve_unknown_operation_is_not_found() {
        let error = Operation::resolve("frobnicate").unwrap_err();
        assert_eq!(error.name, "frobnicate");
    }

    #[test]
    fn test_every_operation_round_trips_through_its_name() {
        for (name, operation) in Operation::ALL {
            assert_eq!(Operation::resolve(name).unwrap(), *operation);
            assert_eq!(operation.name(), *name);
        }
    }

    #[test]
    fn test_require_key_reports_missing_key() {
        let payload = serde_json::json!({"token": "abc"});
        assert!(require_key(&payload, "token").is_ok());

        let error = require_key(&payload, "product").unwrap_err();
        assert!(error.message.contains("missing key 'product'"));
    }
}
