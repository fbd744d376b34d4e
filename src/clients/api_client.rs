//! The Outofbox API client: request dispatch and response materialization.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{
    AnyResponse, ApiRequest, ApiResponse, AuthTokenRequest, CategoriesListRequest,
    ContractorProductsListRequest, CreateShopOrderRequest, GetShopOrderRequest, Operation,
    ProductUpdateRequest, ProductViewRequest, ProductsListRequest, ShipmentByBarcodeRequest,
    ShipmentRegisterRequest, StoresListRequest,
};
use crate::auth::wsse;
use crate::clients::decode;
use crate::clients::transport::{RawResponse, RequestParams, Transport};
use crate::config::{ClientOptions, Credential};
use crate::error::{ApiError, ClientError};
use crate::model::{Product, Shipment, ShopOrder};
use crate::serializer::DenormalizerRegistry;

/// Client for the Outofbox API.
///
/// Owns the credential, the transport, and the denormalizer registry. Every
/// operation goes through [`send`](Self::send): build transport parameters,
/// merge in the WSSE header (when a shared token is configured) and the
/// default base URI, issue the call, run the error checks, and materialize
/// the typed response.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`; the credential is immutable and the
/// denormalizers are stateless, so one client can serve concurrent calls.
///
/// # Example
///
/// ```rust,ignore
/// use outofbox_sdk::{ApiClient, Credential};
///
/// let client = ApiClient::new(
///     "https://app.outofbox.example",
///     Credential::new("shop-user", "shared-token"),
/// );
///
/// let order = client.get_shop_order("A-100").await?;
/// println!("delivery: {:?}", order.delivery_method);
/// ```
#[derive(Debug)]
pub struct ApiClient {
    base_uri: String,
    credential: Credential,
    transport: Transport,
    denormalizers: DenormalizerRegistry,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a client with default transport options.
    #[must_use]
    pub fn new(base_uri: impl Into<String>, credential: Credential) -> Self {
        Self::with_options(base_uri, credential, ClientOptions::default())
    }

    /// Creates a client with explicit transport options.
    #[must_use]
    pub fn with_options(
        base_uri: impl Into<String>,
        credential: Credential,
        options: ClientOptions,
    ) -> Self {
        Self {
            base_uri: base_uri.into(),
            credential,
            transport: Transport::new(&options),
            denormalizers: DenormalizerRegistry::new(),
        }
    }

    /// Returns the configured base URI.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the credential this client signs requests with.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Sends a typed request and materializes its response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, unparseable bodies,
    /// either error envelope, and response decode failures. Raw transport
    /// errors never escape this boundary.
    pub async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let method = request.http_method();
        let uri = request.uri();
        let params = self.prepare_params(request);

        tracing::debug!(%method, %uri, "Outofbox API request");

        let raw = self
            .transport
            .issue(method, &uri, &params)
            .await
            .map_err(|e| ApiError::new(format!("Outofbox API request error: {e}")))?;

        if !raw.is_ok() {
            return Err(decode::error_from_failure(&raw));
        }

        let payload = self.check_response(&raw)?;
        R::Response::from_payload(&payload, &self.denormalizers)
    }

    /// Dispatches an operation by name, for callers that route dynamically.
    ///
    /// `params` is deserialized into the operation's typed request, so it
    /// takes the same shape the request type serializes to (e.g.
    /// `{"shop_order_number": "A-100"}` for `get_shop_order`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::OperationNotFound`] for names outside the
    /// catalog and [`ClientError::Api`] for anything the typed path would
    /// report as [`ApiError`], including undeserializable parameters.
    pub async fn send_named(&self, name: &str, params: Value) -> Result<AnyResponse, ClientError> {
        let operation = Operation::resolve(name)?;

        let response = match operation {
            Operation::AuthToken => {
                let request: AuthTokenRequest = decode_params(name, params)?;
                AnyResponse::AuthToken(self.send(&request).await?)
            }
            Operation::ProductsList => {
                let request: ProductsListRequest = decode_params(name, params)?;
                AnyResponse::ProductsList(self.send(&request).await?)
            }
            Operation::ContractorProductsList => {
                let request: ContractorProductsListRequest = decode_params(name, params)?;
                AnyResponse::ProductsList(self.send(&request).await?)
            }
            Operation::ProductView => {
                let request: ProductViewRequest = decode_params(name, params)?;
                AnyResponse::ProductView(self.send(&request).await?)
            }
            Operation::ProductUpdate => {
                let request: ProductUpdateRequest = decode_params(name, params)?;
                AnyResponse::ProductUpdate(self.send(&request).await?)
            }
            Operation::CategoriesList => {
                let request: CategoriesListRequest = decode_params(name, params)?;
                AnyResponse::CategoriesList(self.send(&request).await?)
            }
            Operation::StoresList => {
                let request: StoresListRequest = decode_params(name, params)?;
                AnyResponse::StoresList(self.send(&request).await?)
            }
            Operation::CreateShopOrder => {
                let request: CreateShopOrderRequest = decode_params(name, params)?;
                AnyResponse::CreateShopOrder(self.send(&request).await?)
            }
            Operation::GetShopOrder => {
                let request: GetShopOrderRequest = decode_params(name, params)?;
                AnyResponse::GetShopOrder(self.send(&request).await?)
            }
            Operation::ShipmentRegister => {
                let request: ShipmentRegisterRequest = decode_params(name, params)?;
                AnyResponse::ShipmentRegister(self.send(&request).await?)
            }
            Operation::ShipmentByBarcode => {
                let request: ShipmentByBarcodeRequest = decode_params(name, params)?;
                AnyResponse::ShipmentByBarcode(self.send(&request).await?)
            }
        };

        Ok(response)
    }

    /// Exchanges the client's username and a password for an API token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any service failure.
    pub async fn get_auth_token(&self, password: &str) -> Result<String, ApiError> {
        let request = AuthTokenRequest::new(self.credential.username(), password);
        Ok(self.send(&request).await?.token)
    }

    /// Lists products.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any service failure.
    pub async fn products_list(
        &self,
        request: &ProductsListRequest,
    ) -> Result<Vec<Product>, ApiError> {
        Ok(self.send(request).await?.products)
    }

    /// Lists a contractor's products.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any service failure.
    pub async fn contractor_products_list(
        &self,
        request: &ContractorProductsListRequest,
    ) -> Result<Vec<Product>, ApiError> {
        Ok(self.send(request).await?.products)
    }

    /// Fetches one product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any service failure.
    pub async fn product_view(&self, id: u64) -> Result<Product, ApiError> {
        Ok(self.send(&ProductViewRequest::new(id)).await?.product)
    }

    /// Updates one product's fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any service failure.
    pub async fn product_update(
        &self,
        request: &ProductUpdateRequest,
    ) -> Result<Option<Product>, ApiError> {
        Ok(self.send(request).await?.product)
    }

    /// Lists product categories.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any service failure.
    pub async fn categories_list(&self) -> Result<Vec<crate::model::Category>, ApiError> {
        Ok(self.send(&CategoriesListRequest::new()).await?.categories)
    }

    /// Lists warehouse stores.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any service failure.
    pub async fn stores_list(&self) -> Result<Vec<crate::model::Store>, ApiError> {
        Ok(self.send(&StoresListRequest::new()).await?.stores)
    }

    /// Creates a shop order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any service failure.
    pub async fn create_shop_order(
        &self,
        request: &CreateShopOrderRequest,
    ) -> Result<ShopOrder, ApiError> {
        Ok(self.send(request).await?.shop_order)
    }

    /// Fetches a shop order by its shop-facing number.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any service failure.
    pub async fn get_shop_order(&self, order_number: &str) -> Result<ShopOrder, ApiError> {
        let request = GetShopOrderRequest::with_number(order_number);
        Ok(self.send(&request).await?.shop_order)
    }

    /// Registers a shipment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any service failure.
    pub async fn register_shipment(
        &self,
        request: &ShipmentRegisterRequest,
    ) -> Result<Shipment, ApiError> {
        Ok(self.send(request).await?.shipment)
    }

    /// Looks a shipment up by its carrier barcode.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any service failure.
    pub async fn shipment_by_barcode(&self, barcode: &str) -> Result<Shipment, ApiError> {
        let request = ShipmentByBarcodeRequest::new(barcode);
        Ok(self.send(&request).await?.shipment)
    }

    /// Builds the final transport parameters for a request: the request's
    /// own parameters plus the WSSE header (when a shared token is
    /// configured) and the client base URI (when the request set none).
    fn prepare_params<R: ApiRequest>(&self, request: &R) -> RequestParams {
        let mut params = request.params();

        if self.credential.has_token() {
            params
                .headers
                .insert("X-WSSE".to_string(), wsse::header(&self.credential));
        }

        if params.base_uri.is_none() {
            params.base_uri = Some(self.base_uri.clone());
        }

        params
    }

    /// Runs the 2xx decode pipeline: JSON parse, then the success-path
    /// error envelope check.
    fn check_response(&self, raw: &RawResponse) -> Result<Value, ApiError> {
        let payload = decode::decode_body(&raw.body)?;
        decode::check_error(payload)
    }
}

/// Deserializes dynamic-dispatch parameters into a typed request.
fn decode_params<T: DeserializeOwned>(name: &str, params: Value) -> Result<T, ClientError> {
    serde_json::from_value(params).map_err(|e| {
        tracing::debug!(name, error = %e, "invalid parameters for operation");
        ClientError::Api(ApiError::new(format!(
            "Invalid parameters for operation [{name}]: {e}"
        )))
    })
}
