//! # Outofbox API Rust SDK
//!
//! A Rust SDK for the Outofbox e-commerce/fulfillment API, providing typed
//! request/response pairs for the full operation catalog, WSSE request
//! signing, and tolerant denormalization of the API's loosely-typed JSON
//! into domain entities.
//!
//! ## Overview
//!
//! This SDK provides:
//! - A typed operation catalog: auth-token exchange, product list/view/update,
//!   category and warehouse store listing, shop-order create/get, shipment
//!   register/lookup-by-barcode
//! - [`ApiClient`] dispatch: one generic [`send`](ApiClient::send) plus a
//!   convenience accessor per operation
//! - WSSE `UsernameToken` header derivation via [`auth::wsse`]
//! - Two-envelope API error detection and a small error taxonomy
//!   ([`ApiError`] for service failures, [`OperationNotFoundError`] for
//!   caller bugs)
//! - Tolerant denormalizers for products, shipments, and shop orders that
//!   prefer a partial object over a failed response
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use outofbox_sdk::{ApiClient, Credential};
//!
//! let client = ApiClient::new(
//!     "https://app.outofbox.example",
//!     Credential::new("shop-user", "shared-token"),
//! );
//!
//! // Fetch an order; the response arrives fully denormalized.
//! let order = client.get_shop_order("A-100").await?;
//! for item in order.items.iter().flatten() {
//!     println!("{:?} x{:?}", item.title, item.quantity);
//! }
//! ```
//!
//! ## Obtaining a token
//!
//! ```rust,ignore
//! use outofbox_sdk::{ApiClient, Credential};
//!
//! // No shared token yet: requests go out unsigned.
//! let bootstrap = ApiClient::new(
//!     "https://app.outofbox.example",
//!     Credential::unauthenticated("shop-user"),
//! );
//! let token = bootstrap.get_auth_token("account-password").await?;
//!
//! // Sign everything from here on.
//! let client = ApiClient::new(
//!     "https://app.outofbox.example",
//!     Credential::new("shop-user", token),
//! );
//! ```
//!
//! ## Dynamic dispatch
//!
//! Callers that route by operation name can use
//! [`send_named`](ApiClient::send_named); unknown names surface as
//! [`OperationNotFoundError`], a caller bug kept distinct from service
//! failures:
//!
//! ```rust,ignore
//! use outofbox_sdk::AnyResponse;
//! use serde_json::json;
//!
//! let response = client
//!     .send_named("get_shop_order", json!({"shop_order_number": "A-100"}))
//!     .await?;
//! if let AnyResponse::GetShopOrder(response) = response {
//!     println!("{:?}", response.shop_order.number);
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: credentials and options are instance-based
//! - **Typed dispatch**: every request fixes its response type at compile time
//! - **Lenient parsing**: denormalizers log and degrade instead of failing
//! - **Thread-safe**: `ApiClient` is `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod model;
pub mod serializer;

// Re-export public types at crate root for convenience
pub use api::{AnyResponse, ApiRequest, ApiResponse, Operation};
pub use clients::{ApiClient, HttpMethod, RawResponse, RequestParams, Transport};
pub use config::{ClientOptions, Credential};
pub use error::{ApiError, ClientError, OperationNotFoundError};
pub use model::{
    Category, DictionaryValue, Image, Product, Shipment, ShipmentState, ShopOrder, ShopOrderItem,
    Store,
};
pub use serializer::{Denormalized, DenormalizerRegistry, DomainKind};
