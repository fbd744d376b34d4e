//! Integration tests for the API client dispatch pipeline.
//!
//! These tests run the full pipeline against a local mock server: parameter
//! building, WSSE header injection, both error-envelope paths, and response
//! denormalization.

use outofbox_sdk::api::{
    CreateShopOrderRequest, ProductUpdateRequest, ProductsListRequest,
};
use outofbox_sdk::{AnyResponse, ApiClient, ClientError, Credential};
use serde_json::json;
use wiremock::matchers::{body_json, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client for the mock server with a configured shared token.
fn create_client(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri(), Credential::new("shop-user", "shared-token"))
}

// ============================================================================
// Happy-path dispatch
// ============================================================================

#[tokio::test]
async fn test_get_shop_order_sends_wsse_and_denormalizes_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/shop-orders/A-100"))
        .and(header_exists("X-WSSE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shop_order": {
                "id": 12,
                "number": "A-100",
                "delivery_method": {"id": 3, "value": "Courier"},
                "payment_method": {"id": 1, "value": "Card"},
                "items": [
                    {"id": 1, "product_id": 9, "title": "Mug", "quantity": 2.0, "price": "5.00"},
                    "unusable entry",
                ],
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let order = client.get_shop_order("A-100").await.unwrap();

    assert_eq!(order.number.as_deref(), Some("A-100"));
    assert_eq!(order.delivery_method.as_ref().unwrap().id, Some(3));
    assert_eq!(order.payment_method.as_ref().unwrap().value.as_deref(), Some("Card"));
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].as_ref().unwrap().product_id, Some(9));
    assert!(order.items[1].is_none());
}

#[tokio::test]
async fn test_get_auth_token_returns_issued_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth-token"))
        .and(body_json(json!({"username": "shop-user", "password": "pass"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "t-123"})))
        .expect(1)
        .mount(&server)
        .await;

    // No shared token yet; the request goes out unsigned.
    let client = ApiClient::new(server.uri(), Credential::unauthenticated("shop-user"));
    let token = client.get_auth_token("pass").await.unwrap();

    assert_eq!(token, "t-123");
}

#[tokio::test]
async fn test_products_list_applies_query_and_reconciles_products() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [{
                "id": 1,
                "fields_names": {"Title": "title"},
                "title": "Blue mug",
                "images": [{"path": "a.jpg"}, {"url": "dropped.jpg"}],
                "created_at": "2024-01-15 10:30:00",
            }],
            "count": 41,
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = ProductsListRequest {
        page: Some(2),
        ..ProductsListRequest::default()
    };
    let products = client.products_list(&request).await.unwrap();

    assert_eq!(products.len(), 1);
    let product = &products[0];
    assert_eq!(product.title(), Some("Blue mug"));
    assert_eq!(product.images.len(), 1);
    assert_eq!(product.images[0].path, "a.jpg");
    assert!(product.images[0].modifications.is_none());
    assert!(product.created_at.is_some());
}

#[tokio::test]
async fn test_shipment_by_barcode_overlays_tracking_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/shipments/barcode/BC-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shipment": {
                "id": 5,
                "barcode": "BC-42",
                "current_state": {"type": "delivery", "value": 40, "title": "In transit"},
                "state_updated_at": "2024-02-01T08:00:00Z",
            },
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let shipment = client.shipment_by_barcode("BC-42").await.unwrap();

    assert_eq!(shipment.barcode.as_deref(), Some("BC-42"));
    let state = shipment.current_state.unwrap();
    assert_eq!(state.state_type.as_deref(), Some("delivery"));
    assert!(shipment.state_updated_at.is_some());
}

#[tokio::test]
async fn test_create_shop_order_posts_wrapped_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/shop-orders"))
        .and(body_json(json!({"shop_order": {"number": "A-7"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shop_order": {"id": 7, "number": "A-7"},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = CreateShopOrderRequest::new(json!({"number": "A-7"}));
    let order = client.create_shop_order(&request).await.unwrap();

    assert_eq!(order.id, Some(7));
}

#[tokio::test]
async fn test_product_update_puts_wrapped_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/products/5"))
        .and(body_json(json!({"product": {"title": "Renamed"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product": {"id": 5, "title": "Renamed"},
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let request = ProductUpdateRequest::new(5, json!({"title": "Renamed"}));
    let product = client.product_update(&request).await.unwrap();

    assert_eq!(product.unwrap().title(), Some("Renamed"));
}

#[tokio::test]
async fn test_categories_and_stores_decode_structurally() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "categories": [{"id": 1, "title": "Kitchen"}],
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stores"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stores": [{"id": 2, "title": "Main", "address": "Dock 4"}],
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);

    let categories = client.categories_list().await.unwrap();
    assert_eq!(categories[0].title.as_deref(), Some("Kitchen"));

    let stores = client.stores_list().await.unwrap();
    assert_eq!(stores[0].address.as_deref(), Some("Dock 4"));
}

// ============================================================================
// Error taxonomy
// ============================================================================

#[tokio::test]
async fn test_unparseable_success_body_is_invalid_response_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/shop-orders/A-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client.get_shop_order("A-1").await.unwrap_err();

    assert_eq!(error.message, "Invalid response data");
    assert_eq!(error.code, None);
}

#[tokio::test]
async fn test_success_body_error_envelope_carries_code_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/shop-orders/A-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 3,
            "message": "Access denied",
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client.get_shop_order("A-1").await.unwrap_err();

    assert_eq!(error.message, "Access denied");
    assert_eq!(error.code, Some(3));
}

#[tokio::test]
async fn test_failure_body_error_envelope_carries_code_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/shop-orders/A-1"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"message": "X", "code": 7},
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client.get_shop_order("A-1").await.unwrap_err();

    assert_eq!(error.message, "X");
    assert_eq!(error.code, Some(7));
}

#[tokio::test]
async fn test_unparseable_failure_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/shop-orders/A-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client.get_shop_order("A-1").await.unwrap_err();

    assert_eq!(error.message, "Unable to decode error response data");
}

#[tokio::test]
async fn test_transport_failure_surfaces_as_api_error() {
    // Nothing listens here; the connection is refused.
    let client = ApiClient::new(
        "http://127.0.0.1:9",
        Credential::new("shop-user", "shared-token"),
    );

    let error = client.get_shop_order("A-1").await.unwrap_err();
    assert!(error.message.starts_with("Outofbox API request error:"));
    assert_eq!(error.code, None);
}

// ============================================================================
// Dynamic dispatch
// ============================================================================

#[tokio::test]
async fn test_send_named_unknown_operation_is_not_api_error() {
    let client = ApiClient::new(
        "http://127.0.0.1:9",
        Credential::new("shop-user", "shared-token"),
    );

    let error = client
        .send_named("frobnicate", json!({}))
        .await
        .unwrap_err();

    match error {
        ClientError::OperationNotFound(not_found) => {
            assert_eq!(not_found.name, "frobnicate");
        }
        ClientError::Api(e) => panic!("expected OperationNotFound, got ApiError: {e}"),
    }
}

#[tokio::test]
async fn test_send_named_routes_to_typed_operation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/shop-orders/A-100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shop_order": {"id": 12, "number": "A-100"},
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let response = client
        .send_named("get_shop_order", json!({"shop_order_number": "A-100"}))
        .await
        .unwrap();

    match response {
        AnyResponse::GetShopOrder(response) => {
            assert_eq!(response.shop_order.number.as_deref(), Some("A-100"));
        }
        other => panic!("unexpected response variant: {other:?}"),
    }
}

#[tokio::test]
async fn test_send_named_rejects_undeserializable_parameters() {
    let client = ApiClient::new(
        "http://127.0.0.1:9",
        Credential::new("shop-user", "shared-token"),
    );

    // `get_shop_order` needs a string order number.
    let error = client
        .send_named("get_shop_order", json!({"shop_order_number": 42}))
        .await
        .unwrap_err();

    assert!(matches!(error, ClientError::Api(_)));
}
