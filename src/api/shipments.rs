//! Shipment operations: register and look up by barcode.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::{require_key, ApiRequest, ApiResponse};
use crate::clients::{HttpMethod, RequestParams};
use crate::error::ApiError;
use crate::model::Shipment;
use crate::serializer::DenormalizerRegistry;

/// Registers a shipment from a raw shipment payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShipmentRegisterRequest {
    /// The shipment payload to submit.
    pub shipment: Value,
}

impl ShipmentRegisterRequest {
    /// Creates a shipment registration request.
    pub fn new(shipment: Value) -> Self {
        Self { shipment }
    }
}

impl ApiRequest for ShipmentRegisterRequest {
    type Response = ShipmentRegisterResponse;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn uri(&self) -> String {
        "api/shipments".to_string()
    }

    fn params(&self) -> RequestParams {
        RequestParams {
            body: Some(json!({"shipment": self.shipment})),
            ..RequestParams::default()
        }
    }
}

/// The registered shipment, as stored by the service.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipmentRegisterResponse {
    /// The stored shipment.
    pub shipment: Shipment,
}

impl ApiResponse for ShipmentRegisterResponse {
    fn from_payload(payload: &Value, registry: &DenormalizerRegistry) -> Result<Self, ApiError> {
        let shipment = registry.shipment(require_key(payload, "shipment")?);
        Ok(Self { shipment })
    }
}

/// Looks a shipment up by its carrier barcode.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShipmentByBarcodeRequest {
    /// The carrier barcode.
    pub barcode: String,
}

impl ShipmentByBarcodeRequest {
    /// Creates a lookup request for the given barcode.
    pub fn new(barcode: impl Into<String>) -> Self {
        Self {
            barcode: barcode.into(),
        }
    }
}

impl ApiRequest for ShipmentByBarcodeRequest {
    type Response = ShipmentByBarcodeResponse;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn uri(&self) -> String {
        format!("api/shipments/barcode/{}", self.barcode)
    }
}

/// One denormalized shipment.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipmentByBarcodeResponse {
    /// The shipment matching the barcode.
    pub shipment: Shipment,
}

impl ApiResponse for ShipmentByBarcodeResponse {
    fn from_payload(payload: &Value, registry: &DenormalizerRegistry) -> Result<Self, ApiError> {
        let shipment = registry.shipment(require_key(payload, "shipment")?);
        Ok(Self { shipment })
    }
}
