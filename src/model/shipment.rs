//! Shipment entity and its tracking state.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A point in a shipment's state machine, as reported by the carrier feed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentState {
    /// Machine-readable state class (e.g. `"delivery"`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub state_type: Option<String>,
    /// State value; numeric for some carriers, symbolic for others.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Human-readable state title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A registered shipment.
///
/// `current_state` and `state_updated_at` are overlays: they stay unset
/// unless the response carries the corresponding keys.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// Shipment identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Carrier barcode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Latest tracking state, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_state: Option<ShipmentState>,

    /// When the tracking state last changed, when known.
    #[serde(
        default,
        deserialize_with = "crate::serializer::dates::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub state_updated_at: Option<DateTime<Utc>>,

    /// Remaining wire fields not modeled explicitly.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
