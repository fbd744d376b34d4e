//! Shipment denormalization.

use serde_json::Value;

use crate::model::{Shipment, ShipmentState};
use crate::serializer::{dates, DomainKind};

/// Converts shipment payloads into [`Shipment`] values.
///
/// `current_state` and `state_updated_at` are overlays: they are rebuilt
/// only when the corresponding key is present in the payload and stay unset
/// otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShipmentDenormalizer;

impl ShipmentDenormalizer {
    /// Returns `true` for [`DomainKind::Shipment`].
    #[must_use]
    pub fn supports(&self, kind: DomainKind) -> bool {
        kind == DomainKind::Shipment
    }

    /// Denormalizes a shipment payload. Never fails; a structural-pass error
    /// degrades to a default entity that reconciliation then fills in.
    #[must_use]
    pub fn denormalize(&self, data: &Value) -> Shipment {
        let mut shipment = match serde_json::from_value::<Shipment>(data.clone()) {
            Ok(shipment) => shipment,
            Err(error) => {
                tracing::debug!(%error, "shipment structural pass failed, reconciling from scratch");
                Shipment::default()
            }
        };

        if let Some(state) = data.get("current_state") {
            shipment.current_state = Some(ShipmentState {
                state_type: state
                    .get("type")
                    .and_then(Value::as_str)
                    .map(ToString::to_string),
                value: state.get("value").cloned(),
                title: state
                    .get("title")
                    .and_then(Value::as_str)
                    .map(ToString::to_string),
            });
        }

        if let Some(raw) = data.get("state_updated_at").and_then(Value::as_str) {
            shipment.state_updated_at = dates::parse(raw);
        }

        shipment
    }
}
