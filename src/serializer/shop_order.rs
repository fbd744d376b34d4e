//! Shop order denormalization.

use serde_json::Value;

use crate::model::{DictionaryValue, ShopOrder, ShopOrderItem};
use crate::serializer::DomainKind;

/// Converts shop-order payloads into [`ShopOrder`] values.
///
/// `delivery_method` and `payment_method` are rebuilt as
/// [`DictionaryValue`]s only when present. Each entry of `items` is
/// denormalized independently: usable maps become items, anything else
/// becomes a `None` placeholder. Item-level tolerance, order-level
/// success.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShopOrderDenormalizer;

impl ShopOrderDenormalizer {
    /// Returns `true` for [`DomainKind::ShopOrder`].
    #[must_use]
    pub fn supports(&self, kind: DomainKind) -> bool {
        kind == DomainKind::ShopOrder
    }

    /// Denormalizes a shop-order payload. Never fails; a structural-pass
    /// error degrades to a default entity that reconciliation then fills in.
    #[must_use]
    pub fn denormalize(&self, data: &Value) -> ShopOrder {
        let mut order = match serde_json::from_value::<ShopOrder>(data.clone()) {
            Ok(order) => order,
            Err(error) => {
                tracing::debug!(%error, "shop order structural pass failed, reconciling from scratch");
                ShopOrder::default()
            }
        };

        if let Some(method) = data.get("delivery_method") {
            order.delivery_method = Some(dictionary_value(method));
        }
        if let Some(method) = data.get("payment_method") {
            order.payment_method = Some(dictionary_value(method));
        }

        if let Some(entries) = data.get("items").and_then(Value::as_array) {
            order.items = entries.iter().map(denormalize_item).collect();
        }

        order
    }
}

/// Denormalizes one item entry; unusable shapes become `None`.
fn denormalize_item(entry: &Value) -> Option<ShopOrderItem> {
    if !entry.is_object() {
        return None;
    }
    match serde_json::from_value::<ShopOrderItem>(entry.clone()) {
        Ok(item) => Some(item),
        Err(error) => {
            tracing::debug!(%error, "dropping undecodable shop order item");
            None
        }
    }
}

/// Copies the `id`/`value` pair out of a dictionary map.
fn dictionary_value(data: &Value) -> DictionaryValue {
    DictionaryValue {
        id: data.get("id").and_then(Value::as_i64),
        value: data
            .get("value")
            .and_then(Value::as_str)
            .map(ToString::to_string),
    }
}
