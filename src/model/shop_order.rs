//! Shop order entity and its line items.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::DictionaryValue;

/// One line item of a shop order.
///
/// Every field is optional: items arrive in varying degrees of completeness
/// depending on which operation produced the order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopOrderItem {
    /// Line item identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Identifier of the ordered product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Item title as captured at order time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Ordered quantity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit price as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Remaining wire fields not modeled explicitly.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// An order placed through a connected shop.
///
/// `delivery_method` and `payment_method` are dictionary overlays that stay
/// unset unless present in the response. `items` preserves the wire order;
/// an entry the service sent in an unusable shape becomes `None` rather
/// than failing the whole order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopOrder {
    /// Order identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Shop-facing order number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Chosen delivery method, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<DictionaryValue>,

    /// Chosen payment method, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<DictionaryValue>,

    /// Line items, order preserved, unusable entries as `None`.
    #[serde(
        default,
        deserialize_with = "de_items",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub items: Vec<Option<ShopOrderItem>>,

    /// Remaining wire fields not modeled explicitly.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Deserializes the item list leniently: each entry becomes `Some(item)`
/// when usable and `None` otherwise, preserving length and order. A
/// non-list value is still an error so the structural pass can report it.
fn de_items<'de, D>(deserializer: D) -> Result<Vec<Option<ShopOrderItem>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).ok())
        .collect())
}
