//! Product entity with its dynamic field set and image gallery.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A product image: a storage path plus optional modification variants
/// (thumbnails, crops) as delivered by the API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Storage path of the original image.
    pub path: String,
    /// Modification variants keyed by the service; shape varies per account
    /// configuration, so it is kept as raw JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifications: Option<Value>,
}

impl Image {
    /// Creates an image with only a path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            modifications: None,
        }
    }
}

/// A product in the Outofbox catalog.
///
/// Products carry a *dynamic* field set: `fields_names` maps a human-facing
/// title to the property name holding the value, and the values themselves
/// arrive as ordinary top-level keys. The typed struct therefore keeps the
/// fixed sub-structures (`images`, `created_at`, `fields_names`) as real
/// fields and collects everything else into [`Product::fields`].
///
/// # Example
///
/// ```rust
/// use outofbox_sdk::model::Product;
/// use serde_json::json;
///
/// let product: Product = serde_json::from_value(json!({
///     "id": 17,
///     "fields_names": {"Title": "title"},
///     "title": "Blue mug",
/// }))
/// .unwrap();
///
/// assert_eq!(product.id, Some(17));
/// assert_eq!(product.field("title").and_then(|v| v.as_str()), Some("Blue mug"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Human title → property name, as declared by the service.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields_names: BTreeMap<String, String>,

    /// Ordered image gallery. Entries without a usable `path` are dropped
    /// on deserialization (lenient-parsing policy).
    #[serde(
        default,
        deserialize_with = "de_images",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub images: Vec<Image>,

    /// Creation timestamp.
    #[serde(
        default,
        deserialize_with = "crate::serializer::dates::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// The dynamic field values (every top-level key not captured above).
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

/// Deserializes the image list leniently: recognizable entries are kept in
/// order, anything else is dropped. A non-list value is still an error so
/// the structural pass can report it.
fn de_images<'de, D>(deserializer: D) -> Result<Vec<Image>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

impl Product {
    /// Returns a dynamic field value by its property name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Convenience accessor for the conventional `title` field.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.field("title").and_then(Value::as_str)
    }
}
