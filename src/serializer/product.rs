//! Product denormalization.

use serde_json::Value;

use crate::model::{Image, Product};
use crate::serializer::{dates, DomainKind};

/// Converts product payloads into [`Product`] values.
///
/// After the structural pass, three reconciliations run:
///
/// 1. Every `(title, property)` pair in `fields_names` is re-applied onto
///    the dynamic field map, overwriting structural results; dynamic
///    fields are not guaranteed to be discoverable structurally.
/// 2. `images` is rebuilt in order, keeping entries with a usable `path`
///    and silently dropping the rest (lenient-parsing policy, not an
///    error).
/// 3. `created_at` is reparsed leniently.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProductDenormalizer;

impl ProductDenormalizer {
    /// Returns `true` for [`DomainKind::Product`].
    #[must_use]
    pub fn supports(&self, kind: DomainKind) -> bool {
        kind == DomainKind::Product
    }

    /// Denormalizes a product payload. Never fails; a structural-pass error
    /// degrades to a default entity that reconciliation then fills in.
    #[must_use]
    pub fn denormalize(&self, data: &Value) -> Product {
        let mut product = match serde_json::from_value::<Product>(data.clone()) {
            Ok(product) => product,
            Err(error) => {
                tracing::debug!(%error, "product structural pass failed, reconciling from scratch");
                Product::default()
            }
        };

        if let Some(names) = data.get("fields_names").and_then(Value::as_object) {
            for (title, name) in names {
                let Some(name) = name.as_str() else { continue };
                product
                    .fields_names
                    .insert(title.clone(), name.to_string());
                if let Some(value) = data.get(name) {
                    product.fields.insert(name.to_string(), value.clone());
                }
            }
        }

        let mut images = Vec::new();
        if let Some(entries) = data.get("images").and_then(Value::as_array) {
            for entry in entries {
                if let Ok(image) = serde_json::from_value::<Image>(entry.clone()) {
                    images.push(image);
                }
            }
        }
        product.images = images;

        product.created_at = data
            .get("created_at")
            .and_then(Value::as_str)
            .and_then(dates::parse);

        product
    }
}
