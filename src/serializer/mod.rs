//! Denormalization of API payloads into domain entities.
//!
//! Three entities have wire shapes too irregular for a plain serde derive:
//! products (dynamic field sets, mixed image collections), shipments
//! (overlay state fields), and shop orders (dictionary overlays, per-item
//! tolerant collections). Each gets a dedicated denormalizer that first runs
//! a **structural pass** (a straight serde decode) and then **reconciles**
//! the irregular fields by hand.
//!
//! # Tolerant degradation
//!
//! A structural-pass failure never aborts a conversion: the denormalizer
//! logs it at debug level and continues reconciliation against a default
//! entity. Fields handled by reconciliation therefore always end up set when
//! present in the input, whatever the structural pass did. Better a partial
//! object than a failed response.
//!
//! # Dispatch
//!
//! [`DenormalizerRegistry`] dispatches by the [`DomainKind`] tag; each
//! denormalizer also answers [`supports`](ProductDenormalizer::supports) so
//! callers can probe capabilities without a conversion.

pub mod dates;
mod product;
mod shipment;
mod shop_order;

use serde_json::Value;

pub use product::ProductDenormalizer;
pub use shipment::ShipmentDenormalizer;
pub use shop_order::ShopOrderDenormalizer;

use crate::model::{Product, Shipment, ShopOrder};

/// The entity kinds with a dedicated denormalizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DomainKind {
    /// [`crate::model::Product`]
    Product,
    /// [`crate::model::Shipment`]
    Shipment,
    /// [`crate::model::ShopOrder`]
    ShopOrder,
}

/// A denormalized entity, tagged by kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Denormalized {
    /// A denormalized product.
    Product(Product),
    /// A denormalized shipment.
    Shipment(Shipment),
    /// A denormalized shop order.
    ShopOrder(ShopOrder),
}

/// Owns the three entity denormalizers and dispatches by [`DomainKind`].
///
/// The denormalizers are stateless, so the registry is `Copy` and safe to
/// share between concurrent calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct DenormalizerRegistry {
    product: ProductDenormalizer,
    shipment: ShipmentDenormalizer,
    shop_order: ShopOrderDenormalizer,
}

impl DenormalizerRegistry {
    /// Creates a registry with the default denormalizers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Denormalizes `data` as the given kind.
    #[must_use]
    pub fn denormalize(&self, data: &Value, kind: DomainKind) -> Denormalized {
        match kind {
            DomainKind::Product => Denormalized::Product(self.product.denormalize(data)),
            DomainKind::Shipment => Denormalized::Shipment(self.shipment.denormalize(data)),
            DomainKind::ShopOrder => Denormalized::ShopOrder(self.shop_order.denormalize(data)),
        }
    }

    /// Denormalizes `data` as a [`Product`].
    #[must_use]
    pub fn product(&self, data: &Value) -> Product {
        self.product.denormalize(data)
    }

    /// Denormalizes `data` as a [`Shipment`].
    #[must_use]
    pub fn shipment(&self, data: &Value) -> Shipment {
        self.shipment.denormalize(data)
    }

    /// Denormalizes `data` as a [`ShopOrder`].
    #[must_use]
    pub fn shop_order(&self, data: &Value) -> ShopOrder {
        self.shop_order.denormalize(data)
    }
}
