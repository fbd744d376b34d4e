//! Domain entities returned by the Outofbox API.
//!
//! All entities derive serde traits for the structural pass; the irregular
//! parts of their wire shapes (dynamic product fields, polymorphic
//! dictionary values, mixed item collections, date strings) are handled by
//! the entity-specific denormalizers in [`crate::serializer`].

mod category;
mod dictionary;
mod product;
mod shipment;
mod shop_order;
mod store;

pub use category::Category;
pub use dictionary::DictionaryValue;
pub use product::{Image, Product};
pub use shipment::{Shipment, ShipmentState};
pub use shop_order::{ShopOrder, ShopOrderItem};
pub use store::Store;
