//! Product Models

use jiff::Timestamp;

use crate::{domain::events::models::EventUuid, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Variant UUID
pub type VariantUuid = TypedUuid<Variant>;

/// Product Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub uuid: ProductUuid,
    pub event: EventUuid,
    pub name: String,

    /// Price in minor currency units.
    pub price: u64,
    pub variants: Vec<Variant>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// A priced option of a product, e.g. a seating category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub uuid: VariantUuid,
    pub product: ProductUuid,
    pub name: String,

    /// Price in minor currency units; replaces the product price.
    pub price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: u64,
}

/// New Variant Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewVariant {
    pub uuid: VariantUuid,
    pub name: String,
    pub price: u64,
}
