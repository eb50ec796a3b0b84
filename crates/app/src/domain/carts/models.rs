//! Cart Models

use jiff::Timestamp;

use crate::{
    auth::UserUuid,
    domain::{
        carts::session::SessionKey,
        events::models::EventUuid,
        products::models::{ProductUuid, VariantUuid},
    },
    uuids::TypedUuid,
};

/// Cart Position UUID
pub type CartPositionUuid = TypedUuid<CartPosition>;

/// One reserved unit of a product (and optional variant) held in a visitor's cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPosition {
    pub uuid: CartPositionUuid,
    pub event: EventUuid,
    pub session_key: Option<SessionKey>,
    pub user: Option<UserUuid>,
    pub product: ProductUuid,
    pub product_name: String,
    pub variant: Option<VariantUuid>,
    pub variant_name: Option<String>,

    /// Unit price in minor currency units.
    pub price: u64,

    /// When the reservation lapses.
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// New Cart Position Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartPosition {
    pub uuid: CartPositionUuid,
    pub product: ProductUuid,
    pub variant: Option<VariantUuid>,
}
