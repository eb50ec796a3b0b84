//! Cart response models.

use boxoffice_app::domain::{
    carts::{CartGroup, CartSummary},
    products::models::VariantUuid,
};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::{MoneyFormatError, format_minor};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Identical selections collapsed into one row each, ordered by product then variant
    pub positions: Vec<CartGroupResponse>,

    /// Grand total in minor units
    pub total: u64,
    pub total_display: String,

    /// Whole minutes until the earliest reservation in the cart lapses
    pub minutes_left: u64,
}

impl CartResponse {
    pub(crate) fn from_summary(
        summary: CartSummary,
        currency: &str,
    ) -> Result<Self, MoneyFormatError> {
        let positions = summary
            .groups
            .into_iter()
            .map(|group| CartGroupResponse::from_group(group, currency))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            positions,
            total: summary.total,
            total_display: format_minor(summary.total, currency)?,
            minutes_left: summary.minutes_left,
        })
    }
}

/// Cart Group Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartGroupResponse {
    pub product_uuid: Uuid,
    pub product_name: String,
    pub variant_uuid: Option<Uuid>,
    pub variant_name: Option<String>,

    /// Unit price in minor units
    pub price: u64,
    pub price_display: String,

    /// Number of positions in this row
    pub count: u64,

    /// `count` times `price`, in minor units
    pub total: u64,
    pub total_display: String,
}

impl CartGroupResponse {
    fn from_group(group: CartGroup, currency: &str) -> Result<Self, MoneyFormatError> {
        let position = group.position;

        Ok(Self {
            product_uuid: position.product.into_uuid(),
            product_name: position.product_name,
            variant_uuid: position.variant.map(VariantUuid::into_uuid),
            variant_name: position.variant_name,
            price: position.price,
            price_display: format_minor(position.price, currency)?,
            count: group.count,
            total: group.total,
            total_display: format_minor(group.total, currency)?,
        })
    }
}
