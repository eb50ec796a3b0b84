//! Product Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use boxoffice_app::domain::products::models::{Product, Variant};

use crate::money::{MoneyFormatError, format_minor};

/// Variant Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct VariantResponse {
    pub uuid: Uuid,
    pub name: String,

    /// Price in minor currency units
    pub price: u64,
    pub price_display: String,
}

impl VariantResponse {
    fn from_variant(variant: Variant, currency: &str) -> Result<Self, MoneyFormatError> {
        Ok(Self {
            uuid: variant.uuid.into_uuid(),
            price_display: format_minor(variant.price, currency)?,
            price: variant.price,
            name: variant.name,
        })
    }
}

/// Product Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    pub uuid: Uuid,
    pub name: String,

    /// Price in minor currency units, used when no variant is chosen
    pub price: u64,
    pub price_display: String,
    pub variants: Vec<VariantResponse>,
}

impl ProductResponse {
    pub(crate) fn from_product(product: Product, currency: &str) -> Result<Self, MoneyFormatError> {
        Ok(Self {
            uuid: product.uuid.into_uuid(),
            price_display: format_minor(product.price, currency)?,
            price: product.price,
            variants: product
                .variants
                .into_iter()
                .map(|variant| VariantResponse::from_variant(variant, currency))
                .collect::<Result<_, _>>()?,
            name: product.name,
        })
    }
}
