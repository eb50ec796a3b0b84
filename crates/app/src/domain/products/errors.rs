//! Products service errors.

use sqlx::{Error, error::ErrorKind};
use thiserror::Error;

/// Failures while listing or creating products and variants.
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// The event a product was created for does not exist.
    #[error("event not found")]
    UnknownEvent,

    /// The product a variant was added to is missing or deleted.
    #[error("product not found")]
    ProductNotFound,

    #[error("a product or variant with this uuid already exists")]
    DuplicateUuid,

    /// Prices are stored as `BIGINT` and must be non-negative.
    #[error("price outside the storable range")]
    PriceOutOfRange,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        match error {
            // Variant inserts select from live products, so a missing
            // parent returns no row.
            Error::RowNotFound => Self::ProductNotFound,
            Error::ColumnDecode { .. } => Self::PriceOutOfRange,
            Error::Database(ref db) => match db.kind() {
                ErrorKind::ForeignKeyViolation => Self::UnknownEvent,
                ErrorKind::UniqueViolation => Self::DuplicateUuid,
                ErrorKind::CheckViolation => Self::PriceOutOfRange,
                _ => Self::Sql(error),
            },
            _ => Self::Sql(error),
        }
    }
}
