//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use boxoffice_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::DuplicateUuid => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::PriceOutOfRange => StatusError::bad_request(),
        ProductsServiceError::UnknownEvent | ProductsServiceError::ProductNotFound => {
            StatusError::not_found()
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
