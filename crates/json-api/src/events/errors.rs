//! Errors

use boxoffice_app::domain::events::EventsServiceError;
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: EventsServiceError) -> StatusError {
    match error {
        EventsServiceError::NotFound => StatusError::not_found().brief("Event not found"),
        EventsServiceError::AlreadyExists => StatusError::conflict().brief("Event already exists"),
        EventsServiceError::MissingRequiredData | EventsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid event")
        }
        EventsServiceError::Sql(source) => {
            error!("failed to load event: {source}");

            StatusError::internal_server_error()
        }
    }
}
