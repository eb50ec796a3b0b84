//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    events::EventContext,
    extensions::*,
    products::{ProductResponse, errors::into_status_error},
    state::State,
};

/// Product Index Handler
///
/// Lists the active products of the routed event with their variants.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products of the event"),
        (status_code = StatusCode::NOT_FOUND, description = "Event not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<EventContext<Vec<ProductResponse>>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let event = depot.event_or_500()?;

    let products = state
        .app
        .products
        .list_products(event.uuid)
        .await
        .map_err(into_status_error)?
        .into_iter()
        .map(|product| ProductResponse::from_product(product, &event.currency))
        .collect::<Result<Vec<_>, _>>()
        .or_500("failed to format product prices")?;

    Ok(Json(EventContext::new(event, products)))
}
