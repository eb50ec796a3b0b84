//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    carts::{CartResponse, errors::into_status_error},
    events::EventContext,
    extensions::*,
    state::State,
};

/// Get Cart Handler
///
/// Returns the visitor's cart for the routed event: grouped positions, totals
/// and the minutes left on the earliest reservation.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart for the current visitor"),
        (status_code = StatusCode::NOT_FOUND, description = "Event not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed \"at\" timestamp"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    at: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<EventContext<CartResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let event = depot.event_or_500()?;
    let identity = depot.identity_or_500()?;
    let point_in_time = at.into_point_in_time()?;

    let summary = state
        .app
        .carts
        .get_cart(identity, event.uuid, point_in_time)
        .await
        .map_err(into_status_error)?;

    let cart = CartResponse::from_summary(summary, &event.currency)
        .or_500("failed to format cart amounts")?;

    Ok(Json(EventContext::new(event, cart)))
}
