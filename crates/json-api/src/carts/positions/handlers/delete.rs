//! Delete Cart Position Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Delete Cart Position Handler
///
/// Only positions owned by the current visitor can be removed; anything else is a 404.
#[endpoint(
    tags("carts"),
    summary = "Remove Position from Cart",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart position removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart position not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    position: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let event = depot.event_or_500()?;
    let identity = depot.identity_or_500()?;

    state
        .app
        .carts
        .remove_position(identity, event.uuid, position.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use boxoffice_app::domain::carts::{
        CartsServiceError, MockCartsService, models::CartPositionUuid,
    };
    use salvo::test::TestClient;

    use crate::test_helpers::{TEST_EVENT_UUID, TEST_IDENTITY, carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("cart/positions/{position}").delete(handler),
        )
    }

    #[tokio::test]
    async fn removes_position_for_current_visitor() {
        let position = Uuid::now_v7();
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_position()
            .once()
            .withf(move |identity, event, uuid| {
                *identity == TEST_IDENTITY
                    && *event == TEST_EVENT_UUID
                    && *uuid == CartPositionUuid::from_uuid(position)
            })
            .return_once(|_, _, _| Ok(()));

        let res = TestClient::delete(format!("http://example.com/cart/positions/{position}"))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
    }

    #[tokio::test]
    async fn unknown_position_returns_404() {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_position()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::NotFound));

        let res = TestClient::delete(format!(
            "http://example.com/cart/positions/{}",
            Uuid::now_v7()
        ))
        .send(&make_service(carts))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn malformed_position_uuid_returns_400() {
        let res = TestClient::delete("http://example.com/cart/positions/not-a-uuid")
            .send(&make_service(MockCartsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
