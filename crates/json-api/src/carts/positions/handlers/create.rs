//! Create Cart Position Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use boxoffice_app::domain::carts::models::{CartPosition, NewCartPosition};

use crate::{
    carts::errors::into_status_error, events::EventContext, extensions::*, money::format_minor,
    state::State,
};

/// Create Cart Position Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePositionRequest {
    pub uuid: Uuid,
    pub product_uuid: Uuid,

    /// Variant of the product to reserve, if it has any
    #[serde(default)]
    pub variant_uuid: Option<Uuid>,
}

impl From<CreatePositionRequest> for NewCartPosition {
    fn from(request: CreatePositionRequest) -> Self {
        NewCartPosition {
            uuid: request.uuid.into(),
            product: request.product_uuid.into(),
            variant: request.variant_uuid.map(Into::into),
        }
    }
}

/// Cart Position Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PositionCreatedResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,
    pub variant_uuid: Option<Uuid>,

    /// Unit price in minor currency units
    pub price: u64,
    pub price_display: String,

    /// RFC 3339 timestamp the reservation lapses at
    pub expires_at: String,
}

impl PositionCreatedResponse {
    fn new(position: &CartPosition, currency: &str) -> Result<Self, StatusError> {
        Ok(Self {
            uuid: position.uuid.into_uuid(),
            product_uuid: position.product.into_uuid(),
            variant_uuid: position.variant.map(Uuid::from),
            price: position.price,
            price_display: format_minor(position.price, currency)
                .or_500("failed to format position price")?,
            expires_at: position.expires_at.to_string(),
        })
    }
}

/// Create Cart Position Handler
///
/// Reserves one unit of a product, or of one of its variants, in the visitor's cart.
#[endpoint(
    tags("carts"),
    summary = "Add Position to Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart position created"),
        (status_code = StatusCode::NOT_FOUND, description = "Event, product or variant not found"),
        (status_code = StatusCode::CONFLICT, description = "Position UUID already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePositionRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<EventContext<PositionCreatedResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let event = depot.event_or_500()?;
    let identity = depot.identity_or_500()?;

    let position = state
        .app
        .carts
        .add_position(identity, event.uuid, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    let created = PositionCreatedResponse::new(&position, &event.currency)?;

    res.add_header(
        LOCATION,
        format!("/events/{}/cart/positions/{}", event.slug, position.uuid),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(EventContext::new(event, created)))
}

#[cfg(test)]
mod tests {
    use boxoffice_app::domain::{
        carts::{CartsServiceError, MockCartsService, models::CartPositionUuid},
        products::models::{ProductUuid, VariantUuid},
    };
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use crate::test_helpers::{
        TEST_EVENT_SLUG, TEST_EVENT_UUID, TEST_IDENTITY, TEST_SESSION_KEY, carts_service,
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/positions").post(handler))
    }

    fn created(new: NewCartPosition) -> CartPosition {
        CartPosition {
            uuid: new.uuid,
            event: TEST_EVENT_UUID,
            session_key: Some(TEST_SESSION_KEY),
            user: None,
            product: new.product,
            product_name: "Day Pass".to_string(),
            variant: new.variant,
            variant_name: new.variant.map(|_| "Balcony".to_string()),
            price: 12_50,
            expires_at: Timestamp::UNIX_EPOCH,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn creates_position_and_sets_location() -> TestResult {
        let uuid = Uuid::now_v7();
        let product = Uuid::now_v7();
        let variant = Uuid::now_v7();

        let mut carts = MockCartsService::new();

        carts
            .expect_add_position()
            .once()
            .withf(move |identity, event, new| {
                *identity == TEST_IDENTITY
                    && *event == TEST_EVENT_UUID
                    && *new
                        == NewCartPosition {
                            uuid: CartPositionUuid::from_uuid(uuid),
                            product: ProductUuid::from_uuid(product),
                            variant: Some(VariantUuid::from_uuid(variant)),
                        }
            })
            .return_once(|_, _, new| Ok(created(new)));

        let mut res = TestClient::post("http://example.com/cart/positions")
            .json(&json!({
                "uuid": uuid,
                "product_uuid": product,
                "variant_uuid": variant,
            }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let location = res
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);

        assert_eq!(
            location,
            Some(format!("/events/{TEST_EVENT_SLUG}/cart/positions/{uuid}"))
        );

        let body: Value = res.take_json().await?;

        assert_eq!(body["event"]["slug"], TEST_EVENT_SLUG);
        assert_eq!(body["data"]["uuid"], uuid.to_string());
        assert_eq!(body["data"]["variant_uuid"], variant.to_string());
        assert_eq!(body["data"]["price_display"], "$12.50");
        assert_eq!(body["data"]["expires_at"], "1970-01-01T00:00:00Z");

        Ok(())
    }

    #[tokio::test]
    async fn variant_is_optional() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_position()
            .once()
            .withf(|_, _, new| new.variant.is_none())
            .return_once(|_, _, new| Ok(created(new)));

        let mut res = TestClient::post("http://example.com/cart/positions")
            .json(&json!({ "uuid": Uuid::now_v7(), "product_uuid": Uuid::now_v7() }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: Value = res.take_json().await?;

        assert_eq!(body["data"]["variant_uuid"], Value::Null);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_product_returns_404() {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_position()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::NotFound));

        let res = TestClient::post("http://example.com/cart/positions")
            .json(&json!({ "uuid": Uuid::now_v7(), "product_uuid": Uuid::now_v7() }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn duplicate_uuid_returns_409() {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_position()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/cart/positions")
            .json(&json!({ "uuid": Uuid::now_v7(), "product_uuid": Uuid::now_v7() }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }

    #[tokio::test]
    async fn missing_product_uuid_returns_400() {
        let res = TestClient::post("http://example.com/cart/positions")
            .json(&json!({ "uuid": Uuid::now_v7() }))
            .send(&make_service(MockCartsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
