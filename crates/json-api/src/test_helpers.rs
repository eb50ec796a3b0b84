//! Test helpers.

use std::sync::Arc;

use boxoffice_app::{
    auth::{AuthService, MockAuthService},
    context::AppContext,
    domain::{
        carts::{CartsService, Identity, MockCartsService, SessionKey},
        events::{
            EventsService, MockEventsService,
            models::{Event, EventUuid},
        },
        products::{MockProductsService, ProductsService},
    },
};
use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_EVENT_UUID: EventUuid = EventUuid::from_uuid(Uuid::nil());
pub(crate) const TEST_EVENT_SLUG: &str = "test-event";
pub(crate) const TEST_SESSION_KEY: SessionKey = SessionKey::from_uuid(Uuid::from_u128(1));
pub(crate) const TEST_IDENTITY: Identity = Identity::anonymous(TEST_SESSION_KEY);

pub(crate) fn make_event(slug: &str) -> Event {
    Event {
        uuid: TEST_EVENT_UUID,
        slug: slug.to_string(),
        name: "Test Event".to_string(),
        currency: "USD".to_string(),
        reservation_minutes: 30,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

/// Stand-in for the session and event layers: a fixed anonymous visitor on the test event.
#[salvo::handler]
pub(crate) async fn inject_event_context(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_event(make_event(TEST_EVENT_SLUG));
    depot.insert_identity(TEST_IDENTITY);

    ctrl.call_next(req, depot, res).await;
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_position().never();
    carts.expect_remove_position().never();

    carts
}

fn strict_events_mock() -> MockEventsService {
    let mut events = MockEventsService::new();

    events.expect_get_event_by_slug().never();
    events.expect_create_event().never();

    events
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_create_product().never();
    products.expect_create_variant().never();

    products
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn state(
    carts: Arc<dyn CartsService>,
    events: Arc<dyn EventsService>,
    products: Arc<dyn ProductsService>,
    auth: Arc<dyn AuthService>,
) -> Arc<State> {
    State::from_app_context(AppContext {
        carts,
        events,
        products,
        auth,
    })
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    state(
        Arc::new(carts),
        Arc::new(strict_events_mock()),
        Arc::new(strict_products_mock()),
        Arc::new(strict_auth_mock()),
    )
}

pub(crate) fn state_with_events(events: MockEventsService) -> Arc<State> {
    state(
        Arc::new(strict_carts_mock()),
        Arc::new(events),
        Arc::new(strict_products_mock()),
        Arc::new(strict_auth_mock()),
    )
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    state(
        Arc::new(strict_carts_mock()),
        Arc::new(strict_events_mock()),
        Arc::new(products),
        Arc::new(strict_auth_mock()),
    )
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state(
        Arc::new(strict_carts_mock()),
        Arc::new(strict_events_mock()),
        Arc::new(strict_products_mock()),
        Arc::new(auth),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .hoop(inject_event_context)
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .hoop(inject_event_context)
            .push(route),
    )
}
