//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{
    auth, carts, events, healthcheck, observability::request_logging, products, session,
    state::State,
};

/// Event-scoped routes, mounted under `events/{event}`.
fn event_router() -> Router {
    Router::new()
        .push(
            Router::with_path("cart").get(carts::handlers::get::handler).push(
                Router::with_path("positions")
                    .post(carts::positions::handlers::create::handler)
                    .push(
                        Router::with_path("{position}")
                            .delete(carts::positions::handlers::delete::handler),
                    ),
            ),
        )
        .push(Router::with_path("products").get(products::handlers::index::handler))
}

/// Build the full application router around `state`.
///
/// `sessions` is the cookie session layer; it only wraps event routes so the
/// healthcheck never mints a session.
pub(crate) fn app_router(state: Arc<State>, sessions: impl Handler) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("events/{event}")
                .hoop(sessions)
                .hoop(auth::middleware::handler)
                .hoop(events::middleware::handler)
                .hoop(session::identity)
                .push(event_router()),
        )
}
