//! Event context middleware.

use std::sync::Arc;

use salvo::prelude::*;
use tracing::debug;

use crate::{events::errors::into_status_error, extensions::*, state::State};

/// Resolve the `{event}` path segment into the depot.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(slug) = req.param::<String>("event") else {
        res.render(StatusError::not_found().brief("Event not found"));

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    let resolved = state.app.events.get_event_by_slug(&slug).await;

    match resolved {
        Ok(event) => {
            debug!(event = %event.uuid, slug = %slug, "resolved event context");

            depot.insert_event(event);
        }
        Err(error) => {
            res.render(into_status_error(error));

            return;
        }
    }

    ctrl.call_next(req, depot, res).await;
}
