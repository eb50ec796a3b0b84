//! Optional bearer auth middleware.

use std::sync::Arc;

use boxoffice_app::auth::AuthServiceError;
use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::error;

use crate::{extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let token = match extract_bearer_token(req) {
        BearerToken::Absent => {
            ctrl.call_next(req, depot, res).await;

            return;
        }
        BearerToken::Malformed => {
            res.render(StatusError::unauthorized().brief("Invalid Authorization header"));

            return;
        }
        BearerToken::Present(token) => token,
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    let user_uuid = match state.app.auth.authenticate_bearer(&token).await {
        Ok(user_uuid) => user_uuid,
        Err(AuthServiceError::NotFound) => {
            res.render(StatusError::unauthorized().brief("Invalid API token"));

            return;
        }
        Err(other) => {
            error!("failed to validate api token: {other}");

            res.render(StatusError::internal_server_error());

            return;
        }
    };

    depot.insert_user_uuid(user_uuid);

    ctrl.call_next(req, depot, res).await;
}

#[derive(Debug, PartialEq, Eq)]
enum BearerToken {
    Absent,
    Malformed,
    Present(String),
}

fn extract_bearer_token(req: &Request) -> BearerToken {
    let Some(value) = req.headers().get(AUTHORIZATION) else {
        return BearerToken::Absent;
    };

    let Ok(value) = value.to_str() else {
        return BearerToken::Malformed;
    };

    let mut parts = value.splitn(2, ' ');

    match (parts.next(), parts.next().map(str::trim)) {
        (Some(scheme), Some(token))
            if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() =>
        {
            BearerToken::Present(token.to_string())
        }
        _ => BearerToken::Malformed,
    }
}
