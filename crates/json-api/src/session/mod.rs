//! Visitor sessions
//!
//! Cookie-backed salvo sessions carry the anonymous cart key. The identity
//! middleware resolves that key, pairs it with the authenticated user when
//! there is one, and leaves the resulting [`Identity`] in the depot.

use boxoffice_app::domain::carts::{Identity, SessionKey, SessionState};
use salvo::{
    prelude::*,
    session::{MemoryStore, Session, SessionDepotExt, SessionHandler},
};
use tracing::warn;

use crate::{config::session::SessionConfig, extensions::*};

/// Build the cookie session layer.
pub(crate) fn session_handler(
    config: &SessionConfig,
) -> Result<impl Handler + use<>, salvo::Error> {
    SessionHandler::builder(MemoryStore::new(), config.secret.as_bytes()).build()
}

/// [`SessionState`] over a salvo session.
struct SalvoSession<'a>(&'a mut Session);

impl SessionState for SalvoSession<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get::<String>(key)
    }

    fn insert(&mut self, key: &str, value: String) {
        if let Err(source) = self.0.insert(key, value) {
            warn!(key, "failed to store session value: {source}");
        }
    }
}

#[handler]
pub(crate) async fn identity(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if depot.session_mut().is_none() {
        depot.set_session(Session::new());
    }

    let Some(session) = depot.session_mut() else {
        res.render(StatusError::internal_server_error());

        return;
    };

    let session_key = SessionKey::resolve(&mut SalvoSession(session));

    let visitor = match depot.user_uuid() {
        Some(user) => Identity::authenticated(session_key, user),
        None => Identity::anonymous(session_key),
    };

    depot.insert_identity(visitor);

    ctrl.call_next(req, depot, res).await;
}

#[cfg(test)]
mod tests {
    use boxoffice_app::auth::UserUuid;
    use salvo::{
        http::header::{COOKIE, SET_COOKIE},
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;
    use uuid::Uuid;

    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    #[handler]
    async fn echo_identity(depot: &mut Depot, res: &mut Response) {
        match depot.identity_or_500() {
            Ok(visitor) => res.render(format!(
                "{}|{}",
                visitor.session_key,
                visitor
                    .user
                    .map_or_else(|| "anonymous".to_string(), |user| user.to_string())
            )),
            Err(error) => res.render(error),
        }
    }

    #[handler]
    async fn inject_user(depot: &mut Depot) {
        depot.insert_user_uuid(UserUuid::from_uuid(Uuid::from_u128(5)));
    }

    fn make_service(authenticated: bool) -> TestResult<Service> {
        let config = SessionConfig {
            secret: SECRET.to_string(),
        };

        let mut router = Router::new().hoop(session_handler(&config)?);

        if authenticated {
            router = router.hoop(inject_user);
        }

        Ok(Service::new(
            router.hoop(identity).push(Router::new().get(echo_identity)),
        ))
    }

    fn session_cookie(res: &Response) -> Option<String> {
        let set_cookie = res.headers().get(SET_COOKIE)?.to_str().ok()?;

        set_cookie.split(';').next().map(str::to_owned)
    }

    #[tokio::test]
    async fn first_visit_issues_a_key_and_cookie() -> TestResult {
        let service = make_service(false)?;

        let mut res = TestClient::get("http://example.com").send(&service).await;

        let cookie = session_cookie(&res);
        let body = res.take_string().await?;
        let (key, user) = body.split_once('|').ok_or("malformed body")?;

        assert!(cookie.is_some(), "a new session should set a cookie");
        assert!(key.parse::<SessionKey>().is_ok(), "expected a key, got {key}");
        assert_eq!(user, "anonymous");

        Ok(())
    }

    #[tokio::test]
    async fn same_session_keeps_its_key() -> TestResult {
        let service = make_service(false)?;

        let mut first = TestClient::get("http://example.com").send(&service).await;
        let cookie = session_cookie(&first).ok_or("missing session cookie")?;
        let first_body = first.take_string().await?;

        let mut second = TestClient::get("http://example.com")
            .add_header(COOKIE, cookie, true)
            .send(&service)
            .await;

        assert_eq!(second.take_string().await?, first_body);

        Ok(())
    }

    #[tokio::test]
    async fn separate_sessions_get_separate_keys() -> TestResult {
        let service = make_service(false)?;

        let first = TestClient::get("http://example.com")
            .send(&service)
            .await
            .take_string()
            .await?;
        let second = TestClient::get("http://example.com")
            .send(&service)
            .await
            .take_string()
            .await?;

        assert_ne!(first, second);

        Ok(())
    }

    #[tokio::test]
    async fn authenticated_user_joins_the_identity() -> TestResult {
        let service = make_service(true)?;

        let body = TestClient::get("http://example.com")
            .send(&service)
            .await
            .take_string()
            .await?;

        assert!(
            body.ends_with(&Uuid::from_u128(5).to_string()),
            "expected user in identity, got {body}"
        );

        Ok(())
    }

    #[test]
    fn salvo_session_reads_back_inserted_values() {
        let mut session = Session::new();
        let mut state = SalvoSession(&mut session);

        state.insert("cart_key", "value".to_string());

        assert_eq!(state.get("cart_key").as_deref(), Some("value"));
        assert_eq!(state.get("other"), None);
    }
}
