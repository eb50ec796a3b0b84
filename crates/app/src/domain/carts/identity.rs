//! Cart owner identity.

use crate::{auth::UserUuid, domain::carts::session::SessionKey};

/// Who is asking for a cart: always a session key, plus the user when logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub session_key: SessionKey,
    pub user: Option<UserUuid>,
}

impl Identity {
    #[must_use]
    pub const fn anonymous(session_key: SessionKey) -> Self {
        Self {
            session_key,
            user: None,
        }
    }

    #[must_use]
    pub const fn authenticated(session_key: SessionKey, user: UserUuid) -> Self {
        Self {
            session_key,
            user: Some(user),
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
