//! Cart Filter

use crate::{
    auth::UserUuid,
    domain::{
        carts::{identity::Identity, models::CartPosition, session::SessionKey},
        events::models::EventUuid,
    },
};

/// Selects the positions belonging to one visitor for one event.
///
/// A position matches when it is for `event` and is owned by the session key,
/// or by the user when one is present. Whether a position is still active is
/// left to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartFilter {
    event: EventUuid,
    session_key: SessionKey,
    user: Option<UserUuid>,
}

impl CartFilter {
    #[must_use]
    pub const fn new(event: EventUuid, identity: &Identity) -> Self {
        Self {
            event,
            session_key: identity.session_key,
            user: identity.user,
        }
    }

    #[must_use]
    pub const fn event(&self) -> EventUuid {
        self.event
    }

    #[must_use]
    pub const fn session_key(&self) -> SessionKey {
        self.session_key
    }

    #[must_use]
    pub const fn user(&self) -> Option<UserUuid> {
        self.user
    }

    /// Evaluate the predicate against a position already in memory.
    #[must_use]
    pub fn matches(&self, position: &CartPosition) -> bool {
        if position.event != self.event {
            return false;
        }

        let session_match = position.session_key == Some(self.session_key);
        let user_match = self.user.is_some() && position.user == self.user;

        session_match || user_match
    }
}
