//! Depot helper extensions.

use std::any::Any;

use boxoffice_app::{
    auth::UserUuid,
    domain::{carts::Identity, events::models::Event},
};
use salvo::prelude::{Depot, StatusError};

/// Typed accessors for values the middleware stack leaves in the depot.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_user_uuid(&mut self, user: UserUuid);

    /// The authenticated visitor, if a bearer token was presented.
    fn user_uuid(&self) -> Option<UserUuid>;

    fn insert_event(&mut self, event: Event);

    fn event_or_500(&self) -> Result<&Event, StatusError>;

    fn insert_identity(&mut self, identity: Identity);

    fn identity_or_500(&self) -> Result<Identity, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_user_uuid(&mut self, user: UserUuid) {
        self.inject(user);
    }

    fn user_uuid(&self) -> Option<UserUuid> {
        self.obtain::<UserUuid>().ok().copied()
    }

    fn insert_event(&mut self, event: Event) {
        self.inject(event);
    }

    fn event_or_500(&self) -> Result<&Event, StatusError> {
        self.obtain_or_500::<Event>()
    }

    fn insert_identity(&mut self, identity: Identity) {
        self.inject(identity);
    }

    fn identity_or_500(&self) -> Result<Identity, StatusError> {
        self.obtain_or_500::<Identity>().copied()
    }
}
