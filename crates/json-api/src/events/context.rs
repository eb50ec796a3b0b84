//! Event-scoped response envelope.

use boxoffice_app::domain::events::models::Event;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The event a response belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct EventResponse {
    pub uuid: Uuid,
    pub slug: String,
    pub name: String,

    /// ISO 4217 code all amounts in the payload are denominated in
    pub currency: String,

    /// Minutes a newly added cart position stays reserved
    pub reservation_minutes: u32,
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            uuid: event.uuid.into_uuid(),
            slug: event.slug.clone(),
            name: event.name.clone(),
            currency: event.currency.clone(),
            reservation_minutes: event.reservation_minutes,
        }
    }
}

/// A payload rendered in the context of the routed event.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EventContext<T>
where
    T: ToSchema + 'static,
{
    pub event: EventResponse,
    pub data: T,
}

impl<T> EventContext<T>
where
    T: ToSchema + 'static,
{
    pub(crate) fn new(event: &Event, data: T) -> Self {
        Self {
            event: event.into(),
            data,
        }
    }
}
