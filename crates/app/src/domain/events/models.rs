//! Event Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Event UUID
pub type EventUuid = TypedUuid<Event>;

/// Event Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub uuid: EventUuid,

    /// URL-safe identifier used for routing.
    pub slug: String,
    pub name: String,

    /// ISO 4217 currency code prices are expressed in.
    pub currency: String,

    /// How long a cart position stays reserved.
    pub reservation_minutes: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// New Event Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub uuid: EventUuid,
    pub slug: String,
    pub name: String,
    pub currency: String,
    pub reservation_minutes: u32,
}
