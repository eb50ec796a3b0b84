//! Events service.

use async_trait::async_trait;
use mockall::automock;
use rusty_money::iso;
use tracing::debug;

use crate::{
    database::Db,
    domain::events::{
        errors::EventsServiceError,
        models::{Event, NewEvent},
        repository::PgEventsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgEventsService {
    db: Db,
    repository: PgEventsRepository,
}

impl PgEventsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgEventsRepository::new(),
        }
    }
}

#[async_trait]
impl EventsService for PgEventsService {
    async fn get_event_by_slug(&self, slug: &str) -> Result<Event, EventsServiceError> {
        let mut tx = self.db.begin().await?;

        let event = self.repository.get_event_by_slug(&mut tx, slug).await?;

        tx.commit().await?;

        Ok(event)
    }

    async fn create_event(&self, event: NewEvent) -> Result<Event, EventsServiceError> {
        check_currency(&event.currency)?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_event(&mut tx, event).await?;

        tx.commit().await?;

        Ok(created)
    }
}

/// Amounts are rendered in the event currency, so only ISO 4217 codes are accepted.
fn check_currency(code: &str) -> Result<(), EventsServiceError> {
    if iso::find(code).is_none() {
        debug!(currency = code, "rejected unknown currency code");

        return Err(EventsServiceError::InvalidData);
    }

    Ok(())
}

#[automock]
#[async_trait]
pub trait EventsService: Send + Sync {
    /// Look up a live event by its routing slug.
    async fn get_event_by_slug(&self, slug: &str) -> Result<Event, EventsServiceError>;

    /// Creates a new event with the given details.
    async fn create_event(&self, event: NewEvent) -> Result<Event, EventsServiceError>;
}
