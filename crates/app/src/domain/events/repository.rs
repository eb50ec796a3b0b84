//! Events Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::events::models::{Event, EventUuid, NewEvent};

const GET_EVENT_BY_SLUG_SQL: &str = include_str!("sql/get_event_by_slug.sql");
const CREATE_EVENT_SQL: &str = include_str!("sql/create_event.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgEventsRepository;

impl PgEventsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_event_by_slug(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<Event, sqlx::Error> {
        query_as::<Postgres, Event>(GET_EVENT_BY_SLUG_SQL)
            .bind(slug)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_event(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: NewEvent,
    ) -> Result<Event, sqlx::Error> {
        let reservation_minutes =
            i32::try_from(event.reservation_minutes).map_err(|e| sqlx::Error::ColumnDecode {
                index: "reservation_minutes".to_string(),
                source: Box::new(e),
            })?;

        query_as::<Postgres, Event>(CREATE_EVENT_SQL)
            .bind(event.uuid.into_uuid())
            .bind(event.slug)
            .bind(event.name)
            .bind(event.currency)
            .bind(reservation_minutes)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Event {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let reservation_minutes: i32 = row.try_get("reservation_minutes")?;

        let reservation_minutes =
            u32::try_from(reservation_minutes).map_err(|e| sqlx::Error::ColumnDecode {
                index: "reservation_minutes".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: EventUuid::from_uuid(row.try_get("uuid")?),
            slug: row.try_get("slug")?,
            name: row.try_get("name")?,
            currency: row.try_get("currency")?,
            reservation_minutes,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
