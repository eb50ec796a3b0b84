//! Cart Positions Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    auth::UserUuid,
    database::try_get_amount,
    domain::{
        carts::{
            filter::CartFilter,
            identity::Identity,
            models::{CartPosition, CartPositionUuid, NewCartPosition},
            session::SessionKey,
        },
        events::models::EventUuid,
        products::models::{ProductUuid, VariantUuid},
    },
};

const LIST_CART_POSITIONS_SQL: &str = include_str!("../sql/list_cart_positions.sql");
const CREATE_CART_POSITION_SQL: &str = include_str!("../sql/create_cart_position.sql");
const DELETE_CART_POSITION_SQL: &str = include_str!("../sql/delete_cart_position.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartPositionsRepository;

impl PgCartPositionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_positions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &CartFilter,
    ) -> Result<Vec<CartPosition>, sqlx::Error> {
        query_as::<Postgres, CartPosition>(LIST_CART_POSITIONS_SQL)
            .bind(filter.event().into_uuid())
            .bind(filter.session_key().into_uuid())
            .bind(filter.user().map(UserUuid::into_uuid))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_position(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        identity: &Identity,
        event: EventUuid,
        position: NewCartPosition,
    ) -> Result<CartPosition, sqlx::Error> {
        query_as::<Postgres, CartPosition>(CREATE_CART_POSITION_SQL)
            .bind(position.uuid.into_uuid())
            .bind(event.into_uuid())
            .bind(identity.session_key.into_uuid())
            .bind(identity.user.map(UserUuid::into_uuid))
            .bind(position.product.into_uuid())
            .bind(position.variant.map(VariantUuid::into_uuid))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_position(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &CartFilter,
        position: CartPositionUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_POSITION_SQL)
            .bind(filter.event().into_uuid())
            .bind(filter.session_key().into_uuid())
            .bind(filter.user().map(UserUuid::into_uuid))
            .bind(position.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartPosition {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartPositionUuid::from_uuid(row.try_get("uuid")?),
            event: EventUuid::from_uuid(row.try_get("event_uuid")?),
            session_key: row
                .try_get::<Option<Uuid>, _>("session_key")?
                .map(SessionKey::from_uuid),
            user: row
                .try_get::<Option<Uuid>, _>("user_uuid")?
                .map(UserUuid::from_uuid),
            product: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            product_name: row.try_get("product_name")?,
            variant: row
                .try_get::<Option<Uuid>, _>("variant_uuid")?
                .map(VariantUuid::from_uuid),
            variant_name: row.try_get("variant_name")?,
            price: try_get_amount(row, "price")?,
            expires_at: row.try_get::<SqlxTimestamp, _>("expires_at")?.to_jiff(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
