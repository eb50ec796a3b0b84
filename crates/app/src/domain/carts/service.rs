//! Carts service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            filter::CartFilter,
            identity::Identity,
            models::{CartPosition, CartPositionUuid, NewCartPosition},
            repositories::PgCartPositionsRepository,
            summary::CartSummary,
        },
        events::models::EventUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    positions_repository: PgCartPositionsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            positions_repository: PgCartPositionsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(
        &self,
        identity: Identity,
        event: EventUuid,
        now: Timestamp,
    ) -> Result<CartSummary, CartsServiceError> {
        let filter = CartFilter::new(event, &identity);

        let mut tx = self.db.begin().await?;

        let positions = self
            .positions_repository
            .list_positions(&mut tx, &filter)
            .await?;

        tx.commit().await?;

        let summary = CartSummary::from_positions(positions, now)?;

        debug!(
            event = %event,
            authenticated = identity.is_authenticated(),
            groups = summary.groups.len(),
            total = summary.total,
            minutes_left = summary.minutes_left,
            "cart summarised"
        );

        Ok(summary)
    }

    async fn add_position(
        &self,
        identity: Identity,
        event: EventUuid,
        position: NewCartPosition,
    ) -> Result<CartPosition, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .positions_repository
            .create_position(&mut tx, &identity, event, position)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn remove_position(
        &self,
        identity: Identity,
        event: EventUuid,
        position: CartPositionUuid,
    ) -> Result<(), CartsServiceError> {
        let filter = CartFilter::new(event, &identity);

        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .positions_repository
            .delete_position(&mut tx, &filter, position)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Summarise the active positions owned by `identity` for `event`, as seen at `now`.
    async fn get_cart(
        &self,
        identity: Identity,
        event: EventUuid,
        now: Timestamp,
    ) -> Result<CartSummary, CartsServiceError>;

    /// Reserve one unit of a product (or variant) for the visitor.
    async fn add_position(
        &self,
        identity: Identity,
        event: EventUuid,
        position: NewCartPosition,
    ) -> Result<CartPosition, CartsServiceError>;

    /// Drop a position from the visitor's cart.
    async fn remove_position(
        &self,
        identity: Identity,
        event: EventUuid,
        position: CartPositionUuid,
    ) -> Result<(), CartsServiceError>;
}
