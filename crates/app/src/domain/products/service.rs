//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        events::models::EventUuid,
        products::{
            errors::ProductsServiceError,
            models::{NewProduct, NewVariant, Product, ProductUuid, Variant},
            repository::PgProductsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self, event: EventUuid) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx, event).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn create_product(
        &self,
        event: EventUuid,
        product: NewProduct,
    ) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_product(&mut tx, event, product)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn create_variant(
        &self,
        product: ProductUuid,
        variant: NewVariant,
    ) -> Result<Variant, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_variant(&mut tx, product, variant)
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// List an event's live products together with their variants.
    async fn list_products(&self, event: EventUuid) -> Result<Vec<Product>, ProductsServiceError>;

    /// Creates a new product for the event.
    async fn create_product(
        &self,
        event: EventUuid,
        product: NewProduct,
    ) -> Result<Product, ProductsServiceError>;

    /// Adds a variant to an existing product.
    async fn create_variant(
        &self,
        product: ProductUuid,
        variant: NewVariant,
    ) -> Result<Variant, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::products::models::{ProductUuid, VariantUuid},
        test::TestContext,
    };

    use super::*;

    #[tokio::test]
    async fn create_product_returns_priced_product() -> TestResult {
        let ctx = TestContext::new().await;
        let event = ctx.create_event("products").await;
        let uuid = ProductUuid::new();

        let product = ctx
            .products
            .create_product(
                event.uuid,
                NewProduct {
                    uuid,
                    name: "Weekend Pass".to_string(),
                    price: 89_00,
                },
            )
            .await?;

        assert_eq!(product.uuid, uuid);
        assert_eq!(product.event, event.uuid);
        assert_eq!(product.price, 89_00);
        assert!(product.variants.is_empty());
        assert!(product.deleted_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn list_products_attaches_variants() -> TestResult {
        let ctx = TestContext::new().await;
        let event = ctx.create_event("listing").await;
        let plain = ctx.create_product(event.uuid, 10_00).await;
        let seated = ctx.create_product(event.uuid, 20_00).await;
        let front_row = ctx.create_variant(seated.uuid, 35_00).await;

        let products = ctx.products.list_products(event.uuid).await?;

        assert_eq!(products.len(), 2);

        let listed_plain = products.iter().find(|product| product.uuid == plain.uuid);
        let listed_seated = products.iter().find(|product| product.uuid == seated.uuid);

        assert_eq!(listed_plain.map(|product| product.variants.len()), Some(0));
        assert_eq!(
            listed_seated.map(|product| product.variants.clone()),
            Some(vec![front_row])
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_variant_for_unknown_product_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_variant(
                ProductUuid::new(),
                NewVariant {
                    uuid: VariantUuid::new(),
                    name: "Balcony".to_string(),
                    price: 5_00,
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::ProductNotFound)),
            "expected ProductNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_product_for_unknown_event_returns_unknown_event() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_product(
                EventUuid::new(),
                NewProduct {
                    uuid: ProductUuid::new(),
                    name: "Orphan".to_string(),
                    price: 1_00,
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::UnknownEvent)),
            "expected UnknownEvent, got {result:?}"
        );
    }
}
