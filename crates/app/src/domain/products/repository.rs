//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rustc_hash::FxHashMap;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    database::{amount_to_column, try_get_amount},
    domain::{
        events::models::EventUuid,
        products::models::{NewProduct, NewVariant, Product, ProductUuid, Variant, VariantUuid},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const LIST_VARIANTS_SQL: &str = include_str!("sql/list_variants.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const CREATE_VARIANT_SQL: &str = include_str!("sql/create_variant.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: EventUuid,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let mut products = query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .bind(event.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        let variants = query_as::<Postgres, Variant>(LIST_VARIANTS_SQL)
            .bind(event.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        let mut by_product: FxHashMap<ProductUuid, Vec<Variant>> = FxHashMap::default();

        for variant in variants {
            by_product.entry(variant.product).or_default().push(variant);
        }

        for product in &mut products {
            if let Some(variants) = by_product.remove(&product.uuid) {
                product.variants = variants;
            }
        }

        Ok(products)
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: EventUuid,
        product: NewProduct,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(event.into_uuid())
            .bind(product.name)
            .bind(amount_to_column(product.price, "price")?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_variant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        variant: NewVariant,
    ) -> Result<Variant, sqlx::Error> {
        query_as::<Postgres, Variant>(CREATE_VARIANT_SQL)
            .bind(variant.uuid.into_uuid())
            .bind(product.into_uuid())
            .bind(variant.name)
            .bind(amount_to_column(variant.price, "price")?)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            event: EventUuid::from_uuid(row.try_get("event_uuid")?),
            name: row.try_get("name")?,
            price: try_get_amount(row, "price")?,
            variants: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for Variant {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: VariantUuid::from_uuid(row.try_get("uuid")?),
            product: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            name: row.try_get("name")?,
            price: try_get_amount(row, "price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
