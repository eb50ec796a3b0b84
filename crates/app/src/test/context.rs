//! Test context for service-level integration tests.

use crate::{
    auth::{NewUser, PgAuthService, UserUuid},
    database::Db,
    domain::{
        carts::PgCartsService,
        events::{
            EventsService, PgEventsService,
            models::{Event, EventUuid, NewEvent},
        },
        products::{
            PgProductsService, ProductsService,
            models::{NewProduct, NewVariant, Product, ProductUuid, Variant, VariantUuid},
        },
    },
};

use super::db::TestDb;

pub struct TestContext {
    pub db: TestDb,
    pub carts: PgCartsService,
    pub events: PgEventsService,
    pub products: PgProductsService,
    pub auth: PgAuthService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            carts: PgCartsService::new(db.clone()),
            events: PgEventsService::new(db.clone()),
            products: PgProductsService::new(db),
            auth: PgAuthService::new(test_db.pool().clone()),
            db: test_db,
        }
    }

    /// Create an EUR event with a 30 minute reservation window.
    pub async fn create_event(&self, slug: &str) -> Event {
        self.events
            .create_event(NewEvent {
                uuid: EventUuid::new(),
                slug: slug.to_string(),
                name: format!("Event {slug}"),
                currency: "EUR".to_string(),
                reservation_minutes: 30,
            })
            .await
            .expect("Failed to create test event")
    }

    pub async fn create_product(&self, event: EventUuid, price: u64) -> Product {
        self.products
            .create_product(
                event,
                NewProduct {
                    uuid: ProductUuid::new(),
                    name: format!("Product {price}"),
                    price,
                },
            )
            .await
            .expect("Failed to create test product")
    }

    pub async fn create_variant(&self, product: ProductUuid, price: u64) -> Variant {
        self.products
            .create_variant(
                product,
                NewVariant {
                    uuid: VariantUuid::new(),
                    name: format!("Variant {price}"),
                    price,
                },
            )
            .await
            .expect("Failed to create test variant")
    }

    pub async fn create_user(&self, email: &str) -> UserUuid {
        self.auth
            .create_user(NewUser {
                uuid: UserUuid::new(),
                email: email.to_string(),
            })
            .await
            .expect("Failed to create test user")
            .uuid
    }
}
