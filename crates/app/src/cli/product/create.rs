use std::str::FromStr;

use boxoffice_app::{
    database::Db,
    domain::{
        events::{EventsService, PgEventsService},
        products::{
            PgProductsService, ProductsService,
            models::{NewProduct, NewVariant, ProductUuid, VariantUuid},
        },
    },
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Slug of the event the product is sold for
    #[arg(long)]
    event_slug: String,

    /// Display name
    #[arg(long)]
    name: String,

    /// Base price in minor units
    #[arg(long)]
    price: u64,

    /// Variant as NAME=PRICE; may be repeated
    #[arg(long = "variant")]
    variants: Vec<VariantArg>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct VariantArg {
    name: String,
    price: u64,
}

impl FromStr for VariantArg {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (name, price) = value
            .rsplit_once('=')
            .ok_or_else(|| format!("variant '{value}' must look like NAME=PRICE"))?;

        let name = name.trim();

        if name.is_empty() {
            return Err(format!("variant '{value}' has an empty name"));
        }

        let price = price
            .trim()
            .parse::<u64>()
            .map_err(|error| format!("variant '{value}' has an invalid price: {error}"))?;

        Ok(Self {
            name: name.to_string(),
            price,
        })
    }
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let pool = crate::cli::connect(&args.database_url).await?;
    let db = Db::new(pool);

    let event = PgEventsService::new(db.clone())
        .get_event_by_slug(&args.event_slug)
        .await
        .map_err(|error| format!("failed to find event '{}': {error}", args.event_slug))?;

    let products = PgProductsService::new(db);

    let product = products
        .create_product(
            event.uuid,
            NewProduct {
                uuid: ProductUuid::new(),
                name: args.name,
                price: args.price,
            },
        )
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("product_price: {}", product.price);

    for variant in args.variants {
        let created = products
            .create_variant(
                product.uuid,
                NewVariant {
                    uuid: VariantUuid::new(),
                    name: variant.name,
                    price: variant.price,
                },
            )
            .await
            .map_err(|error| format!("failed to create variant: {error}"))?;

        println!(
            "variant_uuid: {} ({} @ {})",
            created.uuid, created.name, created.price
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_arg_parses_name_and_price() {
        assert_eq!(
            "Front Row=7500".parse::<VariantArg>(),
            Ok(VariantArg {
                name: "Front Row".to_string(),
                price: 7500,
            })
        );
    }

    #[test]
    fn variant_arg_splits_on_last_equals() {
        let parsed = "A=B=100".parse::<VariantArg>();

        assert_eq!(parsed.map(|v| v.name), Ok("A=B".to_string()));
    }

    #[test]
    fn variant_arg_rejects_malformed_input() {
        assert!("no-price".parse::<VariantArg>().is_err());
        assert!("=100".parse::<VariantArg>().is_err());
        assert!("Balcony=-5".parse::<VariantArg>().is_err());
    }
}
