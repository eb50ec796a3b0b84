use boxoffice_app::{
    database::Db,
    domain::events::{
        EventsService, PgEventsService,
        models::{EventUuid, NewEvent},
    },
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct CreateEventArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// URL slug the storefront routes on
    #[arg(long)]
    slug: String,

    /// Display name
    #[arg(long)]
    name: String,

    /// ISO 4217 currency code, e.g. EUR
    #[arg(long)]
    currency: String,

    /// How long added positions stay reserved
    #[arg(long, default_value_t = 30)]
    reservation_minutes: u32,
}

pub(crate) async fn run(args: CreateEventArgs) -> Result<(), String> {
    let pool = crate::cli::connect(&args.database_url).await?;
    let service = PgEventsService::new(Db::new(pool));

    let event = service
        .create_event(NewEvent {
            uuid: EventUuid::new(),
            slug: args.slug,
            name: args.name,
            currency: args.currency.to_ascii_uppercase(),
            reservation_minutes: args.reservation_minutes,
        })
        .await
        .map_err(|error| format!("failed to create event: {error}"))?;

    println!("event_uuid: {}", event.uuid);
    println!("event_slug: {}", event.slug);
    println!("event_currency: {}", event.currency);
    println!("reservation_minutes: {}", event.reservation_minutes);

    Ok(())
}
