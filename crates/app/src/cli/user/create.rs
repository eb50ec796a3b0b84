use boxoffice_app::auth::{NewUser, PgAuthService, UserUuid};
use clap::Args;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Login email address
    #[arg(long)]
    email: String,

    /// Optional user UUID; generated when omitted
    #[arg(long)]
    user_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    let email = args.email.trim();

    if email.is_empty() {
        return Err("email cannot be empty".to_string());
    }

    let pool = crate::cli::connect(&args.database_url).await?;

    let user = PgAuthService::new(pool)
        .create_user(NewUser {
            uuid: args.user_uuid.map_or_else(UserUuid::new, UserUuid::from_uuid),
            email: email.to_string(),
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("user_email: {}", user.email);

    Ok(())
}
