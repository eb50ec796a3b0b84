//! Session Config

use clap::Args;

/// Minimum secret length accepted by the cookie signer.
pub(crate) const MIN_SESSION_SECRET_BYTES: usize = 64;

/// Visitor session settings.
#[derive(Debug, Args)]
pub struct SessionConfig {
    /// Secret used to sign session cookies (at least 64 bytes)
    #[arg(
        long = "session-secret",
        env = "SESSION_SECRET",
        hide_env_values = true,
        value_parser = parse_session_secret
    )]
    pub secret: String,
}

fn parse_session_secret(value: &str) -> Result<String, String> {
    if value.len() < MIN_SESSION_SECRET_BYTES {
        return Err(format!(
            "session secret must be at least {MIN_SESSION_SECRET_BYTES} bytes"
        ));
    }

    Ok(value.to_string())
}
