//! Shutdown signals

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to listen for ctrl-c: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to listen for SIGTERM: {0}")]
    Terminate(#[source] io::Error),
}

#[cfg(unix)]
async fn terminate() -> Result<&'static str, ShutdownSignalError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::Terminate)?
        .recv()
        .await;

    Ok("SIGTERM")
}

#[cfg(not(unix))]
async fn terminate() -> Result<&'static str, ShutdownSignalError> {
    std::future::pending().await
}

/// Wait for ctrl-c or SIGTERM, then drain in-flight requests.
///
/// The in-memory session store goes with the process, so open carts keep
/// their database positions but visitors get fresh session keys.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let received = tokio::select! {
        result = signal::ctrl_c() => {
            result.map_err(ShutdownSignalError::CtrlC)?;

            "ctrl-c"
        }
        result = terminate() => result?,
    };

    info!(signal = received, "shutting down gracefully");

    handle.stop_graceful(None);

    Ok(())
}
