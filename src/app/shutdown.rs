//! Graceful shutdown handling.

use tokio_util::sync::CancellationToken;

/// Cancels `cancel` when the process receives Ctrl-C.
///
/// If the signal handler cannot be installed the token is cancelled immediately.
pub async fn cancel_on_ctrl_c(cancel: CancellationToken) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Received Ctrl-C, shutting down"),
        Err(e) => log::error!("Failed to listen for Ctrl-C: {}", e),
    }
    cancel.cancel();
}
