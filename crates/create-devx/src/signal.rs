//! Interrupt handling
//!
//! SIGINT and SIGTERM cancel a shared token instead of killing the process
//! outright, so the pipeline can stop its child and the driver can restore
//! the terminal.

use devx_scaffold::CancellationToken;
use tracing::debug;

/// Cancel `token` on the first interrupt or termination signal
pub fn cancel_on_signal(token: CancellationToken) {
    tokio::spawn(async move {
        wait_for_signal().await;
        debug!("Received interrupt, cancelling");
        token.cancel();
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(e) => {
            debug!("Cannot listen for SIGTERM: {}", e);
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = terminate.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
