//! Cancellation helper shared by every suspension point

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::error::{Result, ScaffoldError};

/// Drive `future` to completion unless `token` is cancelled first.
///
/// The future is dropped on cancellation, which kills children spawned with
/// `kill_on_drop` and aborts in-flight requests.
pub async fn cancellable<F, T>(token: &CancellationToken, future: F) -> Result<T>
where
    F: Future<Output = T>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(ScaffoldError::Cancelled),
        value = future => Ok(value),
    }
}
