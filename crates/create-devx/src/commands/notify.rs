//! Update notice shown after the command finishes

use std::time::Duration;

use semver::Version;
use tokio::task::JoinHandle;
use tracing::debug;

use devx_core::{PackageManager, RuntimeConfig};
use devx_update::{UpdateChecker, VersionInfo, PACKAGE};

use crate::output;

/// Start the registry lookup in the background. `None` when checks are
/// disabled or the checker cannot be built.
pub fn spawn_update_check(
    config: &RuntimeConfig,
    current: VersionInfo,
) -> Option<JoinHandle<Option<Version>>> {
    if !config.update_check.enabled {
        return None;
    }

    let checker = match UpdateChecker::new(config, current) {
        Ok(checker) => checker,
        Err(e) => {
            debug!("Update check unavailable: {:#}", e);
            return None;
        }
    };

    Some(tokio::spawn(async move {
        match checker.check().await {
            Ok(newer) => newer,
            Err(e) => {
                debug!("Update check failed: {:#}", e);
                None
            }
        }
    }))
}

/// Wait up to `wait_ms` for the lookup and print a notice if a newer
/// release exists. Never fails.
pub async fn report_update(
    handle: Option<JoinHandle<Option<Version>>>,
    package_manager: PackageManager,
    wait_ms: u64,
) {
    let Some(handle) = handle else {
        return;
    };
    let abort = handle.abort_handle();

    match tokio::time::timeout(Duration::from_millis(wait_ms), handle).await {
        Ok(Ok(Some(latest))) => {
            debug!("Newer release available: {}", latest);
            let (headline, hint) = notice(package_manager);
            output::warning(&headline);
            output::line(&hint);
            output::blank();
        }
        Ok(Ok(None)) => {}
        Ok(Err(e)) => debug!("Update check task failed: {}", e),
        Err(_) => {
            debug!("Update check still pending after {}ms, giving up", wait_ms);
            abort.abort();
        }
    }
}

fn notice(package_manager: PackageManager) -> (String, String) {
    (
        format!("A new version of `{}` is available!", PACKAGE),
        format!(
            "You can update by running: {}",
            output::cyan(&package_manager.global_install_command(PACKAGE))
        ),
    )
}
