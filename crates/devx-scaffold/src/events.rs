//! Progress reporting for the scaffolding pipeline
//!
//! The pipeline never prints. It reports what it is doing through a
//! [`ProgressObserver`], and the caller decides how that looks.

use camino::Utf8PathBuf;
use tracing::{debug, info};

use devx_core::PackageManager;

/// Milestones of a pipeline run, in the order they can occur
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    /// Guard checks passed and the target directory exists
    Creating { root: Utf8PathBuf },
    /// Template download is about to start
    DownloadStarted { url: String },
    /// Template is extracted
    DownloadFinished,
    /// Installing from the local cache only
    Offline,
    /// Package manager is about to run
    InstallingPackages { package_manager: PackageManager },
    /// A git repository with an initial commit now exists
    GitInitialized,
}

/// Receives pipeline milestones
pub trait ProgressObserver: Send + Sync {
    fn on_event(&self, event: &ScaffoldEvent);
}

/// Observer that only logs
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ProgressObserver for TracingObserver {
    fn on_event(&self, event: &ScaffoldEvent) {
        match event {
            ScaffoldEvent::Creating { root } => info!("Creating project in {}", root),
            ScaffoldEvent::DownloadStarted { url } => debug!("Downloading template from {}", url),
            ScaffoldEvent::DownloadFinished => debug!("Template extracted"),
            ScaffoldEvent::Offline => info!("Offline, installing from the local cache"),
            ScaffoldEvent::InstallingPackages { package_manager } => {
                info!("Installing packages with {}", package_manager)
            }
            ScaffoldEvent::GitInitialized => info!("Initialized a git repository"),
        }
    }
}
