//! The scaffolding pipeline: guard, download, install, git init
//!
//! Steps run strictly in sequence and stop at the first failure. Nothing is
//! rolled back: a failed download or install leaves whatever was written.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use devx_core::{PackageManager, RuntimeConfig};

use crate::cancel::cancellable;
use crate::error::{Result, ScaffoldError};
use crate::events::{ProgressObserver, ScaffoldEvent};
use crate::fetch::ArchiveFetcher;
use crate::git::try_git_init;
use crate::guard;
use crate::install::InstallCommand;
use crate::online::is_online;
use crate::project::ProjectPath;
use crate::validate::validate_project_name;

/// Manifest whose presence triggers the install step
pub const MANIFEST_FILE: &str = "package.json";

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub project: ProjectPath,
    pub package_manager: PackageManager,
    /// The template shipped a package.json and dependencies were installed
    pub has_manifest: bool,
    pub git_initialized: bool,
}

/// Create a new project at `project.root`
pub async fn create_app(
    project: &ProjectPath,
    package_manager: PackageManager,
    config: &RuntimeConfig,
    observer: &dyn ProgressObserver,
    token: &CancellationToken,
) -> Result<ScaffoldOutcome> {
    let root = &project.root;

    let validation = validate_project_name(&project.name);
    if !validation.is_valid() {
        return Err(ScaffoldError::invalid_name(
            &project.name,
            validation.problems().to_vec(),
        ));
    }

    // An existing directory's conflicts matter more than its parent's mode
    if root.exists() {
        guard::ensure_empty(root, &project.name)?;
    }
    guard::check_writable(project.parent())?;
    guard::create_project_dir(root)?;
    guard::ensure_empty(root, &project.name)?;

    let online = if package_manager.requires_online_probe() {
        cancellable(token, is_online(&config.network.online_probe_host)).await?
    } else {
        true
    };
    debug!("Online: {}", online);

    observer.on_event(&ScaffoldEvent::Creating { root: root.clone() });

    let fetcher = ArchiveFetcher::new(&config.network)?;
    observer.on_event(&ScaffoldEvent::DownloadStarted {
        url: fetcher.url().to_string(),
    });
    cancellable(token, fetcher.download_and_extract(root)).await??;
    observer.on_event(&ScaffoldEvent::DownloadFinished);

    let has_manifest = root.join(MANIFEST_FILE).is_file();
    if has_manifest {
        if !online {
            observer.on_event(&ScaffoldEvent::Offline);
        }
        observer.on_event(&ScaffoldEvent::InstallingPackages { package_manager });
        InstallCommand::new(package_manager, online)
            .run(root, token)
            .await?;
    } else {
        info!("No {} in template, skipping install", MANIFEST_FILE);
    }

    let git_initialized = cancellable(token, try_git_init(root, &config.git_workflow)).await?;
    if git_initialized {
        observer.on_event(&ScaffoldEvent::GitInitialized);
    }

    Ok(ScaffoldOutcome {
        project: project.clone(),
        package_manager,
        has_manifest,
        git_initialized,
    })
}
