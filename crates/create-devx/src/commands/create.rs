//! The create command: pick the target directory, run the scaffolding
//! pipeline and print where to go next.

use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use indicatif::ProgressBar;
use tracing::debug;

use devx_core::{HierarchicalConfigLoader, PackageManager, RuntimeConfig};
use devx_scaffold::{
    create_app, CancellationToken, ProgressObserver, ProjectPath, ScaffoldError, ScaffoldEvent,
    ScaffoldOutcome,
};

use crate::cli::Cli;
use crate::commands::notify;
use crate::{output, prompt, report, version};

pub async fn run(cli: Cli, token: CancellationToken) -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            report::failure(&e);
            return ExitCode::FAILURE;
        }
    };

    let package_manager = PackageManager::detect();
    let update = notify::spawn_update_check(&config, version::current());

    let code = match create(&cli, &config, package_manager, &token).await {
        Ok((outcome, cwd)) => {
            print_summary(&outcome, &cwd);
            ExitCode::SUCCESS
        }
        Err(e) if report::is_cancelled(&e) => report::exit_cancelled(),
        Err(e) => {
            report::failure(&e);
            ExitCode::FAILURE
        }
    };

    notify::report_update(update, package_manager, config.update_check.wait_timeout_ms).await;
    code
}

fn load_config() -> Result<RuntimeConfig> {
    let loader = HierarchicalConfigLoader::new().context("Failed to create config loader")?;
    let config = loader
        .load_runtime_config()
        .context("Failed to load runtime config")?;
    Ok(config)
}

async fn create(
    cli: &Cli,
    config: &RuntimeConfig,
    package_manager: PackageManager,
    token: &CancellationToken,
) -> Result<(ScaffoldOutcome, Utf8PathBuf)> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let cwd = Utf8PathBuf::try_from(cwd).context("Current directory is not valid UTF-8")?;

    let argument = cli
        .project_directory
        .as_deref()
        .map(str::trim)
        .filter(|dir| !dir.is_empty());

    let input = match argument {
        Some(dir) => dir.to_string(),
        None if prompt::is_interactive() => {
            prompt::ask_project_directory(cwd.clone(), token).await?
        }
        None => {
            debug!("No terminal attached, not prompting");
            String::new()
        }
    };
    if input.trim().is_empty() {
        return Err(ScaffoldError::MissingProjectDirectory.into());
    }

    let project = ProjectPath::resolve(&cwd, &input);
    debug!("Resolved project {} at {}", project.name, project.root);

    let reporter = ConsoleReporter::default();
    let outcome = create_app(&project, package_manager, config, &reporter, token).await?;
    Ok((outcome, cwd))
}

fn print_summary(outcome: &ScaffoldOutcome, cwd: &Utf8Path) {
    let project = &outcome.project;
    let dev = outcome.package_manager.run_script("dev");

    output::blank();
    output::success(&format!("Created {} at {}", project.name, project.root));

    if !outcome.has_manifest {
        output::blank();
        return;
    }

    output::line("Inside that directory, you can run several commands:");
    output::blank();
    output::command(&dev, Some("Starts the development server."));
    output::blank();
    output::command(
        &outcome.package_manager.start_command(),
        Some("Runs the built app in production mode."),
    );
    output::blank();
    output::line("We suggest that you begin by typing:");
    output::blank();
    output::command(&format!("cd {}", project.cd_path(cwd)), None);
    output::command(&dev, None);
    output::blank();
}

/// Renders pipeline milestones on the terminal
#[derive(Default)]
struct ConsoleReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    fn clear_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(spinner) = slot.take() {
                spinner.finish_and_clear();
            }
        }
    }
}

impl ProgressObserver for ConsoleReporter {
    fn on_event(&self, event: &ScaffoldEvent) {
        match event {
            ScaffoldEvent::Creating { root } => {
                output::line(&format!(
                    "Creating a new Express.js backend in {}.",
                    output::highlight(root.as_str())
                ));
                output::blank();
            }
            ScaffoldEvent::DownloadStarted { .. } => {
                if let Ok(mut slot) = self.spinner.lock() {
                    *slot = Some(output::spinner(
                        "Downloading files. This might take a moment.",
                    ));
                }
            }
            ScaffoldEvent::DownloadFinished => self.clear_spinner(),
            ScaffoldEvent::Offline => {
                output::warning("You appear to be offline.\nFalling back to the local cache.");
                output::blank();
            }
            ScaffoldEvent::InstallingPackages { .. } => {
                output::line("Installing packages. This might take a couple of minutes.");
                output::blank();
            }
            ScaffoldEvent::GitInitialized => {
                output::line("Initialized a git repository.");
                output::blank();
            }
        }
    }
}

impl Drop for ConsoleReporter {
    fn drop(&mut self) {
        self.clear_spinner();
    }
}
