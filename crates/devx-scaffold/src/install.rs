//! Dependency installation through the detected package manager

use std::process::Stdio;

use camino::Utf8Path;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use devx_core::PackageManager;

use crate::cancel::cancellable;
use crate::error::{Result, ScaffoldError};

/// Environment added to the installer process
const INSTALL_ENV: &[(&str, &str)] = &[
    ("ADBLOCK", "1"),
    // Keep devDependencies even when the user's shell says production
    ("NODE_ENV", "development"),
    ("DISABLE_OPENCOLLECTIVE", "1"),
];

/// A fully resolved `<pm> install [--offline]` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub program: String,
    pub args: Vec<String>,
    pub envs: Vec<(String, String)>,
}

impl InstallCommand {
    pub fn new(package_manager: PackageManager, online: bool) -> Self {
        let mut args = vec!["install".to_string()];
        if !online {
            args.push(package_manager.offline_flag().to_string());
        }

        Self {
            program: package_manager.command().to_string(),
            args,
            envs: INSTALL_ENV
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Command line as the user would type it
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run in `cwd` with the terminal attached. The child is killed when
    /// `token` is cancelled.
    pub async fn run(&self, cwd: &Utf8Path, token: &CancellationToken) -> Result<()> {
        info!("Running {} in {}", self.display(), cwd);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .envs(self.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                debug!("Failed to spawn {}: {}", self.program, e);
                ScaffoldError::install_failed(self.display())
            })?;

        let status = cancellable(token, child.wait())
            .await?
            .map_err(|_| ScaffoldError::install_failed(self.display()))?;

        if !status.success() {
            debug!("{} exited with {}", self.display(), status);
            return Err(ScaffoldError::install_failed(self.display()));
        }

        Ok(())
    }
}
