//! Temporary project locations and configuration

use camino::{Utf8Path, Utf8PathBuf};
use devx_core::RuntimeConfig;
use tempfile::TempDir;

/// A temporary working directory that is removed on drop
pub struct Workspace {
    _temp: TempDir,
    pub cwd: Utf8PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let cwd = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        Self { _temp: temp, cwd }
    }

    pub fn path(&self, relative: &str) -> Utf8PathBuf {
        self.cwd.join(relative)
    }
}

/// Runtime config pointing at a mock archive with the update check off
pub fn config_for(archive_url: &str) -> RuntimeConfig {
    let mut config = RuntimeConfig::default();
    config.network.archive_url = archive_url.to_string();
    config.update_check.enabled = false;
    config
}

/// Write an executable `npm` stand-in into `bin` that records its arguments
/// to `<cwd>/.npm-args` and exits with `exit_code`.
#[cfg(unix)]
pub fn install_fake_npm(bin: &Utf8Path, exit_code: i32) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::create_dir_all(bin).unwrap();
    let script = format!(
        "#!/bin/sh\necho \"$@\" > .npm-args\necho \"$NODE_ENV\" >> .npm-args\nexit {}\n",
        exit_code
    );
    let npm = bin.join("npm");
    std::fs::write(&npm, script).unwrap();
    std::fs::set_permissions(&npm, std::fs::Permissions::from_mode(0o755)).unwrap();
}

/// `PATH` with `bin` prepended
pub fn path_with(bin: &Utf8Path) -> String {
    let current = std::env::var("PATH").unwrap_or_default();
    format!("{}:{}", bin, current)
}
