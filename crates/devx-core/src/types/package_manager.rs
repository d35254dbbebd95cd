//! Package manager selection
//!
//! The package manager is never chosen by a flag: it is whatever tool the
//! user invoked create-devx through (`npx`, `yarn create`, `pnpm create`,
//! `bunx`). Those tools advertise themselves in `npm_config_user_agent`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable npm-compatible launchers set for child processes
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Known package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Map a launcher user agent (e.g. `pnpm/8.6.0 npm/? node/v18.16.0`) to a
    /// selector. Unknown or missing agents fall back to npm.
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        match user_agent {
            Some(agent) if agent.starts_with("yarn") => Self::Yarn,
            Some(agent) if agent.starts_with("pnpm") => Self::Pnpm,
            Some(agent) if agent.starts_with("bun") => Self::Bun,
            _ => Self::Npm,
        }
    }

    /// Detect the package manager from the invoking environment
    pub fn detect() -> Self {
        let agent = std::env::var(USER_AGENT_ENV).ok();
        let detected = Self::from_user_agent(agent.as_deref());
        tracing::debug!("Detected package manager {} from {:?}", detected, agent);
        detected
    }

    /// Executable name
    pub fn command(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    /// Argument that makes `install` use the local cache only
    pub fn offline_flag(&self) -> &'static str {
        "--offline"
    }

    /// Whether the install step needs a connectivity probe first.
    ///
    /// Only yarn is probed; every other manager is assumed to be online.
    pub fn requires_online_probe(&self) -> bool {
        matches!(self, Self::Yarn)
    }

    /// Command line running a package.json script (`yarn dev`, `npm run dev`)
    pub fn run_script(&self, script: &str) -> String {
        match self {
            Self::Yarn => format!("yarn {}", script),
            other => format!("{} run {}", other.command(), script),
        }
    }

    /// Command line starting the built app
    pub fn start_command(&self) -> String {
        format!("{} start", self.command())
    }

    /// Command line installing `package` globally
    pub fn global_install_command(&self, package: &str) -> String {
        match self {
            Self::Npm => format!("npm i -g {}", package),
            Self::Yarn => format!("yarn global add {}", package),
            Self::Pnpm => format!("pnpm add -g {}", package),
            Self::Bun => format!("bun add -g {}", package),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}
