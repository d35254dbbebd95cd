//! Runtime configuration types for operational parameters
//!
//! These types define configuration that controls runtime behavior: where the
//! template archive and the package registry live, how the self-update check
//! behaves, and which defaults the initial git commit uses.

use serde::{Deserialize, Serialize};

/// Complete runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuntimeConfig {
    /// Network endpoints and HTTP settings
    #[serde(default)]
    pub network: NetworkConfig,

    /// Self-update check settings
    #[serde(default)]
    pub update_check: UpdateCheckConfig,

    /// Git workflow defaults
    #[serde(default)]
    pub git_workflow: GitWorkflowConfig,
}

/// Network endpoints and HTTP settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkConfig {
    /// Gzip-compressed tarball holding the project template
    #[serde(default = "default_archive_url")]
    pub archive_url: String,

    /// Base URL of the package registry queried for newer releases
    #[serde(default = "default_registry_url")]
    pub registry_url: String,

    /// Host resolved to decide whether the machine is online
    #[serde(default = "default_online_probe_host")]
    pub online_probe_host: String,

    /// User agent string for HTTP requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            archive_url: default_archive_url(),
            registry_url: default_registry_url(),
            online_probe_host: default_online_probe_host(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_archive_url() -> String {
    "https://codeload.github.com/DevXEnterprise/backend/tar.gz/main".to_string()
}
fn default_registry_url() -> String {
    "https://registry.npmjs.org".to_string()
}
fn default_online_probe_host() -> String {
    "registry.yarnpkg.com".to_string()
}
fn default_user_agent() -> String {
    format!(
        "create-devx/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Self-update check settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateCheckConfig {
    /// Whether the registry is consulted at all
    #[serde(default = "default_update_enabled")]
    pub enabled: bool,

    /// Package identity looked up in the registry
    #[serde(default = "default_package_name")]
    pub package_name: String,

    /// Minimum hours between two registry lookups
    #[serde(default = "default_interval_hours")]
    pub interval_hours: u64,

    /// How long the driver waits for a pending lookup once the command is done
    #[serde(default = "default_wait_timeout_ms")]
    pub wait_timeout_ms: u64,
}

impl Default for UpdateCheckConfig {
    fn default() -> Self {
        Self {
            enabled: default_update_enabled(),
            package_name: default_package_name(),
            interval_hours: default_interval_hours(),
            wait_timeout_ms: default_wait_timeout_ms(),
        }
    }
}

fn default_update_enabled() -> bool {
    true
}
fn default_package_name() -> String {
    "create-devx".to_string()
}
fn default_interval_hours() -> u64 {
    24
}
fn default_wait_timeout_ms() -> u64 {
    1500
}

/// Git workflow defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GitWorkflowConfig {
    /// Branch checked out when git has no `init.defaultBranch`
    #[serde(default = "default_branch")]
    pub default_branch: String,

    /// Message of the initial commit
    #[serde(default = "default_initial_commit_message")]
    pub initial_commit_message: String,
}

impl Default for GitWorkflowConfig {
    fn default() -> Self {
        Self {
            default_branch: default_branch(),
            initial_commit_message: default_initial_commit_message(),
        }
    }
}

fn default_branch() -> String {
    "main".to_string()
}
fn default_initial_commit_message() -> String {
    "Initial commit from create-devx".to_string()
}
