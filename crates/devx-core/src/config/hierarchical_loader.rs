//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. User runtime config (~/.create-devx/runtime.yaml)
//! 3. Environment variables (CREATE_DEVX_* prefix)
//! 4. CLI flags (handled by caller)

use crate::error::{Error, Result};
use crate::types::RuntimeConfig;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use std::env;
use std::fs;
use tracing::debug;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/embedded/"]
#[prefix = ""]
struct EmbeddedConfigs;

/// File name of the per-user runtime configuration
const RUNTIME_CONFIG_FILE: &str = "runtime.yaml";

/// Configuration hierarchy loader
pub struct HierarchicalConfigLoader {
    /// Base directory for configuration files
    config_dir: Utf8PathBuf,
}

impl HierarchicalConfigLoader {
    /// Create a new hierarchical config loader rooted at ~/.create-devx
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self { config_dir })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the standard config directory (~/.create-devx).
    ///
    /// The directory is not created; a missing directory simply means no
    /// user overrides.
    fn get_config_dir() -> Result<Utf8PathBuf> {
        let home = crate::utils::get_home_dir()
            .map_err(|e| Error::invalid_config(e.to_string()))?;
        let home = Utf8PathBuf::from_path_buf(home).map_err(|p| {
            Error::invalid_config(format!("Home directory is not valid UTF-8: {}", p.display()))
        })?;

        Ok(home.join(".create-devx"))
    }

    /// Load runtime configuration with hierarchical precedence
    pub fn load_runtime_config(&self) -> Result<RuntimeConfig> {
        // Start with embedded defaults
        let mut config = Self::load_embedded_config::<RuntimeConfig>("runtime-defaults.yaml")?;

        let runtime_config_path = self.config_dir.join(RUNTIME_CONFIG_FILE);
        if runtime_config_path.exists() {
            debug!("Loading runtime overrides from {}", runtime_config_path);
            // Serde defaults fill every key the file leaves out, so the file
            // replaces the embedded layer wholesale
            config = self.load_yaml_file::<RuntimeConfig>(&runtime_config_path)?;
        }

        config = self.apply_env_overrides(config)?;

        Ok(config)
    }

    /// Load an embedded configuration file
    fn load_embedded_config<T: DeserializeOwned>(filename: &str) -> Result<T> {
        let embedded_file = EmbeddedConfigs::get(filename).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", filename))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", filename))
        })?;

        let config: T = serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                filename, e
            ))
        })?;

        Ok(config)
    }

    /// Load a YAML file and parse it
    fn load_yaml_file<T: DeserializeOwned>(&self, path: &Utf8Path) -> Result<T> {
        let content = fs::read_to_string(path)?;
        let config: T = serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))?;
        Ok(config)
    }

    /// Apply environment variable overrides to runtime config
    fn apply_env_overrides(&self, mut config: RuntimeConfig) -> Result<RuntimeConfig> {
        if let Ok(val) = env::var("CREATE_DEVX_ARCHIVE_URL") {
            config.network.archive_url = val;
        }

        if let Ok(val) = env::var("CREATE_DEVX_REGISTRY_URL") {
            config.network.registry_url = val;
        }

        if let Ok(val) = env::var("CREATE_DEVX_PROBE_HOST") {
            config.network.online_probe_host = val;
        }

        if let Ok(val) = env::var("CREATE_DEVX_NO_UPDATE_CHECK") {
            if is_truthy(&val) {
                config.update_check.enabled = false;
            }
        }

        if let Ok(val) = env::var("CREATE_DEVX_UPDATE_INTERVAL_HOURS") {
            config.update_check.interval_hours = val.parse().map_err(|_| {
                Error::invalid_config("CREATE_DEVX_UPDATE_INTERVAL_HOURS must be a valid number")
            })?;
        }

        if let Ok(val) = env::var("CREATE_DEVX_UPDATE_WAIT_MS") {
            config.update_check.wait_timeout_ms = val.parse().map_err(|_| {
                Error::invalid_config("CREATE_DEVX_UPDATE_WAIT_MS must be a valid number")
            })?;
        }

        Ok(config)
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
