//! Cached update check
//!
//! The registry answer is stored as `{ "latest", "last_update" }` in the
//! user cache directory and reused until the configured interval elapses.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use semver::Version;
use serde::{Deserialize, Serialize};
use tracing::debug;

use devx_core::types::UpdateCheckConfig;
use devx_core::RuntimeConfig;

use crate::registry::RegistryClient;
use crate::version::VersionInfo;

const CACHE_FILE: &str = "update-check.json";

/// Last registry answer
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    latest: String,
    last_update: DateTime<Utc>,
}

/// Looks up whether a newer release than the running one exists
pub struct UpdateChecker {
    registry: RegistryClient,
    config: UpdateCheckConfig,
    current: VersionInfo,
    cache_path: PathBuf,
}

impl UpdateChecker {
    pub fn new(config: &RuntimeConfig, current: VersionInfo) -> Result<Self> {
        Ok(Self {
            registry: RegistryClient::new(&config.network)?,
            config: config.update_check.clone(),
            current,
            cache_path: default_cache_path(),
        })
    }

    /// Store the cache somewhere else
    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = path.into();
        self
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// The newer release, if there is one
    pub async fn check(&self) -> Result<Option<Version>> {
        if !self.config.enabled {
            debug!("Update check disabled");
            return Ok(None);
        }

        let latest = match self.read_fresh_cache() {
            Some(version) => {
                debug!("Using cached latest version {}", version);
                version
            }
            None => {
                let version = self
                    .registry
                    .latest_version(&self.config.package_name)
                    .await?;
                if let Err(e) = self.write_cache(&version) {
                    debug!("Failed to write update cache: {:#}", e);
                }
                version
            }
        };

        Ok(self.current.is_older_than(&latest).then_some(latest))
    }

    fn read_fresh_cache(&self) -> Option<Version> {
        let content = fs::read_to_string(&self.cache_path).ok()?;
        let entry: CacheEntry = serde_json::from_str(&content).ok()?;

        let interval = Duration::try_hours(i64::try_from(self.config.interval_hours).ok()?)?;
        if Utc::now() - entry.last_update >= interval {
            return None;
        }

        Version::parse(&entry.latest).ok()
    }

    fn write_cache(&self, latest: &Version) -> Result<()> {
        if let Some(parent) = self.cache_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let entry = CacheEntry {
            latest: latest.to_string(),
            last_update: Utc::now(),
        };
        fs::write(&self.cache_path, serde_json::to_string(&entry)?)
            .with_context(|| format!("Failed to write {}", self.cache_path.display()))?;
        Ok(())
    }
}

fn default_cache_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(crate::PACKAGE)
        .join(CACHE_FILE)
}
