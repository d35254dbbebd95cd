//! Package registry lookups

use anyhow::{anyhow, Context, Result};
use semver::Version;
use serde::Deserialize;
use tracing::debug;

use devx_core::types::NetworkConfig;

/// `GET /-/package/<name>/dist-tags` response
#[derive(Debug, Deserialize)]
struct DistTags {
    latest: String,
}

/// Client for an npm-compatible registry
pub struct RegistryClient {
    client: reqwest::Client,
    registry_url: String,
}

impl RegistryClient {
    pub fn new(network: &NetworkConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&network.user_agent)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            registry_url: network.registry_url.trim_end_matches('/').to_string(),
        })
    }

    /// Version currently tagged `latest` for `package`
    pub async fn latest_version(&self, package: &str) -> Result<Version> {
        let url = format!("{}/-/package/{}/dist-tags", self.registry_url, package);
        debug!("Fetching dist-tags from: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!(
                "Failed to fetch dist-tags for {}: {}",
                package,
                response.status()
            ));
        }

        let tags: DistTags = response.json().await?;
        Version::parse(&tags.latest)
            .with_context(|| format!("Registry returned invalid version {:?}", tags.latest))
    }
}
