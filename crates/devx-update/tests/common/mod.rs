//! Common test infrastructure for devx-update tests

#![allow(dead_code)]

use devx_core::RuntimeConfig;
use devx_update::{UpdateChecker, VersionInfo};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PACKAGE: &str = "create-devx";

/// Serve `latest` as the package's dist-tag, expecting `times` requests
pub async fn mock_dist_tags(server: &MockServer, latest: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/-/package/{}/dist-tags", PACKAGE)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "latest": latest, "next": "99.0.0-rc.1" })),
        )
        .expect(times)
        .mount(server)
        .await;
}

pub async fn mock_dist_tags_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/-/package/{}/dist-tags", PACKAGE)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub fn config_for(server: &MockServer) -> RuntimeConfig {
    let mut config = RuntimeConfig::default();
    config.network.registry_url = server.uri();
    config.update_check.package_name = PACKAGE.to_string();
    config
}

/// Checker for `current` whose cache lives in a fresh temp dir
pub fn checker(config: &RuntimeConfig, current: &str) -> (UpdateChecker, TempDir) {
    let cache_dir = TempDir::new().unwrap();
    let checker = UpdateChecker::new(config, VersionInfo::new(current))
        .unwrap()
        .with_cache_path(cache_dir.path().join("update-check.json"));
    (checker, cache_dir)
}
