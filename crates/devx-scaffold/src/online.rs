//! Connectivity probe
//!
//! Decides whether the installer may reach the registry. A DNS lookup of the
//! probe host is enough; when that fails, the configured HTTPS proxy gets
//! the same treatment since a proxy-only network cannot resolve public
//! names.

use std::process::Stdio;

use tokio::net::lookup_host;
use tokio::process::Command;
use tracing::debug;
use url::Url;

/// Resolve `probe_host`, falling back to the HTTPS proxy's host
pub async fn is_online(probe_host: &str) -> bool {
    if resolves(probe_host).await {
        return true;
    }
    debug!("Could not resolve {}, checking proxy", probe_host);

    let Some(proxy) = configured_proxy().await else {
        return false;
    };
    let Some(host) = proxy_host(&proxy) else {
        debug!("Ignoring unparsable proxy {:?}", proxy);
        return false;
    };

    resolves(&host).await
}

async fn resolves(host: &str) -> bool {
    match lookup_host((host, 443)).await {
        Ok(mut addrs) => addrs.next().is_some(),
        Err(e) => {
            debug!("DNS lookup of {} failed: {}", host, e);
            false
        }
    }
}

/// `https_proxy` from the environment, else npm's `https-proxy` setting
async fn configured_proxy() -> Option<String> {
    if let Some(proxy) = std::env::var("https_proxy").ok().and_then(|v| proxy_value(&v)) {
        return Some(proxy);
    }

    let output = Command::new("npm")
        .args(["config", "get", "https-proxy"])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
        .ok()?;
    if !output.status.success() {
        return None;
    }

    proxy_value(&String::from_utf8_lossy(&output.stdout))
}

/// Normalize a proxy setting; npm prints `null` or `undefined` when unset
fn proxy_value(raw: &str) -> Option<String> {
    match raw.trim() {
        "" | "null" | "undefined" => None,
        value => Some(value.to_string()),
    }
}

/// Host name of a proxy URL such as `http://proxy.corp:3128`
pub fn proxy_host(proxy: &str) -> Option<String> {
    let url = Url::parse(proxy.trim()).ok()?;
    url.host_str()
        .filter(|host| !host.is_empty())
        .map(|host| host.trim_start_matches('[').trim_end_matches(']').to_string())
}
