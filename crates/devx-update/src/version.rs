//! Version information and comparison

use semver::Version;
use serde::{Deserialize, Serialize};

/// Version information for the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Semantic version
    pub version: String,

    /// Short commit hash the binary was built from
    pub commit: Option<String>,

    pub build_date: Option<String>,
}

impl VersionInfo {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            commit: None,
            build_date: None,
        }
    }

    /// Attach build metadata; empty values count as unknown
    pub fn with_build(mut self, commit: Option<&str>, build_date: Option<&str>) -> Self {
        self.commit = commit.filter(|c| !c.is_empty()).map(String::from);
        self.build_date = build_date.filter(|d| !d.is_empty()).map(String::from);
        self
    }

    /// Parse semantic version
    pub fn semver(&self) -> Option<Version> {
        Version::parse(&self.version).ok()
    }

    /// Whether `candidate` is a strictly newer release than this one.
    /// Unparsable versions never count as newer.
    pub fn is_older_than(&self, candidate: &Version) -> bool {
        self.semver().is_some_and(|current| *candidate > current)
    }

    /// Long `--version` text: version, commit and build date
    pub fn long_display(&self) -> String {
        let mut text = self.version.clone();
        if let Some(commit) = &self.commit {
            text.push_str(&format!("\ncommit: {}", commit));
        }
        if let Some(date) = &self.build_date {
            text.push_str(&format!("\nbuilt: {}", date));
        }
        text
    }
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self::new(crate::VERSION)
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.commit {
            Some(commit) => write!(f, "{} ({})", self.version, commit),
            None => f.write_str(&self.version),
        }
    }
}
