//! Update notifier for create-devx
//!
//! Provides:
//! - Version information for `--version` output
//! - A registry client reading the `latest` dist-tag of a package
//! - An update checker that caches the registry answer on disk so the
//!   registry is consulted at most once per configured interval

pub mod checker;
pub mod registry;
pub mod version;

pub use checker::UpdateChecker;
pub use registry::RegistryClient;
pub use version::VersionInfo;

/// Current CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name published to the registry
pub const PACKAGE: &str = "create-devx";
