//! Version information for the create-devx binary

use devx_update::VersionInfo;

/// Version of this build, including metadata from build.rs
pub fn current() -> VersionInfo {
    VersionInfo::new(env!("CARGO_PKG_VERSION"))
        .with_build(option_env!("GIT_SHA"), option_env!("BUILD_DATE"))
}

/// Text for `--version`
pub fn long_version() -> String {
    current().long_display()
}
