//! Shared type definitions

mod package_manager;
mod runtime_config;

pub use package_manager::PackageManager;
pub use runtime_config::*;
