//! # devx-core
//!
//! Core library for create-devx providing:
//! - Runtime configuration with hierarchical loading (embedded defaults,
//!   user file, environment overrides)
//! - The package manager selector shared by the scaffolding pipeline, the
//!   update check and the CLI

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::HierarchicalConfigLoader;
pub use error::{Error, Result};
pub use types::{PackageManager, RuntimeConfig};
pub use utils::get_home_dir;
