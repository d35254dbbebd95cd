//! # devx-scaffold
//!
//! The create-devx scaffolding pipeline:
//! - Project name validation against npm naming rules
//! - Filesystem guard (writability and emptiness checks)
//! - Template download and streaming extraction
//! - Dependency installation through the detected package manager
//! - Best-effort git initialization
//!
//! Every suspension point accepts a [`CancellationToken`] so that an
//! interrupt stops the run promptly and kills any child process.

pub mod cancel;
pub mod error;
pub mod events;
pub mod fetch;
pub mod git;
pub mod guard;
pub mod install;
pub mod online;
pub mod pipeline;
pub mod project;
pub mod validate;

pub use cancel::cancellable;
pub use error::{DownloadError, Result, ScaffoldError};
pub use events::{ProgressObserver, ScaffoldEvent, TracingObserver};
pub use fetch::ArchiveFetcher;
pub use guard::Conflict;
pub use install::InstallCommand;
pub use pipeline::{create_app, ScaffoldOutcome};
pub use project::ProjectPath;
pub use validate::{validate_project_name, NameValidation};

pub use tokio_util::sync::CancellationToken;
