//! Error types for devx-scaffold
//!
//! Every failure the pipeline can produce falls into one of four groups the
//! CLI presents differently: user input problems, the download failure kind,
//! an installer exit, and everything else.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::guard::Conflict;

/// Result type alias using devx-scaffold's Error type
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// No project directory was given and none was entered at the prompt
    #[error("No project directory specified")]
    MissingProjectDirectory,

    /// Project name breaks the package naming rules
    #[error("Invalid project name \"{name}\": {}", problems.join("; "))]
    InvalidName { name: String, problems: Vec<String> },

    /// Parent directory exists but cannot be written to
    #[error("The application path is not writable: {path}")]
    NotWritable { path: Utf8PathBuf },

    /// Parent directory does not exist
    #[error("The parent directory does not exist: {path}")]
    ParentMissing { path: Utf8PathBuf },

    /// Target directory holds files that could be overwritten
    #[error("The directory {name} contains {} conflicting entries", conflicts.len())]
    DirectoryNotEmpty {
        name: String,
        conflicts: Vec<Conflict>,
    },

    /// Fetching or unpacking the template failed
    #[error("Template download failed: {0}")]
    Download(#[from] DownloadError),

    /// Package manager exited unsuccessfully
    #[error("`{command}` has failed")]
    InstallFailed { command: String },

    /// Interrupted by the user
    #[error("Cancelled")]
    Cancelled,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScaffoldError {
    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>, problems: Vec<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            problems,
        }
    }

    /// Create an install failure carrying the exact command line
    pub fn install_failed(command: impl Into<String>) -> Self {
        Self::InstallFailed {
            command: command.into(),
        }
    }

    /// Whether this is a problem with what the user asked for, as opposed
    /// to a failure while carrying it out
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::MissingProjectDirectory
                | Self::InvalidName { .. }
                | Self::NotWritable { .. }
                | Self::ParentMissing { .. }
                | Self::DirectoryNotEmpty { .. }
        )
    }
}

/// Failures while downloading and unpacking the template archive
#[derive(Error, Debug)]
pub enum DownloadError {
    /// Transport-level failure
    #[error("Failed to download {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Failed to download {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    /// Decompression, tar parsing or writing the extracted files failed
    #[error("Failed to extract archive: {0}")]
    Extract(#[source] std::io::Error),

    /// Extraction worker panicked or was aborted
    #[error("Extraction task failed: {0}")]
    Worker(String),

    /// Removing the bundled VCS metadata failed
    #[error("Failed to remove bundled repository metadata: {0}")]
    Cleanup(#[source] std::io::Error),
}
