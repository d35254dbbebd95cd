//! Filesystem guard
//!
//! Runs before anything is written: the parent directory must accept new
//! files and the target directory must not hold anything the template could
//! overwrite.

use std::fmt;
use std::fs;
use std::io;

use camino::Utf8Path;
use tracing::debug;

use crate::error::{Result, ScaffoldError};

/// Housekeeping entries that may already sit in the target directory
const ALLOWED_ENTRIES: &[&str] = &[
    ".DS_Store",
    ".git",
    ".gitattributes",
    ".gitignore",
    ".gitlab-ci.yml",
    ".hg",
    ".hgcheck",
    ".hgignore",
    ".idea",
    ".npmignore",
    ".travis.yml",
    "LICENSE",
    "Thumbs.db",
    "docs",
    "mkdocs.yml",
    "npm-debug.log",
    "yarn-debug.log",
    "yarn-error.log",
    "yarnrc.yml",
    ".yarn",
];

/// Hint printed after the list of conflicting entries
pub const CONFLICT_HINT: &str = "Either try using a new directory name, or remove the files listed above.";

/// An entry in the target directory that blocks scaffolding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub name: String,
    pub is_dir: bool,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dir {
            write!(f, "{}/", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}

fn is_allowed(name: &str) -> bool {
    // IntelliJ module files
    ALLOWED_ENTRIES.contains(&name) || name.ends_with(".iml")
}

/// Verify that `parent` accepts new files by creating and removing a probe
/// file in it.
pub fn check_writable(parent: &Utf8Path) -> Result<()> {
    let probe = tempfile::Builder::new()
        .prefix(".create-devx-probe")
        .tempfile_in(parent);

    match probe {
        Ok(file) => {
            // Removal failure leaves a stray probe but does not make the
            // directory unwritable.
            if let Err(e) = file.close() {
                debug!("Failed to remove writability probe in {}: {}", parent, e);
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ScaffoldError::ParentMissing {
            path: parent.to_owned(),
        }),
        Err(e) => {
            debug!("{} is not writable: {}", parent, e);
            Err(ScaffoldError::NotWritable {
                path: parent.to_owned(),
            })
        }
    }
}

/// List entries of `root` that are not allow-listed, sorted by name.
///
/// A missing directory has no conflicts.
pub fn find_conflicts(root: &Utf8Path) -> io::Result<Vec<Conflict>> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut conflicts = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_allowed(&name) {
            continue;
        }
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        conflicts.push(Conflict { name, is_dir });
    }
    conflicts.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(conflicts)
}

/// Fail with [`ScaffoldError::DirectoryNotEmpty`] unless `root` is
/// effectively empty.
pub fn ensure_empty(root: &Utf8Path, name: &str) -> Result<()> {
    let conflicts = find_conflicts(root)?;
    if conflicts.is_empty() {
        return Ok(());
    }

    debug!("{} has {} conflicting entries", root, conflicts.len());
    Err(ScaffoldError::DirectoryNotEmpty {
        name: name.to_string(),
        conflicts,
    })
}

/// Create the project directory and any missing ancestors
pub fn create_project_dir(root: &Utf8Path) -> Result<()> {
    fs::create_dir_all(root)?;
    Ok(())
}
