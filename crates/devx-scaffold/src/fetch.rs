//! Template archive download and extraction
//!
//! The archive is a gzip-compressed tarball wrapped in one top-level folder
//! (`backend-main/` for a GitHub codeload tarball). The response body is
//! streamed straight into the decompressor on a blocking worker; nothing is
//! buffered on disk.

use std::fs;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

use camino::Utf8Path;
use flate2::read::GzDecoder;
use futures_util::TryStreamExt;
use tar::Archive;
use tokio_util::io::{StreamReader, SyncIoBridge};
use tracing::{debug, info};

use devx_core::types::NetworkConfig;

use crate::error::DownloadError;

/// Downloads the project template and unpacks it into a directory
pub struct ArchiveFetcher {
    client: reqwest::Client,
    url: String,
}

impl ArchiveFetcher {
    /// Create a fetcher for the configured archive URL
    pub fn new(network: &NetworkConfig) -> Result<Self, DownloadError> {
        let client = reqwest::Client::builder()
            .user_agent(&network.user_agent)
            .build()
            .map_err(|source| DownloadError::Request {
                url: network.archive_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            url: network.archive_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download the archive and extract it into `root`, dropping the
    /// wrapping folder and any bundled `.git` directory.
    ///
    /// Files written before a failure are left in place.
    pub async fn download_and_extract(&self, root: &Utf8Path) -> Result<(), DownloadError> {
        info!("Downloading template from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| DownloadError::Request {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes_stream().map_err(io::Error::other);
        let reader = SyncIoBridge::new(StreamReader::new(Box::pin(body)));
        let target = root.as_std_path().to_path_buf();

        tokio::task::spawn_blocking(move || extract(reader, &target))
            .await
            .map_err(|e| DownloadError::Worker(e.to_string()))?
            .map_err(DownloadError::Extract)?;

        remove_bundled_git(root)?;
        debug!("Template extracted into {}", root);

        Ok(())
    }
}

/// Untar a gzip stream into `root`, stripping one leading path component
pub(crate) fn extract<R: Read>(reader: R, root: &Path) -> io::Result<()> {
    let mut archive = Archive::new(GzDecoder::new(reader));
    let canonical_root = root.canonicalize()?;

    for entry in archive.entries()? {
        let mut entry = entry?;
        if entry.header().entry_type().is_pax_global_extensions() {
            continue;
        }

        let path = entry.path()?.into_owned();
        let Some(relative) = strip_wrapping_folder(&path)? else {
            continue;
        };

        let target = root.join(relative);
        if let Some(parent) = target.parent() {
            // An earlier symlink entry may point the parent elsewhere
            ensure_inside(parent, &canonical_root, &path)?;
            fs::create_dir_all(parent)?;
            ensure_inside(parent, &canonical_root, &path)?;
        }
        if fs::symlink_metadata(&target).is_ok_and(|m| m.file_type().is_symlink()) {
            fs::remove_file(&target)?;
        }
        entry.unpack(&target)?;
    }

    Ok(())
}

/// Path below the archive's top-level folder, `None` for the folder itself.
///
/// Anything that could escape the target directory is an error.
fn strip_wrapping_folder(path: &Path) -> io::Result<Option<PathBuf>> {
    let mut components = path.components().filter(|c| *c != Component::CurDir);

    match components.next() {
        None => return Ok(None),
        Some(Component::Normal(_)) => {}
        Some(_) => return Err(unsafe_path(path)),
    }

    let mut stripped = PathBuf::new();
    for component in components {
        match component {
            Component::Normal(part) => stripped.push(part),
            _ => return Err(unsafe_path(path)),
        }
    }

    if stripped.as_os_str().is_empty() {
        Ok(None)
    } else {
        Ok(Some(stripped))
    }
}

/// Fail unless the deepest existing ancestor of `dir` resolves inside `root`
fn ensure_inside(dir: &Path, root: &Path, entry: &Path) -> io::Result<()> {
    let existing = dir.ancestors().find(|p| p.exists()).unwrap_or(dir);
    if existing.canonicalize()?.starts_with(root) {
        Ok(())
    } else {
        Err(unsafe_path(entry))
    }
}

fn unsafe_path(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("archive entry escapes the target directory: {}", path.display()),
    )
}

fn remove_bundled_git(root: &Utf8Path) -> Result<(), DownloadError> {
    match fs::remove_dir_all(root.join(".git")) {
        Ok(()) => {
            debug!("Removed bundled .git from {}", root);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(DownloadError::Cleanup(e)),
    }
}
