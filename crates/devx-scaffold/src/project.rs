//! Project path resolution

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Absolute location of the project to create plus its final path segment,
/// which is also used as the package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPath {
    pub root: Utf8PathBuf,
    pub name: String,
}

impl ProjectPath {
    /// Resolve a user-supplied directory against `cwd`.
    ///
    /// `.` and `..` are folded lexically; symlinks are not followed.
    pub fn resolve(cwd: &Utf8Path, input: &str) -> Self {
        let joined = cwd.join(input.trim());
        let root = normalize(&joined);
        let name = root.file_name().unwrap_or_default().to_string();
        Self { root, name }
    }

    /// Directory the project is created in
    pub fn parent(&self) -> &Utf8Path {
        self.root.parent().unwrap_or(&self.root)
    }

    /// Argument for the `cd` hint: the bare name when the project sits
    /// directly in `cwd`, otherwise the absolute path.
    pub fn cd_path(&self, cwd: &Utf8Path) -> String {
        if normalize(&cwd.join(&self.name)) == self.root {
            self.name.clone()
        } else {
            self.root.to_string()
        }
    }
}

fn normalize(path: &Utf8Path) -> Utf8PathBuf {
    let mut out = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_str()),
        }
    }
    out
}
