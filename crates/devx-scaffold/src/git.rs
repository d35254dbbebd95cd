//! Best-effort git initialization
//!
//! Nothing here fails the run. Every outcome is a boolean: either the
//! project ends up with a repository and an initial commit, or it is left
//! without a `.git` directory.

use std::process::Stdio;

use camino::Utf8Path;
use tokio::process::Command;
use tracing::{debug, info};

use devx_core::types::GitWorkflowConfig;

/// Initialize a repository in `root` and commit the template.
///
/// Skipped when git is missing or `root` already lives inside a git or
/// Mercurial repository. Returns whether a repository was created.
pub async fn try_git_init(root: &Utf8Path, config: &GitWorkflowConfig) -> bool {
    if which::which("git").is_err() || !run(root, "git", &["--version"]).await {
        debug!("git not available, skipping repository initialization");
        return false;
    }

    if is_in_git_repository(root).await || is_in_mercurial_repository(root).await {
        debug!("{} is already under version control", root);
        return false;
    }

    if !run(root, "git", &["init"]).await {
        return false;
    }

    if commit_template(root, config).await {
        info!("Initialized a git repository in {}", root);
        return true;
    }

    debug!("Initial commit failed, removing {}/.git", root);
    if let Err(e) = tokio::fs::remove_dir_all(root.join(".git")).await {
        debug!("Failed to remove partial repository: {}", e);
    }
    false
}

async fn commit_template(root: &Utf8Path, config: &GitWorkflowConfig) -> bool {
    if !has_default_branch_config(root).await
        && !run(root, "git", &["checkout", "-b", &config.default_branch]).await
    {
        return false;
    }

    run(root, "git", &["add", "-A"]).await
        && run(
            root,
            "git",
            &["commit", "-m", &config.initial_commit_message],
        )
        .await
}

async fn is_in_git_repository(root: &Utf8Path) -> bool {
    run(root, "git", &["rev-parse", "--is-inside-work-tree"]).await
}

async fn is_in_mercurial_repository(root: &Utf8Path) -> bool {
    run(root, "hg", &["--cwd", ".", "root"]).await
}

/// Whether the user configured `init.defaultBranch`, in which case
/// `git init` already picked the branch name.
async fn has_default_branch_config(root: &Utf8Path) -> bool {
    run(root, "git", &["config", "init.defaultBranch"]).await
}

/// Run a command quietly in `root`; `true` on exit status 0
async fn run(root: &Utf8Path, program: &str, args: &[&str]) -> bool {
    let status = Command::new(program)
        .args(args)
        .current_dir(root)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .status()
        .await;

    match status {
        Ok(status) => status.success(),
        Err(e) => {
            debug!("{} {} could not run: {}", program, args.join(" "), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use serial_test::serial;
    use tempfile::TempDir;

    fn git_available() -> bool {
        which::which("git").is_ok()
    }

    fn set_identity() {
        std::env::set_var("GIT_AUTHOR_NAME", "create-devx tests");
        std::env::set_var("GIT_AUTHOR_EMAIL", "tests@create-devx.invalid");
        std::env::set_var("GIT_COMMITTER_NAME", "create-devx tests");
        std::env::set_var("GIT_COMMITTER_EMAIL", "tests@create-devx.invalid");
    }

    fn temp_project() -> (TempDir, Utf8PathBuf) {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().join("app")).unwrap();
        std::fs::create_dir(&root).unwrap();
        std::fs::write(root.join("index.js"), "module.exports = {}\n").unwrap();
        (temp, root)
    }

    #[tokio::test]
    #[serial]
    async fn test_initializes_repository_with_commit() {
        if !git_available() {
            return;
        }
        set_identity();
        let (_temp, root) = temp_project();

        let initialized = try_git_init(&root, &GitWorkflowConfig::default()).await;
        if !initialized {
            // The temp dir itself sits inside a checkout on this machine
            assert!(!root.join(".git").exists());
            return;
        }

        assert!(root.join(".git").is_dir());
        assert!(run(&root, "git", &["rev-parse", "HEAD"]).await);
    }

    #[tokio::test]
    #[serial]
    async fn test_skips_nested_repository() {
        if !git_available() {
            return;
        }
        set_identity();
        let (_temp, outer) = temp_project();
        assert!(run(&outer, "git", &["init"]).await);

        let inner = outer.join("inner");
        std::fs::create_dir(&inner).unwrap();

        assert!(!try_git_init(&inner, &GitWorkflowConfig::default()).await);
        assert!(!inner.join(".git").exists());
    }

    #[tokio::test]
    #[serial]
    async fn test_failed_commit_removes_repository() {
        if !git_available() {
            return;
        }
        set_identity();
        let (_temp, root) = temp_project();
        // git aborts a commit with an empty message
        let config = GitWorkflowConfig {
            initial_commit_message: String::new(),
            ..GitWorkflowConfig::default()
        };

        assert!(!try_git_init(&root, &config).await);
        assert!(!root.join(".git").exists());
    }

    #[tokio::test]
    async fn test_run_reports_missing_program() {
        let (_temp, root) = temp_project();
        assert!(!run(&root, "create-devx-missing-binary", &[]).await);
    }
}
