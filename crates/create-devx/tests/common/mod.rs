//! Common test utilities for create-devx end-to-end tests
//!
//! Each test gets an isolated working directory, HOME and a `bin/` directory
//! prepended to PATH holding stand-ins for the package managers.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ARCHIVE_PATH: &str = "/DevXEnterprise/backend/tar.gz/main";

/// Isolated filesystem for one binary invocation
pub struct TestWorkspace {
    pub temp: TempDir,
    pub cwd: PathBuf,
    pub home: PathBuf,
    pub bin: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let cwd = temp.path().join("work");
        let home = temp.path().join("home");
        let bin = temp.path().join("bin");
        for dir in [&cwd, &home, &bin] {
            std::fs::create_dir_all(dir).expect("Failed to create test directory");
        }
        Self {
            temp,
            cwd,
            home,
            bin,
        }
    }

    pub fn project(&self, name: &str) -> PathBuf {
        self.cwd.join(name)
    }

    /// Install a package manager stand-in that records its arguments in
    /// `.pm-args` inside its working directory and exits with `exit_code`.
    /// `<tool> config get https-proxy` prints `null` like npm does when unset.
    #[cfg(unix)]
    pub fn fake_tool(&self, name: &str, exit_code: i32) {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"config\" ]; then echo null; exit 0; fi\n\
             echo \"{name} $@\" > .pm-args\n\
             echo \"NODE_ENV=$NODE_ENV ADBLOCK=$ADBLOCK DISABLE_OPENCOLLECTIVE=$DISABLE_OPENCOLLECTIVE\" >> .pm-args\n\
             exit {exit_code}\n"
        );
        let tool = self.bin.join(name);
        std::fs::write(&tool, script).expect("Failed to write fake tool");
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake tool executable");
    }

    /// Install a package manager stand-in that records its arguments and
    /// then hangs until killed.
    #[cfg(unix)]
    pub fn hanging_tool(&self, name: &str) {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"config\" ]; then echo null; exit 0; fi\n\
             echo \"{name} $@\" > .pm-args\n\
             exec sleep 30\n"
        );
        let tool = self.bin.join(name);
        std::fs::write(&tool, script).expect("Failed to write fake tool");
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake tool executable");
    }

    /// The binary, configured for this workspace and `archive_url`
    pub fn command(&self, archive_url: &str) -> Command {
        Command::from_std(self.std_command(archive_url))
    }

    /// Same as [`TestWorkspace::command`] but spawnable, for tests that
    /// interact with the running process
    #[allow(deprecated)]
    pub fn std_command(&self, archive_url: &str) -> std::process::Command {
        let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin("create-devx"));
        let path = format!(
            "{}:{}",
            self.bin.display(),
            std::env::var("PATH").unwrap_or_default()
        );
        cmd.current_dir(&self.cwd)
            .env("PATH", path)
            .env("HOME", &self.home)
            .env("XDG_CACHE_HOME", self.home.join(".cache"))
            .env("CREATE_DEVX_ARCHIVE_URL", archive_url)
            .env("CREATE_DEVX_NO_UPDATE_CHECK", "1")
            .env("GIT_AUTHOR_NAME", "create-devx tests")
            .env("GIT_AUTHOR_EMAIL", "tests@create-devx.invalid")
            .env("GIT_COMMITTER_NAME", "create-devx tests")
            .env("GIT_COMMITTER_EMAIL", "tests@create-devx.invalid")
            .env_remove("npm_config_user_agent")
            .env_remove("https_proxy")
            .env_remove("CREATE_DEVX_PROBE_HOST")
            .env_remove("CREATE_DEVX_REGISTRY_URL");
        cmd
    }
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("Failed to read file")
}

/// Gzip tarball wrapped in `backend-main/`
pub fn template_archive(files: &[(&str, &str)]) -> Vec<u8> {
    let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::fast()));
    for (name, contents) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(
                &mut header,
                format!("backend-main/{}", name),
                contents.as_bytes(),
            )
            .expect("Failed to append archive entry");
    }
    builder
        .into_inner()
        .and_then(|gz| gz.finish())
        .expect("Failed to finish archive")
}

pub fn backend_archive() -> Vec<u8> {
    template_archive(&[
        (
            "package.json",
            r#"{"name":"backend","scripts":{"dev":"node index.js","start":"node index.js"}}"#,
        ),
        ("index.js", "console.log('ready')\n"),
        (".git/HEAD", "ref: refs/heads/main\n"),
    ])
}

pub async fn serve_archive(server: &MockServer, archive: Vec<u8>) -> String {
    Mock::given(method("GET"))
        .and(path(ARCHIVE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(archive))
        .mount(server)
        .await;
    format!("{}{}", server.uri(), ARCHIVE_PATH)
}

pub async fn serve_status(server: &MockServer, status: u16) -> String {
    Mock::given(method("GET"))
        .and(path(ARCHIVE_PATH))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
    format!("{}{}", server.uri(), ARCHIVE_PATH)
}
