//! Builders for gzip-compressed template tarballs

use flate2::write::GzEncoder;
use flate2::Compression;
use tar::{Builder, EntryType, Header};

/// Top-level folder codeload puts around a `main` branch tarball
pub const WRAPPING_FOLDER: &str = "backend-main";

pub const PACKAGE_JSON: &str = r#"{
  "name": "backend",
  "private": true,
  "scripts": { "dev": "node index.js", "start": "node index.js" }
}
"#;

/// Fluent builder for a template archive
pub struct TemplateArchive {
    builder: Builder<GzEncoder<Vec<u8>>>,
}

impl TemplateArchive {
    pub fn new() -> Self {
        let mut archive = Self {
            builder: Builder::new(GzEncoder::new(Vec::new(), Compression::fast())),
        };
        archive.dir("");
        archive
    }

    /// Add a directory below the wrapping folder
    pub fn dir(&mut self, path: &str) -> &mut Self {
        let mut header = Header::new_gnu();
        header.set_entry_type(EntryType::Directory);
        header.set_size(0);
        header.set_mode(0o755);
        header.set_cksum();
        let full = format!("{}/{}", WRAPPING_FOLDER, path);
        self.builder
            .append_data(&mut header, full, std::io::empty())
            .unwrap();
        self
    }

    /// Add a file below the wrapping folder
    pub fn file(&mut self, path: &str, contents: &str) -> &mut Self {
        let mut header = Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        let full = format!("{}/{}", WRAPPING_FOLDER, path);
        self.builder
            .append_data(&mut header, full, contents.as_bytes())
            .unwrap();
        self
    }

    pub fn finish(self) -> Vec<u8> {
        self.builder.into_inner().unwrap().finish().unwrap()
    }
}

/// Template with a manifest, sources and a bundled `.git` directory
pub fn backend_template() -> Vec<u8> {
    let mut archive = TemplateArchive::new();
    archive
        .file("package.json", PACKAGE_JSON)
        .file("index.js", "console.log('listening')\n")
        .dir("src")
        .file("src/app.js", "module.exports = {}\n")
        .dir(".git")
        .file(".git/HEAD", "ref: refs/heads/main\n");
    archive.finish()
}

/// Template without package.json
pub fn manifestless_template() -> Vec<u8> {
    let mut archive = TemplateArchive::new();
    archive.file("README.md", "# backend\n");
    archive.finish()
}
