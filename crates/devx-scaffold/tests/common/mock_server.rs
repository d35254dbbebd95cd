//! Wiremock helpers serving template archives

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ARCHIVE_PATH: &str = "/DevXEnterprise/backend/tar.gz/main";

/// Serve `archive` at [`ARCHIVE_PATH`] and return its URL
pub async fn mock_archive(server: &MockServer, archive: Vec<u8>) -> String {
    Mock::given(method("GET"))
        .and(path(ARCHIVE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/x-gzip")
                .set_body_bytes(archive),
        )
        .mount(server)
        .await;
    format!("{}{}", server.uri(), ARCHIVE_PATH)
}

/// Answer the archive path with `status`
pub async fn mock_archive_status(server: &MockServer, status: u16) -> String {
    Mock::given(method("GET"))
        .and(path(ARCHIVE_PATH))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
    format!("{}{}", server.uri(), ARCHIVE_PATH)
}
