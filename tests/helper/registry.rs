//! Release API test utilities

use mockito::{Mock, Server, ServerGuard};

/// Path of the latest release endpoint for the test repository
pub const LATEST_RELEASE_PATH: &str = "/repos/acme/widgets/releases/latest";

/// Repository used by integration tests
pub const TEST_REPOSITORY: &str = "acme/widgets";

/// Start a mock releases API that answers the latest release endpoint once
pub async fn release_server(status: usize, body: &str) -> (ServerGuard, Mock) {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", LATEST_RELEASE_PATH)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(1)
        .create_async()
        .await;

    (server, mock)
}
