//! GitHub Releases API release source

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{ACCEPT_MEDIA_TYPE, FETCH_TIMEOUT_MS, USER_AGENT};
use crate::version::error::ResolveError;
use crate::version::release::{ReleaseSource, RemoteReleaseInfo};

/// Response from the GitHub "latest release" endpoint.
///
/// `tag_name` is kept untyped so a missing or non-string tag is reported as a
/// malformed payload instead of a decode error.
#[derive(Debug, Deserialize)]
struct LatestRelease {
    tag_name: Option<serde_json::Value>,
}

/// Release source backed by the GitHub Releases API
pub struct GitHubReleaseSource {
    client: reqwest::Client,
    base_url: String,
    repository: String,
}

impl GitHubReleaseSource {
    /// Creates a release source for `repository` (`owner/name`) at `base_url`
    pub fn new(base_url: &str, repository: &str) -> Result<Self, ResolveError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            repository: repository.to_string(),
        })
    }

    fn latest_release_url(&self) -> String {
        format!("{}/repos/{}/releases/latest", self.base_url, self.repository)
    }
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubReleaseSource {
    async fn fetch_latest_release(&self) -> Result<RemoteReleaseInfo, ResolveError> {
        let url = self.latest_release_url();
        debug!("Fetching latest release: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", ACCEPT_MEDIA_TYPE)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(ResolveError::Status(status.as_u16()));
        }

        let release: LatestRelease = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub release response: {}", e);
            ResolveError::MalformedPayload(e.to_string())
        })?;

        match release.tag_name {
            Some(serde_json::Value::String(tag)) if !tag.is_empty() => {
                Ok(RemoteReleaseInfo { tag_name: tag })
            }
            Some(serde_json::Value::String(_)) => Err(ResolveError::MalformedPayload(
                "tag_name is empty".to_string(),
            )),
            Some(other) => Err(ResolveError::MalformedPayload(format!(
                "tag_name is not a string: {}",
                other
            ))),
            None => Err(ResolveError::MalformedPayload(
                "tag_name is missing".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_REPOSITORY;
    use mockito::{Matcher, Server};
    use rstest::rstest;

    const LATEST_PATH: &str = "/repos/acme/widgets/releases/latest";

    #[tokio::test]
    async fn fetch_latest_release_returns_tag_name() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", LATEST_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"tag_name": "v2.0.0", "name": "Release 2.0.0", "draft": false}"#)
            .create_async()
            .await;

        let source = GitHubReleaseSource::new(&server.url(), "acme/widgets").unwrap();
        let result = source.fetch_latest_release().await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            result,
            RemoteReleaseInfo {
                tag_name: "v2.0.0".to_string()
            }
        );
    }

    #[tokio::test]
    async fn fetch_latest_release_queries_default_repository() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/brenoepics/prometheus-mcp/releases/latest")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"tag_name": "v1.0.0"}"#)
            .create_async()
            .await;

        let source = GitHubReleaseSource::new(&server.url(), DEFAULT_REPOSITORY).unwrap();
        let result = source.fetch_latest_release().await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn fetch_latest_release_sends_accept_and_user_agent_headers() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", LATEST_PATH)
            .match_header("accept", ACCEPT_MEDIA_TYPE)
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"tag_name": "1.0.0"}"#)
            .create_async()
            .await;

        let source = GitHubReleaseSource::new(&server.url(), "acme/widgets").unwrap();
        let result = source.fetch_latest_release().await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn fetch_latest_release_trims_trailing_slash_from_base_url() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", LATEST_PATH)
            .with_status(200)
            .with_body(r#"{"tag_name": "1.0.0"}"#)
            .create_async()
            .await;

        let base_url = format!("{}/", server.url());
        let source = GitHubReleaseSource::new(&base_url, "acme/widgets").unwrap();
        let result = source.fetch_latest_release().await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[rstest]
    #[case(404)]
    #[case(403)]
    #[case(500)]
    #[tokio::test]
    async fn fetch_latest_release_returns_status_error_for_non_success(#[case] status: usize) {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", LATEST_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "error"}"#)
            .create_async()
            .await;

        let source = GitHubReleaseSource::new(&server.url(), "acme/widgets").unwrap();
        let result = source.fetch_latest_release().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ResolveError::Status(code)) if code as usize == status));
    }

    #[rstest]
    #[case::not_json("<html>rate limited</html>")]
    #[case::empty_body("")]
    #[case::array(r#"[{"tag_name": "v1.0.0"}]"#)]
    #[case::missing_tag(r#"{"name": "Release"}"#)]
    #[case::null_tag(r#"{"tag_name": null}"#)]
    #[case::numeric_tag(r#"{"tag_name": 2}"#)]
    #[case::empty_tag(r#"{"tag_name": ""}"#)]
    #[tokio::test]
    async fn fetch_latest_release_returns_malformed_payload(#[case] body: &str) {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", LATEST_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let source = GitHubReleaseSource::new(&server.url(), "acme/widgets").unwrap();
        let result = source.fetch_latest_release().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ResolveError::MalformedPayload(_))));
    }

    #[tokio::test]
    async fn fetch_latest_release_issues_exactly_one_request() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", Matcher::Any)
            .with_status(502)
            .expect(1)
            .create_async()
            .await;

        let source = GitHubReleaseSource::new(&server.url(), "acme/widgets").unwrap();
        let _ = source.fetch_latest_release().await;

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_latest_release_returns_network_error_when_unreachable() {
        // Port 9 (discard) on localhost is not expected to accept HTTP connections
        let source = GitHubReleaseSource::new("http://127.0.0.1:9", "acme/widgets").unwrap();
        let result = source.fetch_latest_release().await;

        assert!(matches!(result, Err(ResolveError::Network(_))));
    }
}
