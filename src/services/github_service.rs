use crate::models::{FetchError, Repository};
use serde::Deserialize;
use thiserror::Error;

pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Longest slice of an unexpected response body kept for logging.
const BODY_SNIPPET_LEN: usize = 200;

/// Result of one repository listing request.
pub type FetchOutcome = Result<Vec<Repository>, RequestFailure>;

/// Everything that can go wrong while listing a user's repositories.
///
/// The page shows the same notice for every variant; the detail is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestFailure {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("GitHub API error ({status}): {}", .error.message)]
    Api { status: u16, error: FetchError },
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode repository list: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Repos(Vec<Repository>),
    Failure(FetchError),
}

/// Unauthenticated client for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GithubClient {
    pub fn new() -> Self {
        Self::with_base_url(GITHUB_API_BASE)
    }

    /// Points the client at another API host, e.g. a GitHub Enterprise install or a test server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/repos",
            self.base_url,
            urlencoding::encode(username)
        )
    }

    /// Issues a single GET for the first page of `username`'s repositories.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn fetch_user_repos(&self, username: &str) -> FetchOutcome {
        let url = self.repos_url(username);
        tracing::debug!(%url, "requesting repositories");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RequestFailure::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| RequestFailure::Transport(e.to_string()))?;

        interpret_response(status, &body)
    }
}

/// Decides between a repository list and a failure from the raw HTTP status and body.
///
/// An error-shaped body wins regardless of status. A list is only accepted on 2xx.
pub fn interpret_response(status: u16, body: &str) -> FetchOutcome {
    let success = (200..300).contains(&status);

    match (success, serde_json::from_str::<Payload>(body)) {
        (_, Ok(Payload::Failure(error))) => Err(RequestFailure::Api { status, error }),
        (true, Ok(Payload::Repos(repos))) => Ok(repos),
        (true, Err(e)) => Err(RequestFailure::Decode(e.to_string())),
        (false, _) => Err(RequestFailure::Status {
            status,
            body: snippet(body),
        }),
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_repos_url() {
        let client = GithubClient::new();
        assert_eq!(
            client.repos_url("octocat"),
            "https://api.github.com/users/octocat/repos"
        );
    }

    #[test]
    fn empty_username_is_sent_as_is() {
        let client = GithubClient::with_base_url("http://localhost:9000/");
        assert_eq!(client.repos_url(""), "http://localhost:9000/users//repos");
    }

    #[test]
    fn username_is_escaped_as_path_segment() {
        let client = GithubClient::new();
        assert_eq!(
            client.repos_url("a/b c"),
            "https://api.github.com/users/a%2Fb%20c/repos"
        );
    }

    #[test]
    fn accepts_repository_array() {
        let body = r#"[
            {"name":"Hello-World","html_url":"https://github.com/octocat/Hello-World","language":"C","updated_at":"2011-01-26T19:01:12Z"}
        ]"#;
        let repos = interpret_response(200, body).unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].language.as_deref(), Some("C"));
    }

    #[test]
    fn accepts_empty_array() {
        assert_eq!(interpret_response(200, "[]"), Ok(vec![]));
    }

    #[test]
    fn not_found_body_becomes_api_failure() {
        let body = r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest/repos/repos#list-repositories-for-a-user"}"#;
        match interpret_response(404, body) {
            Err(RequestFailure::Api { status, error }) => {
                assert_eq!(status, 404);
                assert_eq!(error.message, "Not Found");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn error_shaped_body_fails_even_with_ok_status() {
        let body = r#"{"message":"API rate limit exceeded","documentation_url":""}"#;
        assert!(matches!(
            interpret_response(200, body),
            Err(RequestFailure::Api { status: 200, .. })
        ));
    }

    #[test]
    fn list_with_error_status_is_rejected() {
        assert!(matches!(
            interpret_response(500, "[]"),
            Err(RequestFailure::Status { status: 500, .. })
        ));
    }

    #[test]
    fn non_json_error_body_is_truncated() {
        let body = "x".repeat(1000);
        match interpret_response(502, &body) {
            Err(RequestFailure::Status { body, .. }) => assert_eq!(body.len(), BODY_SNIPPET_LEN),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn garbage_with_ok_status_is_a_decode_failure() {
        assert!(matches!(
            interpret_response(200, "<html>"),
            Err(RequestFailure::Decode(_))
        ));
    }
}
