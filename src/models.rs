use serde::Deserialize;

/// A repository as listed by `GET /users/{username}/repos`.
///
/// Only the fields the page renders are kept; everything else in the
/// payload is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    pub language: Option<String>,
    pub updated_at: String,
}

/// Error body returned by the GitHub API for unknown users, rate limiting and the like.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FetchError {
    pub message: String,
    #[serde(default)]
    pub documentation_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_ignores_unrendered_fields() {
        let body = r#"{
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "html_url": "https://github.com/octocat/Hello-World",
            "language": null,
            "stargazers_count": 80,
            "updated_at": "2011-01-26T19:14:43Z"
        }"#;

        let repo: Repository = serde_json::from_str(body).unwrap();
        assert_eq!(repo.name, "Hello-World");
        assert_eq!(repo.html_url, "https://github.com/octocat/Hello-World");
        assert_eq!(repo.language, None);
        assert_eq!(repo.updated_at, "2011-01-26T19:14:43Z");
    }

    #[test]
    fn fetch_error_without_documentation_url() {
        let err: FetchError = serde_json::from_str(r#"{"message":"Server Error"}"#).unwrap();
        assert_eq!(err.message, "Server Error");
        assert!(err.documentation_url.is_empty());
    }
}
