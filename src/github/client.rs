//! GitHub API client.

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

use crate::config::DEFAULT_API_URL;
use crate::credentials::Credential;
use crate::error::{GitAutoError, Result};

/// Client for the GitHub REST API.
///
/// The client holds no token; each call authenticates with the credential it
/// is given.
#[derive(Clone)]
pub struct GitHubClient {
    pub(crate) base_url: String,
    pub(crate) client: Client,
}

impl GitHubClient {
    /// Create a client for api.github.com.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Create a client for GitHub Enterprise or another API-compatible server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        // Remove trailing slash if present
        while url.ends_with('/') {
            url.pop();
        }
        Self {
            base_url: url,
            client: Client::new(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the default headers for API requests.
    pub(crate) fn headers(&self, credential: &Credential) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", credential.token))
            .map_err(|_| GitAutoError::InvalidInput("token contains invalid characters".into()))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("gitauto"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        Ok(headers)
    }

    /// Build an authenticated request against an API endpoint.
    pub(crate) fn request(
        &self,
        method: Method,
        endpoint: &str,
        credential: &Credential,
    ) -> Result<RequestBuilder> {
        let url = format!("{}{}", self.base_url, endpoint);
        log::debug!("{} {}", method, url);
        Ok(self
            .client
            .request(method, &url)
            .headers(self.headers(credential)?))
    }

    /// Path of a repository owned by the credential's user.
    pub(crate) fn repo_endpoint(credential: &Credential, name: &str) -> String {
        format!(
            "/repos/{}/{}",
            urlencoding::encode(&credential.username),
            urlencoding::encode(name)
        )
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a response with an unexpected status into a rejection carrying the raw body.
pub(crate) fn rejection(response: Response) -> GitAutoError {
    let status = response.status().as_u16();
    let body = response.text().unwrap_or_default();
    log::debug!("GitHub responded {}: {}", status, body);
    GitAutoError::RemoteRejection { status, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_removed() {
        let client = GitHubClient::with_base_url("http://localhost:8080//");

        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(GitHubClient::new().base_url(), "https://api.github.com");
    }

    #[test]
    fn test_headers() {
        let client = GitHubClient::new();
        let headers = client.headers(&Credential::new("alice", "t123")).unwrap();

        assert_eq!(headers[AUTHORIZATION], "Bearer t123");
        assert_eq!(headers[ACCEPT], "application/vnd.github+json");
        assert_eq!(headers[USER_AGENT], "gitauto");
    }

    #[test]
    fn test_headers_reject_newline_in_token() {
        let client = GitHubClient::new();

        assert!(client.headers(&Credential::new("alice", "t1\n23")).is_err());
    }

    #[test]
    fn test_repo_endpoint_encodes_name() {
        let credential = Credential::new("alice", "t123");

        assert_eq!(
            GitHubClient::repo_endpoint(&credential, "demo"),
            "/repos/alice/demo"
        );
        assert_eq!(
            GitHubClient::repo_endpoint(&credential, "a b"),
            "/repos/alice/a%20b"
        );
    }
}
