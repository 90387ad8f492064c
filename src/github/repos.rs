//! GitHub repository operations.

use crate::credentials::Credential;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::github::client::rejection;
use reqwest::blocking::Response;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

/// Repository information from the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(rename = "private")]
    pub is_private: bool,
}

impl GitHubRepo {
    /// The repository as it was requested, for when GitHub's answer cannot be read.
    fn requested(credential: &Credential, name: &str, private: bool) -> Self {
        Self {
            name: name.to_string(),
            full_name: format!("{}/{}", credential.username, name),
            html_url: String::new(),
            is_private: private,
        }
    }

    /// Decode a success response. The status already decided the outcome, so
    /// an unreadable body falls back to the requested values.
    fn from_response(
        response: Response,
        credential: &Credential,
        name: &str,
        private: bool,
    ) -> Self {
        response.json().unwrap_or_else(|e| {
            log::warn!("Unreadable GitHub response for '{}': {}", name, e);
            Self::requested(credential, name, private)
        })
    }
}

/// Single-repository operations on repos owned by the credential's user.
pub trait RepoOps {
    /// Look the repository up. `Ok(false)` only when GitHub answers 404.
    fn check_exists(&self, credential: &Credential, name: &str) -> Result<bool>;

    /// Create a repository for the authenticated user.
    fn create(&self, credential: &Credential, name: &str, private: bool) -> Result<GitHubRepo>;

    /// Delete a repository.
    fn delete(&self, credential: &Credential, name: &str) -> Result<()>;

    /// Make a repository private or public, returning the updated repository.
    fn set_visibility(
        &self,
        credential: &Credential,
        name: &str,
        private: bool,
    ) -> Result<GitHubRepo>;

    /// Whether the repository exists. Failures count as "does not exist" and are logged.
    fn exists(&self, credential: &Credential, name: &str) -> bool {
        match self.check_exists(credential, name) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("Could not check whether '{}' exists: {}", name, e);
                false
            }
        }
    }
}

#[derive(Serialize)]
struct CreateRepoRequest<'a> {
    name: &'a str,
    private: bool,
}

#[derive(Serialize)]
struct VisibilityRequest {
    private: bool,
}

impl RepoOps for GitHubClient {
    fn check_exists(&self, credential: &Credential, name: &str) -> Result<bool> {
        let endpoint = Self::repo_endpoint(credential, name);
        let response = self.request(Method::GET, &endpoint, credential)?.send()?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(rejection(response)),
        }
    }

    fn create(&self, credential: &Credential, name: &str, private: bool) -> Result<GitHubRepo> {
        let response = self
            .request(Method::POST, "/user/repos", credential)?
            .json(&CreateRepoRequest { name, private })
            .send()?;

        if response.status() != StatusCode::CREATED {
            return Err(rejection(response));
        }

        Ok(GitHubRepo::from_response(response, credential, name, private))
    }

    fn delete(&self, credential: &Credential, name: &str) -> Result<()> {
        let endpoint = Self::repo_endpoint(credential, name);
        let response = self.request(Method::DELETE, &endpoint, credential)?.send()?;

        if response.status() != StatusCode::NO_CONTENT {
            return Err(rejection(response));
        }

        Ok(())
    }

    fn set_visibility(
        &self,
        credential: &Credential,
        name: &str,
        private: bool,
    ) -> Result<GitHubRepo> {
        let endpoint = Self::repo_endpoint(credential, name);
        let response = self
            .request(Method::PATCH, &endpoint, credential)?
            .json(&VisibilityRequest { private })
            .send()?;

        if response.status() != StatusCode::OK {
            return Err(rejection(response));
        }

        Ok(GitHubRepo::from_response(response, credential, name, private))
    }
}
