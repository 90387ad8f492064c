//! Runtime configuration.

use crate::error::{GitAutoError, Result};
use std::path::PathBuf;

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default host used when building clone URLs.
pub const DEFAULT_GIT_HOST: &str = "github.com";

/// Name of the credential file inside the home directory.
pub const CREDENTIALS_FILE_NAME: &str = ".git_credentials.json";

/// Where gitauto talks to and where it keeps its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub git_host: String,
    pub credentials_path: PathBuf,
    pub git_program: String,
}

impl Config {
    /// Create a configuration with defaults, storing credentials in the home directory.
    pub fn new() -> Result<Self> {
        Ok(Self::with_credentials_path(default_credentials_path()?))
    }

    /// Create a configuration with defaults and an explicit credential file.
    pub fn with_credentials_path(path: impl Into<PathBuf>) -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.into(),
            git_host: DEFAULT_GIT_HOST.into(),
            credentials_path: path.into(),
            git_program: "git".into(),
        }
    }

    /// Set the API base URL (for GitHub Enterprise or a test server).
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.api_base_url = url;
        self
    }

    /// Set the host used in clone URLs.
    pub fn git_host(mut self, host: impl Into<String>) -> Self {
        self.git_host = host.into();
        self
    }

    /// Set the git executable.
    pub fn git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = program.into();
        self
    }
}

/// `~/.git_credentials.json`
pub fn default_credentials_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(GitAutoError::NoHomeDirectory)?;
    Ok(home.join(CREDENTIALS_FILE_NAME))
}
