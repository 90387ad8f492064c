//! Stored GitHub credentials.
//!
//! A single username/token pair is kept in a JSON file and reused across runs.
//! [`ensure_logged_in`] is the only place that asks the user for it.

use crate::console::Console;
use crate::error::{GitAutoError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A GitHub username and personal access token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub token: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }

    /// A record missing either half is treated as no login at all.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.token.is_empty()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("token", &"***")
            .finish()
    }
}

/// Persistence for the single stored credential.
pub trait CredentialStore {
    /// Load the stored credential.
    ///
    /// `Ok(None)` means nothing is stored; a malformed record is an error.
    fn load(&self) -> Result<Option<Credential>>;

    /// Store a credential, replacing any previous one.
    fn save(&self, credential: &Credential) -> Result<()>;
}

/// Credential store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<Credential>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let credential: Credential =
            serde_json::from_str(&content).map_err(|source| GitAutoError::CredentialParse {
                path: self.path.clone(),
                source,
            })?;

        if !credential.is_complete() {
            return Ok(None);
        }

        log::info!("Loaded credentials from {}", self.path.display());
        Ok(Some(credential))
    }

    fn save(&self, credential: &Credential) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_string_pretty(credential)?)?;

        // The token is stored in plain text
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        log::info!("Saved credentials to {}", self.path.display());
        Ok(())
    }
}

/// Return the stored credential, prompting for and saving a new one if none exists.
pub fn ensure_logged_in(
    store: &dyn CredentialStore,
    console: &mut dyn Console,
) -> Result<Credential> {
    if let Some(credential) = store.load()? {
        console.say(&format!("✅ Already logged in as {}", credential.username))?;
        return Ok(credential);
    }

    let username = console.ask("Enter GitHub username: ")?.trim().to_string();
    let token = console
        .ask("Enter GitHub Personal Access Token (PAT): ")?
        .trim()
        .to_string();

    let credential = Credential::new(username, token);
    if !credential.is_complete() {
        return Err(GitAutoError::InvalidInput(
            "username and token must not be empty".into(),
        ));
    }

    store.save(&credential)?;
    console.say("✅ GitHub credentials saved!")?;
    Ok(credential)
}
