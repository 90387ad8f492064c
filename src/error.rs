//! Error types for gitauto.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for repository actions.
#[derive(Error, Debug)]
pub enum GitAutoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No GitHub credentials found! Please login first.")]
    MissingCredential,

    #[error("Malformed credential file {path}: {source}")]
    CredentialParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Could not determine home directory")]
    NoHomeDirectory,

    #[error("Repository '{name}' already exists ({})", existence(.local, .remote))]
    DuplicateRepository {
        name: String,
        local: bool,
        remote: bool,
    },

    #[error("GitHub rejected the request ({status}): {body}")]
    RemoteRejection { status: u16, body: String },

    #[error("`{command}` failed{}: {output}", exit_code(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Clone failed for {repo}: {message}")]
    CloneFailed { repo: String, message: String },

    #[error("Not a Git repository: {0}")]
    NotARepository(PathBuf),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input closed")]
    InputClosed,
}

fn existence(local: &bool, remote: &bool) -> &'static str {
    match (*local, *remote) {
        (true, true) => "local folder and GitHub repository",
        (true, false) => "local folder",
        _ => "GitHub repository",
    }
}

fn exit_code(code: &Option<i32>) -> String {
    code.map(|c| format!(" with exit code {}", c))
        .unwrap_or_default()
}

/// A specialized Result type for gitauto operations.
pub type Result<T> = std::result::Result<T, GitAutoError>;
