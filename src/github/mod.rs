//! GitHub API integration for single-repository operations.
//!
//! This module provides a client for the GitHub REST API to:
//! - Check whether a repository exists
//! - Create and delete repositories
//! - Switch a repository between private and public
//!
//! # Example
//!
//! ```rust,no_run
//! use gitauto::credentials::Credential;
//! use gitauto::github::{GitHubClient, RepoOps};
//!
//! let client = GitHubClient::new();
//! let credential = Credential::new("alice", "ghp_your_token_here");
//!
//! if !client.exists(&credential, "demo") {
//!     let repo = client.create(&credential, "demo", true)?;
//!     println!("Created {}", repo.html_url);
//! }
//! # Ok::<(), gitauto::error::GitAutoError>(())
//! ```

mod client;
mod repos;

pub use client::GitHubClient;
pub use repos::{GitHubRepo, RepoOps};
