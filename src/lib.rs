//! # gitauto
//!
//! An interactive helper around the GitHub REST API and the `git` executable.
//!
//! This crate provides:
//! - A single stored GitHub username/token pair, prompted for once
//! - Creating, deleting and changing the visibility of GitHub repositories
//! - Cloning, pulling, pushing, branching and inspecting repositories via `git`
//! - A context-sensitive menu that only offers what makes sense in the
//!   current directory
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gitauto::prelude::*;
//!
//! let config = Config::new()?;
//! let mut session = Session::from_config(&config, std::env::current_dir()?);
//!
//! match session.run()? {
//!     SessionState::Entered(path) => println!("Now in {}", path.display()),
//!     _ => println!("Bye"),
//! }
//! # Ok::<(), gitauto::error::GitAutoError>(())
//! ```
//!
//! ## Driving actions directly
//!
//! Every menu entry is also a method on [`Session`](session::Session), so the
//! actions can be scripted:
//!
//! ```rust,no_run
//! use gitauto::prelude::*;
//!
//! let config = Config::new()?;
//! let mut session = Session::from_config(&config, "/home/alice/src");
//!
//! session.set_visibility("demo", false)?;
//! session.delete_repository("old-experiment")?;
//! # Ok::<(), gitauto::error::GitAutoError>(())
//! ```

pub mod config;
pub mod console;
pub mod credentials;
pub mod error;
pub mod git;
pub mod github;
pub mod session;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::console::{Console, TerminalConsole};
    pub use crate::credentials::{
        Credential, CredentialStore, FileCredentialStore, ensure_logged_in,
    };
    pub use crate::error::{GitAutoError, Result};
    pub use crate::git::{CommandOutput, CommandRunner, GitCli, is_git_repo};
    pub use crate::github::{GitHubClient, GitHubRepo, RepoOps};
    pub use crate::session::{BranchCommand, Command, Session, SessionState};
}

pub use prelude::*;
