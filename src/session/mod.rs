//! Interactive session: the menu loop and the repository actions behind it.
//!
//! A [`Session`] owns everything an action touches: the credential store, the
//! GitHub client, the git runner, the console and the working directory. The
//! working directory is never changed on the process; actions that "enter" a
//! freshly cloned repository report it through [`SessionState::Entered`] and
//! leave the decision of what to do next to the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use gitauto::config::Config;
//! use gitauto::session::{Session, SessionState};
//!
//! let config = Config::new()?;
//! let mut session = Session::from_config(&config, std::env::current_dir()?);
//!
//! if let SessionState::Entered(path) = session.run()? {
//!     println!("cd {}", path.display());
//! }
//! # Ok::<(), gitauto::error::GitAutoError>(())
//! ```

mod actions;
mod command;

pub use actions::DEFAULT_COMMIT_MESSAGE;
pub use command::{BranchCommand, Command};

use crate::config::{Config, DEFAULT_GIT_HOST};
use crate::console::{Console, TerminalConsole};
use crate::credentials::{Credential, CredentialStore, FileCredentialStore, ensure_logged_in};
use crate::error::{GitAutoError, Result};
use crate::git::{CommandRunner, GitCli, is_git_repo};
use crate::github::{GitHubClient, RepoOps};
use std::path::PathBuf;

/// What the caller should do after an action or a session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Show the menu again.
    Continue,
    /// A repository was cloned into this folder; the session is over.
    Entered(PathBuf),
    /// The user chose to leave.
    Exit,
}

/// An interactive session rooted at a working directory.
pub struct Session {
    store: Box<dyn CredentialStore>,
    github: Box<dyn RepoOps>,
    git: Box<dyn CommandRunner>,
    console: Box<dyn Console>,
    workdir: PathBuf,
    git_host: String,
    credential: Option<Credential>,
}

impl Session {
    pub fn new(
        workdir: impl Into<PathBuf>,
        store: Box<dyn CredentialStore>,
        github: Box<dyn RepoOps>,
        git: Box<dyn CommandRunner>,
        console: Box<dyn Console>,
    ) -> Self {
        Self {
            store,
            github,
            git,
            console,
            workdir: workdir.into(),
            git_host: DEFAULT_GIT_HOST.into(),
            credential: None,
        }
    }

    /// Build a session talking to the real GitHub API, git and terminal.
    pub fn from_config(config: &Config, workdir: impl Into<PathBuf>) -> Self {
        Self::new(
            workdir,
            Box::new(FileCredentialStore::new(&config.credentials_path)),
            Box::new(GitHubClient::with_base_url(&config.api_base_url)),
            Box::new(GitCli::new(&config.git_program)),
            Box::new(TerminalConsole::stdio()),
        )
        .git_host(&config.git_host)
    }

    /// Set the host used in clone URLs for newly created repositories.
    pub fn git_host(mut self, host: impl Into<String>) -> Self {
        self.git_host = host.into();
        self
    }

    /// Whether the working directory is a git repository.
    pub fn is_inside_repo(&self) -> bool {
        is_git_repo(&self.workdir)
    }

    /// Run the menu loop until the user exits or an action enters a new repository.
    ///
    /// Action failures are printed and the loop continues. End of input ends
    /// the session as if the user had chosen to exit.
    pub fn run(&mut self) -> Result<SessionState> {
        loop {
            let inside_repo = self.is_inside_repo();
            self.render_menu(inside_repo)?;

            let choice = match self.console.ask("Enter choice: ") {
                Ok(choice) => choice,
                Err(GitAutoError::InputClosed) => return Ok(SessionState::Exit),
                Err(e) => return Err(e),
            };

            let Some(command) = Command::parse(&choice, inside_repo) else {
                self.console.say("❌ Invalid or hidden option!")?;
                continue;
            };

            match self.dispatch(command) {
                Ok(SessionState::Continue) => {}
                Ok(state) => return Ok(state),
                Err(GitAutoError::InputClosed) => return Ok(SessionState::Exit),
                Err(e) => {
                    log::debug!("{:?} failed: {:?}", command, e);
                    self.console.say(&format!("❌ {}", e))?;
                }
            }
        }
    }

    /// Gather the inputs a command needs and run it.
    pub fn dispatch(&mut self, command: Command) -> Result<SessionState> {
        match command {
            Command::CreateRepository => {
                let name = self.console.ask("Enter repository name: ")?;
                let private = self.console.confirm("Private repo? (yes/no): ")?;
                self.create_repository(name.trim(), private)
            }
            Command::DeleteRepository => {
                let name = self.console.ask("Enter repository name to delete: ")?;
                self.delete_repository(name.trim())?;
                Ok(SessionState::Continue)
            }
            Command::SetVisibility => {
                let name = self.console.ask("Enter repository name: ")?;
                let private = self.console.confirm("Make Private? (yes/no): ")?;
                self.set_visibility(name.trim(), private)?;
                Ok(SessionState::Continue)
            }
            Command::Push => {
                self.push()?;
                Ok(SessionState::Continue)
            }
            Command::ClonePublic => {
                let url = self.console.ask("Enter public Git repository URL: ")?;
                self.clone_from_url(&url)
            }
            Command::Exit => {
                self.console.say("👋 Exiting...!")?;
                Ok(SessionState::Exit)
            }
            Command::Pull => {
                self.pull()?;
                Ok(SessionState::Continue)
            }
            Command::Branches => {
                self.branch_menu()?;
                Ok(SessionState::Continue)
            }
            Command::Status => {
                self.status()?;
                Ok(SessionState::Continue)
            }
            Command::Log => {
                self.log()?;
                Ok(SessionState::Continue)
            }
        }
    }

    fn branch_menu(&mut self) -> Result<()> {
        self.console.say("\n📌 Branch Management:")?;
        for command in BranchCommand::ALL {
            self.console
                .say(&format!(" {}) {}", command.key(), command.label()))?;
        }

        let choice = self.console.ask("Enter choice (a/b/c): ")?;
        match BranchCommand::parse(&choice) {
            Some(BranchCommand::Create) => {
                let name = self.console.ask("Enter new branch name: ")?;
                self.create_branch(name.trim())
            }
            Some(BranchCommand::List) => self.list_branches(),
            Some(BranchCommand::Switch) => {
                let name = self.console.ask("Enter branch name to switch to: ")?;
                self.switch_branch(name.trim())
            }
            None => Err(GitAutoError::InvalidInput(format!(
                "'{}' is not a branch option",
                choice.trim()
            ))),
        }
    }

    fn render_menu(&mut self, inside_repo: bool) -> Result<()> {
        self.console.say("\n📌 Choose an option:")?;
        for command in Command::menu(inside_repo) {
            self.console
                .say(&format!(" {}  {}", command.key(), command.label()))?;
        }
        Ok(())
    }

    /// The credential for GitHub calls, prompting for it on first use.
    fn credential(&mut self) -> Result<Credential> {
        if let Some(credential) = &self.credential {
            return Ok(credential.clone());
        }

        let credential = ensure_logged_in(self.store.as_ref(), self.console.as_mut())?;
        self.credential = Some(credential.clone());
        Ok(credential)
    }

    /// The stored credential, without prompting.
    fn stored_credential(&mut self) -> Result<Credential> {
        if let Some(credential) = &self.credential {
            return Ok(credential.clone());
        }

        let credential = self.store.load()?.ok_or(GitAutoError::MissingCredential)?;
        self.credential = Some(credential.clone());
        Ok(credential)
    }
}
