//! Repository actions.

use super::{Session, SessionState};
use crate::error::{GitAutoError, Result};
use crate::git::{
    CommandOutput, authenticated_clone_url, folder_name_from_url, redact_credentials,
};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Commit message used when the user leaves it blank.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Auto commit";

impl Session {
    /// Create a GitHub repository, clone it and enter it.
    ///
    /// Nothing is created when a folder or a GitHub repository with the same
    /// name already exists, or when GitHub cannot tell whether it does.
    pub fn create_repository(&mut self, name: &str, private: bool) -> Result<SessionState> {
        let local_path = self.local_path(name)?;
        let credential = self.credential()?;

        let local = local_path.exists();
        let remote = if local {
            self.github.exists(&credential, name)
        } else {
            self.github.check_exists(&credential, name)?
        };

        if local {
            self.console
                .say(&format!("⚠️ Folder '{}' already exists!", name))?;
        }
        if remote {
            self.console
                .say(&format!("⚠️ GitHub repository '{}' already exists!", name))?;
        }
        if local || remote {
            return Err(GitAutoError::DuplicateRepository {
                name: name.to_string(),
                local,
                remote,
            });
        }

        let repo = self.github.create(&credential, name, private)?;
        log::info!("Created {} (private: {})", repo.full_name, repo.is_private);
        self.console
            .say(&format!("✅ Repository '{}' created successfully!", name))?;

        let url = authenticated_clone_url(
            &self.git_host,
            &credential.username,
            &credential.token,
            &credential.username,
            name,
        );
        self.console.say(&format!("📥 Cloning {}...", name))?;
        self.run_git(&["clone", url.as_str()])?;

        self.enter(name, local_path)
    }

    /// Delete a GitHub repository and, once that succeeds, the like-named local folder.
    pub fn delete_repository(&mut self, name: &str) -> Result<()> {
        let local_path = self.local_path(name)?;
        let credential = self.credential()?;

        self.github.delete(&credential, name)?;
        self.console
            .say(&format!("✅ Repository '{}' deleted successfully!", name))?;

        if local_path.is_dir() {
            fs::remove_dir_all(&local_path)?;
        } else if local_path.exists() {
            fs::remove_file(&local_path)?;
        } else {
            return Ok(());
        }

        log::info!("Removed {}", local_path.display());
        self.console
            .say(&format!("🗑️ Local folder '{}' deleted!", name))?;
        Ok(())
    }

    /// Make a GitHub repository private or public.
    pub fn set_visibility(&mut self, name: &str, private: bool) -> Result<()> {
        let credential = self.credential()?;

        let repo = self.github.set_visibility(&credential, name, private)?;
        let status = if repo.is_private { "Private" } else { "Public" };
        self.console
            .say(&format!("✅ Repository '{}' is now {}!", name, status))?;
        Ok(())
    }

    /// Stage everything, commit and push to the configured remote.
    ///
    /// A failed commit (usually "nothing to commit") is reported and the push
    /// still runs, so earlier unpushed commits go out.
    pub fn push(&mut self) -> Result<()> {
        self.require_repo()?;
        self.stored_credential()?;

        self.run_git(&["add", "."])?;

        let message = self.console.ask("Enter commit message: ")?;
        let message = match message.trim() {
            "" => DEFAULT_COMMIT_MESSAGE,
            trimmed => trimmed,
        };

        match self.run_git(&["commit", "-m", message]) {
            Ok(()) => {}
            Err(e @ GitAutoError::CommandFailed { .. }) => {
                log::warn!("Commit failed, pushing anyway: {}", e);
                self.console.say(&format!("⚠️ {}", e))?;
            }
            Err(e) => return Err(e),
        }

        self.run_git(&["push"])?;
        self.console.say("✅ Changes pushed!")?;
        Ok(())
    }

    /// Pull the latest changes into the current repository.
    pub fn pull(&mut self) -> Result<()> {
        self.require_repo()?;
        self.stream_git(&["pull"])
    }

    /// Clone any repository URL and enter the created folder.
    pub fn clone_from_url(&mut self, url: &str) -> Result<SessionState> {
        let url = url.trim();
        if url.is_empty() {
            return Err(GitAutoError::InvalidInput("URL must not be empty".into()));
        }

        let name = folder_name_from_url(url).ok_or_else(|| {
            GitAutoError::InvalidInput(format!("cannot derive a folder name from '{}'", url))
        })?;
        let local_path = self.local_path(&name)?;

        self.console
            .say(&format!("📥 Cloning {}...", redact_credentials(url)))?;
        self.run_git(&["clone", url])?;

        self.enter(&name, local_path)
    }

    /// Create a branch and switch to it.
    pub fn create_branch(&mut self, name: &str) -> Result<()> {
        self.stream_git(&["checkout", "-b", name])
    }

    pub fn list_branches(&mut self) -> Result<()> {
        self.stream_git(&["branch"])
    }

    pub fn switch_branch(&mut self, name: &str) -> Result<()> {
        self.stream_git(&["checkout", name])
    }

    pub fn status(&mut self) -> Result<()> {
        self.stream_git(&["status"])
    }

    /// One line per commit.
    pub fn log(&mut self) -> Result<()> {
        self.stream_git(&["log", "--oneline"])
    }

    /// Run git in the working directory and echo what it printed.
    fn run_git(&mut self, args: &[&str]) -> Result<()> {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        let output = self.git.run(&self.workdir, &args)?;
        self.echo(&output)
    }

    /// Run git with its stdout going straight to the terminal.
    fn stream_git(&mut self, args: &[&str]) -> Result<()> {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        let output = self.git.run_streaming(&self.workdir, &args)?;
        self.echo(&output)
    }

    fn echo(&mut self, output: &CommandOutput) -> Result<()> {
        for text in [&output.stdout, &output.stderr] {
            let text = text.trim_end();
            if !text.is_empty() {
                self.console.say(text)?;
            }
        }
        Ok(())
    }

    fn require_repo(&self) -> Result<()> {
        if self.is_inside_repo() {
            Ok(())
        } else {
            Err(GitAutoError::NotARepository(self.workdir.clone()))
        }
    }

    /// The folder a repository name maps to inside the working directory.
    ///
    /// The name must be a single plain path component so that deleting the
    /// folder can never reach outside the working directory.
    fn local_path(&self, name: &str) -> Result<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.workdir.join(name)),
            _ => Err(GitAutoError::InvalidInput(format!(
                "'{}' is not a valid repository name",
                name
            ))),
        }
    }

    fn enter(&mut self, name: &str, path: PathBuf) -> Result<SessionState> {
        if !path.is_dir() {
            return Err(GitAutoError::CloneFailed {
                repo: name.to_string(),
                message: format!("{} was not created", path.display()),
            });
        }

        self.console.say(&format!("📂 Entered into '{}'", name))?;
        Ok(SessionState::Entered(path))
    }
}
