//! Running the external `git` executable.
//!
//! Every git operation gitauto performs is a single invocation of the git
//! program with an argument list. [`CommandRunner`] is the seam between the
//! repository actions and the process, so actions can be exercised without a
//! real git installation.
//!
//! # Example
//!
//! ```rust,no_run
//! use gitauto::git::{CommandRunner, GitCli};
//! use std::path::Path;
//!
//! let git = GitCli::new("git");
//! let output = git.run(Path::new("."), &["status".to_string()])?;
//! println!("{}", output.stdout);
//! # Ok::<(), gitauto::error::GitAutoError>(())
//! ```

mod clone_url;
mod runner;

pub use clone_url::{authenticated_clone_url, folder_name_from_url, redact_credentials};
pub use runner::GitCli;

use crate::error::Result;
use std::path::Path;

/// Captured output of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs git with an argument list inside a working directory.
pub trait CommandRunner {
    /// Run to completion. A non-zero exit status is an error carrying stderr.
    fn run(&self, workdir: &Path, args: &[String]) -> Result<CommandOutput>;

    /// Like [`run`](CommandRunner::run), but stdout may go straight to the
    /// terminal while the command runs. Streamed stdout is not returned.
    fn run_streaming(&self, workdir: &Path, args: &[String]) -> Result<CommandOutput> {
        self.run(workdir, args)
    }
}

/// Whether `dir` is the root of a git working tree.
pub fn is_git_repo(dir: &Path) -> bool {
    dir.join(".git").exists()
}
