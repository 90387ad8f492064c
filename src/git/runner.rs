//! Process-backed command runner.

use crate::error::{GitAutoError, Result};
use crate::git::{CommandOutput, CommandRunner, redact_credentials};
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs the git executable as a child process.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The command line as shown in logs and errors, with credentials masked.
    fn display(&self, args: &[String]) -> String {
        let mut line = self.program.clone();
        for arg in args {
            line.push(' ');
            line.push_str(&redact_credentials(arg));
        }
        line
    }

    fn execute(&self, workdir: &Path, args: &[String], stdout: Stdio) -> Result<CommandOutput> {
        let command = self.display(args);
        log::debug!("Running `{}` in {}", command, workdir.display());

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(workdir)
            .stdout(stdout)
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| GitAutoError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = redact_credentials(String::from_utf8_lossy(&output.stderr).trim());

        if !output.status.success() {
            log::debug!("`{}` exited with {}", command, output.status);
            // git reports some failures, like "nothing to commit", on stdout
            let output_text = if stderr.is_empty() {
                redact_credentials(stdout.trim())
            } else {
                stderr
            };
            return Err(GitAutoError::CommandFailed {
                command,
                code: output.status.code(),
                output: output_text,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

impl CommandRunner for GitCli {
    fn run(&self, workdir: &Path, args: &[String]) -> Result<CommandOutput> {
        self.execute(workdir, args, Stdio::piped())
    }

    /// Stdout is inherited; stderr stays captured for error reporting.
    fn run_streaming(&self, workdir: &Path, args: &[String]) -> Result<CommandOutput> {
        self.execute(workdir, args, Stdio::inherit())
    }
}
