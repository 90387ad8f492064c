//! CLI for gitauto.

use anyhow::{Context, Result};
use clap::Parser;
use gitauto::config::{DEFAULT_API_URL, DEFAULT_GIT_HOST, default_credentials_path};
use gitauto::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitauto")]
#[command(author, version, about = "Interactive GitHub repository helper", long_about = None)]
struct Cli {
    /// Credential file (defaults to ~/.git_credentials.json)
    #[arg(long, env = "GITAUTO_CREDENTIALS")]
    credentials: Option<PathBuf>,

    /// GitHub API base URL
    #[arg(long, env = "GITAUTO_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Host used in clone URLs of new repositories
    #[arg(long, env = "GITAUTO_GIT_HOST", default_value = DEFAULT_GIT_HOST)]
    git_host: String,

    /// Git executable
    #[arg(long, env = "GITAUTO_GIT", default_value = "git")]
    git: String,
}

impl Cli {
    fn into_config(self) -> Result<Config> {
        let credentials = match self.credentials {
            Some(path) => path,
            None => default_credentials_path().context("Cannot locate the credential file")?,
        };

        Ok(Config::with_credentials_path(credentials)
            .api_base_url(self.api_url)
            .git_host(self.git_host)
            .git_program(self.git))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config()?;
    let workdir = std::env::current_dir().context("Cannot read the current directory")?;

    let mut session = Session::from_config(&config, workdir);
    let state = session.run().context("Session failed")?;

    if let SessionState::Entered(path) = state {
        println!("👉 Run `cd {}` to continue there", path.display());
        println!("👋 Exiting script...");
    }

    Ok(())
}
