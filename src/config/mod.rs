//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.pester.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PESTER_OWNER`, `PESTER_REPO`,
//!    `PESTER_TOKEN` (or legacy `GITHUB_TOKEN`), `PESTER_WAIT_HOURS`
//! 4. **Command-line arguments** – `--owner`/`-o`, `--repo`/`-r`,
//!    `--token`/`-t`, `--wait-hours`/`-w`, `--post`
//!
//! # Configuration File
//!
//! Place `.pester.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! owner = "octocat"
//! repo = "hello-world"
//! token = "ghp_example"
//! wait_hours = 48
//! post = true
//! category = "Reviewer notifications"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::PollError;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `PESTER_OWNER` or `--owner`: Repository owner
/// - `PESTER_REPO` or `--repo`: Repository name
/// - `PESTER_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `PESTER_WAIT_HOURS` or `--wait-hours`: Overdue threshold in hours
/// - `PESTER_CATEGORY` or `--category`: Discussion category for summaries
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use pester::PesterConfig;
///
/// let config = PesterConfig::load().expect("failed to load configuration");
/// let (owner, repo) = config.require_repository_info().expect("repository required");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PESTER",
    discovery(
        dotfile_name = ".pester.toml",
        config_file_name = "pester.toml",
        app_name = "pester"
    )
)]
pub struct PesterConfig {
    /// Repository owner (e.g., "octocat").
    ///
    /// Can be provided via:
    /// - CLI: `--owner <OWNER>` or `-o <OWNER>`
    /// - Environment: `PESTER_OWNER`
    /// - Config file: `owner = "..."`
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name (e.g., "hello-world").
    ///
    /// Can be provided via:
    /// - CLI: `--repo <REPO>` or `-r <REPO>`
    /// - Environment: `PESTER_REPO`
    /// - Config file: `repo = "..."`
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `PESTER_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// How many hours a review may wait before its reviewer is reported.
    ///
    /// The comparison is inclusive: a wait of exactly this many hours is
    /// already overdue.
    ///
    /// Can be provided via:
    /// - CLI: `--wait-hours <HOURS>` or `-w <HOURS>`
    /// - Environment: `PESTER_WAIT_HOURS`
    /// - Config file: `wait_hours = 48`
    ///
    /// Defaults to 24 hours.
    #[ortho_config(cli_short = 'w')]
    pub wait_hours: u32,

    /// Posts the summary as a discussion comment after printing it.
    ///
    /// When unset, the run only prints the summary to stdout.
    ///
    /// Can be provided via:
    /// - CLI: `--post`
    /// - Config file: `post = true`
    ///
    /// Note: Environment variable `PESTER_POST` is not supported because
    /// `ortho_config` does not load boolean values from the environment.
    #[ortho_config()]
    pub post: bool,

    /// Discussion category that hosts the notification discussion.
    ///
    /// Can be provided via:
    /// - CLI: `--category <NAME>`
    /// - Environment: `PESTER_CATEGORY`
    /// - Config file: `category = "..."`
    #[ortho_config()]
    pub category: String,
}

const DEFAULT_WAIT_HOURS: u32 = 24;
const DEFAULT_DISCUSSION_CATEGORY: &str = "Reviewer notifications";

impl Default for PesterConfig {
    fn default() -> Self {
        Self {
            owner: None,
            repo: None,
            token: None,
            wait_hours: DEFAULT_WAIT_HOURS,
            post: false,
            category: DEFAULT_DISCUSSION_CATEGORY.to_owned(),
        }
    }
}

impl PesterConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// For backward compatibility, if no token is provided via `PESTER_TOKEN`,
    /// the CLI, or a configuration file, this method falls back to reading
    /// `GITHUB_TOKEN` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, PollError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(PollError::MissingToken)
    }

    /// Returns owner and repo if both are configured.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::Configuration`] when owner or repo is missing.
    pub fn require_repository_info(&self) -> Result<(&str, &str), PollError> {
        match (&self.owner, &self.repo) {
            (Some(owner), Some(repo)) => Ok((owner.as_str(), repo.as_str())),
            (None, _) => Err(PollError::Configuration {
                message: "repository owner is required (use --owner or -o)".to_owned(),
            }),
            (_, None) => Err(PollError::Configuration {
                message: "repository name is required (use --repo or -r)".to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests;
