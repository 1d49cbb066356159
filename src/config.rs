//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::platform;
use crate::services::github_client::{DEFAULT_API_URL, DEFAULT_USER_AGENT};
use crate::types::view::ActiveTab;

const DATABASE_FILE: &str = "profile-finder.db";

#[derive(Parser, Debug, Clone)]
#[command(name = "profile-finder")]
#[command(about = "Look up a GitHub user's profile, repositories and followers")]
#[command(version)]
pub struct Cli {
    /// Look up this user and print the result instead of opening a window
    pub username: Option<String>,

    /// Which list to print in headless mode (repos or followers)
    #[arg(long, default_value = "repos")]
    pub tab: ActiveTab,

    /// Flip the saved light/dark preference before doing anything else
    #[arg(long)]
    pub toggle_theme: bool,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "PROFILE_FINDER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Directory holding the preference database
    #[arg(long, env = "PROFILE_FINDER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// User-Agent header sent with every request
    #[arg(long, env = "PROFILE_FINDER_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// tracing filter directive
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

/// Settings the application core needs, independent of how they were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub data_dir: PathBuf,
    pub user_agent: String,
}

impl AppConfig {
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: platform::get_data_dir(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<&Cli> for AppConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            api_url: cli.api_url.clone(),
            data_dir: cli.data_dir.clone().unwrap_or_else(platform::get_data_dir),
            user_agent: cli.user_agent.clone(),
        }
    }
}
