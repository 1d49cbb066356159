use std::fmt;
use std::str::FromStr;

use super::errors::TabError;
use super::github::{FollowerSummary, GitHubProfile, RepositorySummary};

/// A trimmed, non-empty username ready to be looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Everything a successful lookup produced.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedProfile {
    pub profile: GitHubProfile,
    pub repositories: Vec<RepositorySummary>,
    pub followers: Vec<FollowerSummary>,
}

/// The single state the presentation layer renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Loaded(LoadedProfile),
    Failed(String),
}

impl ViewState {
    pub fn loaded(&self) -> Option<&LoadedProfile> {
        match self {
            ViewState::Loaded(loaded) => Some(loaded),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&GitHubProfile> {
        self.loaded().map(|l| &l.profile)
    }

    pub fn repositories(&self) -> &[RepositorySummary] {
        self.loaded().map(|l| l.repositories.as_slice()).unwrap_or(&[])
    }

    pub fn followers(&self) -> &[FollowerSummary] {
        self.loaded().map(|l| l.followers.as_slice()).unwrap_or(&[])
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A point-in-time copy of the controller's state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewSnapshot {
    pub state: ViewState,
    /// Input validation message; set by an empty submission, cleared by the next lookup.
    pub notice: Option<String>,
    /// True while at least one lookup is running.
    pub in_flight: bool,
}

impl ViewSnapshot {
    /// The text for the error region, if any.
    pub fn error_text(&self) -> Option<&str> {
        self.notice.as_deref().or_else(|| self.state.error_message())
    }
}

/// Which collection the tab bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveTab {
    #[default]
    Repositories,
    Followers,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 2] = [ActiveTab::Repositories, ActiveTab::Followers];

    pub fn id(&self) -> &'static str {
        match self {
            ActiveTab::Repositories => "repos",
            ActiveTab::Followers => "followers",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ActiveTab::Repositories => "Repositories",
            ActiveTab::Followers => "Followers",
        }
    }
}

impl FromStr for ActiveTab {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "repos" | "repositories" => Ok(ActiveTab::Repositories),
            "followers" => Ok(ActiveTab::Followers),
            other => Err(TabError::NotFound(other.to_string())),
        }
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
