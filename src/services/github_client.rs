//! HTTP access to the GitHub REST API.
//!
//! The lookup controller only needs "GET this URL, give me status and body",
//! so that is all the [`Fetcher`] seam exposes. [`GitHubClient`] is the
//! reqwest-backed implementation.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use url::Url;

use crate::types::errors::{AppError, LookupError};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = concat!("profile-finder/", env!("CARGO_PKG_VERSION"));

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET requests. Errors are transport failures only; any HTTP status,
/// including 404, is a successful fetch.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, LookupError>;
}

/// Builds `<api_url>/users/<username>` with the username as one encoded path segment.
pub fn profile_url(api_url: &str, username: &str) -> Result<String, LookupError> {
    let mut url =
        Url::parse(api_url).map_err(|e| LookupError::InvalidUrl(format!("{}: {}", api_url, e)))?;
    url.path_segments_mut()
        .map_err(|_| LookupError::InvalidUrl(format!("{}: cannot be a base", api_url)))?
        .pop_if_empty()
        .push("users")
        .push(username);
    Ok(url.into())
}

pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    pub fn new(user_agent: &str) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for GitHubClient {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, LookupError> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(url, status, bytes = body.len(), "response received");
        Ok(FetchResponse { status, body })
    }
}
