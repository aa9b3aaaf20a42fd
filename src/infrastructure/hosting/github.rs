use reqwest::header::ACCEPT;
use tracing::debug;
use url::Url;

use super::{HostingError, RepositoryLister};
use crate::domain::entities::repository::RemoteRepository;

/// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("gitkit/", env!("CARGO_PKG_VERSION"));

/// Unauthenticated client for the `GET /users/{username}/repos` listing.
///
/// Only the first page the API returns is read.
pub struct GitHubClient {
    api_base: Url,
    http_client: reqwest::blocking::Client,
}

impl GitHubClient {
    /// Client for api.github.com
    pub fn new() -> Result<Self, HostingError> {
        Self::with_api_url(DEFAULT_API_URL)
    }

    /// Client for another API root, e.g. `https://ghe.example.com/api/v3`
    pub fn with_api_url(api_url: &str) -> Result<Self, HostingError> {
        let api_base = Url::parse(api_url).map_err(|source| HostingError::InvalidUrl {
            url: api_url.to_string(),
            source,
        })?;
        if api_base.cannot_be_a_base() {
            return Err(HostingError::InvalidBase {
                url: api_url.to_string(),
            });
        }

        let http_client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            api_base,
            http_client,
        })
    }

    /// `<api>/users/<username>/repos`
    pub fn repos_url(&self, username: &str) -> Url {
        let mut url = self.api_base.clone();
        // checked in with_api_url
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["users", username, "repos"]);
        }
        url
    }
}

impl RepositoryLister for GitHubClient {
    fn list_repositories(&self, username: &str) -> Result<Vec<RemoteRepository>, HostingError> {
        let url = self.repos_url(username);
        debug!(%url, "listing repositories");

        let response = self
            .http_client
            .get(url.clone())
            .header(ACCEPT, "application/vnd.github+json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(HostingError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<RemoteRepository>>()
            .map_err(|source| HostingError::Decode {
                url: url.to_string(),
                source,
            })
    }
}
