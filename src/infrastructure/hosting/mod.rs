/// Remote hosting provider access
///
/// Lists the repositories of an account so they can be cloned locally.
pub mod github;

pub use github::{GitHubClient, DEFAULT_API_URL};

use crate::domain::entities::repository::RemoteRepository;

/// Source of remote repository descriptors for an account
#[cfg_attr(test, mockall::automock)]
pub trait RepositoryLister {
    /// List the repositories owned by `username`, in provider order
    fn list_repositories(&self, username: &str) -> Result<Vec<RemoteRepository>, HostingError>;
}

/// Errors that can occur while talking to the hosting provider
#[derive(Debug, thiserror::Error)]
pub enum HostingError {
    #[error("Invalid API URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API URL cannot have paths appended: {url}")]
    InvalidBase { url: String },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status code {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Failed to decode repository list from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl HostingError {
    /// Request URL, when known
    pub fn url(&self) -> Option<String> {
        match self {
            Self::InvalidUrl { url, .. }
            | Self::InvalidBase { url }
            | Self::UnexpectedStatus { url, .. }
            | Self::Decode { url, .. } => Some(url.clone()),
            Self::Request(e) => e.url().map(|u| u.to_string()),
        }
    }
}
