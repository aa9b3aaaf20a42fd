use std::path::PathBuf;
use thiserror::Error;

use crate::infrastructure::hosting::HostingError;

#[derive(Error, Debug)]
pub enum GitkitError {
    #[error("Path resolution failed: {message}")]
    PathResolutionError {
        message: String,
        input: Option<String>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Directory traversal failed: {message}")]
    TraversalError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<walkdir::Error>,
    },

    #[error("Status query failed for {}: {message}", path.display())]
    StatusQueryError {
        message: String,
        path: PathBuf,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Listing remote repositories failed: {message}")]
    RemoteListError {
        message: String,
        url: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Cloning {repository} failed: {message}")]
    CloneError {
        message: String,
        repository: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("File system operation failed: {message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Validation error: {field} - {message}")]
    ValidationError { field: String, message: String },
}

impl GitkitError {
    pub fn path_resolution_error(message: impl Into<String>, input: Option<String>) -> Self {
        Self::PathResolutionError {
            message: message.into(),
            input,
            source: None,
        }
    }

    pub fn path_resolution_error_with_source(
        message: impl Into<String>,
        input: Option<String>,
        source: std::io::Error,
    ) -> Self {
        Self::PathResolutionError {
            message: message.into(),
            input,
            source: Some(source),
        }
    }

    pub fn traversal_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: walkdir::Error,
    ) -> Self {
        Self::TraversalError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn status_query_error_with_source(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::StatusQueryError {
            message: message.into(),
            path: path.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn remote_list_error_with_source(
        message: impl Into<String>,
        url: Option<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::RemoteListError {
            message: message.into(),
            url,
            source: Some(Box::new(source)),
        }
    }

    pub fn clone_error(message: impl Into<String>, repository: impl Into<String>) -> Self {
        Self::CloneError {
            message: message.into(),
            repository: repository.into(),
            source: None,
        }
    }

    pub fn clone_error_with_source(
        message: impl Into<String>,
        repository: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::CloneError {
            message: message.into(),
            repository: repository.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn validation_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for GitkitError {
    fn from(error: std::io::Error) -> Self {
        Self::filesystem_error_with_source("File system operation failed", None, error)
    }
}

impl From<walkdir::Error> for GitkitError {
    fn from(error: walkdir::Error) -> Self {
        let path = error.path().map(|p| p.to_path_buf());
        let message = match &path {
            Some(p) => format!("cannot read {}", p.display()),
            None => "cannot read directory entry".to_string(),
        };
        Self::traversal_error_with_source(message, path, error)
    }
}

impl From<HostingError> for GitkitError {
    fn from(error: HostingError) -> Self {
        let url = error.url();
        let message = match &error {
            HostingError::UnexpectedStatus { status, .. } => {
                format!("unexpected status code: {}", status)
            }
            HostingError::Decode { .. } => "cannot decode repository list".to_string(),
            _ => error.to_string(),
        };
        Self::remote_list_error_with_source(message, url, error)
    }
}
