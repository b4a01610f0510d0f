use thiserror::Error;

use crate::manifest::error::ManifestError;

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No versions available for {0}")]
    NoVersions(String),

    #[error("Cannot resolve {0}: no repositories configured")]
    NoRepositories(String),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

#[derive(Debug, Error)]
pub enum CoordinateError {
    #[error("The coordinate has to be a non-empty string")]
    Blank,

    #[error("Given string is not a URL, GAV, or path: {0}")]
    Unrecognized(String),

    #[error("Invalid repository format, expected 'repo-id::repo-url': {0}")]
    InvalidRepository(String),
}
