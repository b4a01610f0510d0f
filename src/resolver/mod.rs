//! Resolution of manifests, blocklists and candidate versions
//!
//! This layer owns all I/O: locating documents by coordinate, querying
//! Maven-style repositories for available versions, and assembling the
//! descending candidate pool the selection logic consumes.
//!
//! # Modules
//!
//! - [`coordinate`]: coordinate and repository-list parsing
//! - [`source`]: the [`source::VersionSource`] trait
//! - [`maven`]: Maven repository implementation over HTTP
//! - [`pool`]: per-stream candidate pool assembly
//! - [`error`]: error types

pub mod coordinate;
pub mod error;
pub mod maven;
pub mod pool;
pub mod source;

use std::fs;

use tracing::debug;

use crate::manifest::error::ManifestError;
use crate::manifest::io;
use crate::manifest::types::{Blocklist, Manifest};
use crate::resolver::coordinate::{Coordinate, RemoteRepository};
use crate::resolver::error::ResolverError;
use crate::resolver::maven::MavenRepository;

/// Classifier suffix of manifest document artifacts.
pub const MANIFEST_CLASSIFIER: &str = "manifest";

/// Classifier suffix of blocklist document artifacts.
pub const BLOCKLIST_CLASSIFIER: &str = "blocklist";

/// Resolves a manifest document from a URL, local path, or Maven GA(V).
pub async fn resolve_manifest(
    client: &reqwest::Client,
    coordinate: &Coordinate,
    repositories: &[RemoteRepository],
) -> Result<Manifest, ResolverError> {
    let text = resolve_document(client, coordinate, repositories, MANIFEST_CLASSIFIER).await?;
    Ok(io::parse_manifest(&text)?)
}

/// Resolves a blocklist document from a URL, local path, or Maven GA(V).
pub async fn resolve_blocklist(
    client: &reqwest::Client,
    coordinate: &Coordinate,
    repositories: &[RemoteRepository],
) -> Result<Blocklist, ResolverError> {
    let text = resolve_document(client, coordinate, repositories, BLOCKLIST_CLASSIFIER).await?;
    Ok(io::parse_blocklist(&text)?)
}

async fn resolve_document(
    client: &reqwest::Client,
    coordinate: &Coordinate,
    repositories: &[RemoteRepository],
    classifier: &str,
) -> Result<String, ResolverError> {
    match coordinate {
        Coordinate::Path(path) => Ok(fs::read_to_string(path).map_err(ManifestError::from)?),
        Coordinate::Url(url) => fetch_text(client, url).await,
        Coordinate::Maven {
            group_id,
            artifact_id,
            version,
        } => {
            if repositories.is_empty() {
                return Err(ResolverError::NoRepositories(format!(
                    "{group_id}:{artifact_id}"
                )));
            }
            for repository in repositories {
                let maven = MavenRepository::new(repository, client.clone());
                match maven
                    .fetch_document(group_id, artifact_id, version.as_deref(), classifier)
                    .await
                {
                    Ok(text) => return Ok(text),
                    Err(err) => {
                        debug!(
                            "Could not resolve {}:{} from {}: {}",
                            group_id, artifact_id, repository.id, err
                        );
                    }
                }
            }
            Err(ResolverError::NotFound(format!("{group_id}:{artifact_id}")))
        }
    }
}

async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String, ResolverError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ResolverError::NotFound(url.to_string()));
    }
    if !status.is_success() {
        return Err(ResolverError::InvalidResponse(format!(
            "Unexpected status {status} for {url}"
        )));
    }
    Ok(response.text().await?)
}
