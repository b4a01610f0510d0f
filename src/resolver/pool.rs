//! Candidate pool assembly
//!
//! For each stream the configured repositories are queried and their version
//! lists combined into one pool: only versions strictly newer than the
//! pinned baseline, sorted strictly descending, each attributed to the first
//! repository that listed it. The descending order is the precondition the
//! upgrade selector builds on.

use std::cmp::Ordering;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::manifest::types::Stream;
use crate::resolver::source::VersionSource;
use crate::version::order;

/// Upgrade candidates for one stream.
#[derive(Debug, Default)]
pub struct CandidatePool {
    /// Candidate versions, strictly descending, deduplicated.
    pub versions: Vec<String>,
    /// Version to id of the repository that serves it.
    pub origins: IndexMap<String, String>,
}

/// Queries every source and assembles the stream's candidate pool.
///
/// Individual source failures are logged and skipped; a stream with no
/// reachable versions simply gets an empty pool.
pub async fn assemble_pool(sources: &[Arc<dyn VersionSource>], stream: &Stream) -> CandidatePool {
    let mut origins: IndexMap<String, String> = IndexMap::new();

    for source in sources {
        match source
            .fetch_all_versions(&stream.group_id, &stream.artifact_id)
            .await
        {
            Ok(versions) => {
                for version in versions {
                    if order::compare(&version, &stream.version) == Ordering::Greater {
                        origins
                            .entry(version)
                            .or_insert_with(|| source.id().to_string());
                    }
                }
            }
            Err(err) => {
                debug!("Version resolution failed for {} in {}: {}", stream, source.id(), err);
            }
        }
    }

    let mut versions: Vec<String> = origins.keys().cloned().collect();
    versions.sort_by(|a, b| order::compare(b, a));

    CandidatePool { versions, origins }
}
