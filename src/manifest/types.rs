//! Data records for manifests and blocklists

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Schema version written into new documents.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// A tracked component: a (group, artifact) identity pinned to a version.
///
/// Equality and hashing cover all three fields, which is what set-of-streams
/// contexts need. Merge contexts key by identity only; use [`Stream::key`]
/// for that, never an ad-hoc equality on two of the three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Stream {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// The identity-only key used for merging and lookups.
    pub fn key(&self) -> StreamKey {
        StreamKey {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// Component identity without a version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamKey {
    pub group_id: String,
    pub artifact_id: String,
}

impl fmt::Display for StreamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// A persisted manifest: an ordered collection of streams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub schema_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub streams: Vec<Stream>,
}

impl Manifest {
    /// Creates an anonymous manifest around a stream collection.
    pub fn with_streams(streams: Vec<Stream>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            name: None,
            description: None,
            streams,
        }
    }
}

/// A persisted blocklist: versions that must never be offered as upgrades.
///
/// The schema version is formatting metadata only; matching ignores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blocklist {
    pub schema_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub blocks: Vec<BlocklistEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocklistEntry {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default)]
    pub versions: Vec<String>,
}

impl Blocklist {
    /// Union of blocked versions for one component identity.
    pub fn versions_for(&self, group_id: &str, artifact_id: &str) -> HashSet<&str> {
        self.blocks
            .iter()
            .filter(|entry| entry.group_id == group_id && entry.artifact_id == artifact_id)
            .flat_map(|entry| entry.versions.iter().map(String::as_str))
            .collect()
    }
}
