//! Reading and writing manifest and blocklist documents

use std::fs;
use std::path::Path;

use tracing::info;

use crate::manifest::error::ManifestError;
use crate::manifest::types::{Blocklist, Manifest, Stream};

pub fn parse_manifest(yaml: &str) -> Result<Manifest, ManifestError> {
    Ok(serde_yaml::from_str(yaml)?)
}

pub fn parse_blocklist(yaml: &str) -> Result<Blocklist, ManifestError> {
    Ok(serde_yaml::from_str(yaml)?)
}

pub fn read_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    parse_manifest(&fs::read_to_string(path)?)
}

pub fn read_blocklist(path: &Path) -> Result<Blocklist, ManifestError> {
    parse_blocklist(&fs::read_to_string(path)?)
}

/// Writes an anonymous manifest holding `streams`, in the given order.
///
/// Callers that produce set-like collections are expected to sort before
/// writing; the merge command relies on its own ordering being preserved.
pub fn write_manifest_file(path: &Path, streams: Vec<Stream>) -> Result<(), ManifestError> {
    info!("Writing manifest into {}", path.display());
    let manifest = Manifest::with_streams(streams);
    fs::write(path, serde_yaml::to_string(&manifest)?)?;
    Ok(())
}
