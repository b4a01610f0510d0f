//! compare-manifests command

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use indexmap::IndexMap;
use tracing::info;

use crate::config;
use crate::manifest::types::{Stream, StreamKey};
use crate::report::UpgradeEntry;
use crate::report::html::ReportBuilder;
use crate::resolver::coordinate::{Coordinate, parse_repository_list};
use crate::resolver::resolve_manifest;

/// Generates a report identifying intersecting streams of two manifests,
/// highlighting streams where the pinned versions differ.
#[derive(Debug, Args)]
pub struct CompareManifestsArgs {
    /// Base manifest coordinate (URL, GAV, or local path).
    pub base_coordinate: String,

    /// Comparison manifest coordinate.
    pub target_coordinate: String,

    /// Comma separated repository URLs where the manifests should be looked
    /// for, if they are given as GAV coordinates.
    #[arg(long = "manifest-repositories", value_delimiter = ',')]
    pub manifest_repositories: Vec<String>,

    /// Report file to be written.
    #[arg(long = "output-file", short = 'o', default_value = "report.html")]
    pub output_file: PathBuf,
}

pub async fn run(args: CompareManifestsArgs) -> anyhow::Result<()> {
    let base = Coordinate::parse(&args.base_coordinate)?;
    let target = Coordinate::parse(&args.target_coordinate)?;
    let repositories = parse_repository_list(&args.manifest_repositories)?;
    let client = config::http_client()?;

    let base_manifest = resolve_manifest(&client, &base, &repositories)
        .await
        .with_context(|| format!("Failed to resolve manifest {}", args.base_coordinate))?;
    let target_manifest = resolve_manifest(&client, &target, &repositories)
        .await
        .with_context(|| format!("Failed to resolve manifest {}", args.target_coordinate))?;

    let target_by_key: IndexMap<StreamKey, &Stream> = target_manifest
        .streams
        .iter()
        .map(|stream| (stream.key(), stream))
        .collect();

    let mut diff: Vec<UpgradeEntry> = Vec::new();
    for stream in &base_manifest.streams {
        if let Some(target_stream) = target_by_key.get(&stream.key()) {
            if target_stream.version != stream.version {
                info!("{} -> {}", stream, target_stream.version);
                diff.push(UpgradeEntry::new(
                    stream.clone(),
                    vec![target_stream.version.clone()],
                ));
            }
        }
    }

    match ReportBuilder::new().with_upgrades(diff).build() {
        Some(html) => {
            info!("Writing report file into {}", args.output_file.display());
            fs::write(&args.output_file, html)?;
        }
        None => info!("No differing streams found."),
    }

    Ok(())
}
