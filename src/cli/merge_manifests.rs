//! merge-manifests command

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::config;
use crate::manifest::io::write_manifest_file;
use crate::manifest::merge::merge_streams;
use crate::resolver::coordinate::{Coordinate, parse_repository_list};
use crate::resolver::resolve_manifest;

/// Merges two manifests. The second manifest's streams always override the
/// first manifest's streams.
#[derive(Debug, Args)]
pub struct MergeManifestsArgs {
    /// First manifest coordinate (URL, GAV, or local path).
    pub first_coordinate: String,

    /// Second manifest coordinate; its streams win on conflict.
    pub second_coordinate: String,

    /// Comma separated repository URLs where the manifests should be looked
    /// for, if they are given as GAV coordinates.
    #[arg(long = "manifest-repositories", value_delimiter = ',')]
    pub manifest_repositories: Vec<String>,

    /// Manifest file to be written.
    #[arg(long = "output-file", short = 'o', default_value = "manifest.yaml")]
    pub output_file: PathBuf,
}

pub async fn run(args: MergeManifestsArgs) -> anyhow::Result<()> {
    let first = Coordinate::parse(&args.first_coordinate)?;
    let second = Coordinate::parse(&args.second_coordinate)?;
    let repositories = parse_repository_list(&args.manifest_repositories)?;
    let client = config::http_client()?;

    let first_manifest = resolve_manifest(&client, &first, &repositories)
        .await
        .with_context(|| format!("Failed to resolve manifest {}", args.first_coordinate))?;
    let second_manifest = resolve_manifest(&client, &second, &repositories)
        .await
        .with_context(|| format!("Failed to resolve manifest {}", args.second_coordinate))?;

    let merged = merge_streams(&first_manifest.streams, &second_manifest.streams);
    write_manifest_file(&args.output_file, merged)?;

    Ok(())
}
