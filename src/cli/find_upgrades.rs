//! find-upgrades command
//!
//! Resolves a manifest, queries the configured repositories for every
//! stream, and writes three artifacts: an HTML upgrade report, a manifest
//! of streams with micro upgrades applied (`diff-manifest.yaml`), and the
//! full manifest with micro-upgraded versions substituted in place
//! (`upgraded-manifest.yaml`). Nothing is written when no upgrades exist.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use futures::StreamExt;
use indexmap::{IndexMap, IndexSet};
use regex::Regex;
use tracing::info;

use crate::config::{self, FETCH_CONCURRENCY};
use crate::manifest::io::write_manifest_file;
use crate::manifest::types::{Stream, StreamKey};
use crate::report::UpgradeEntry;
use crate::report::html::ReportBuilder;
use crate::resolver::coordinate::{Coordinate, parse_repository_list};
use crate::resolver::maven::MavenRepository;
use crate::resolver::pool::assemble_pool;
use crate::resolver::source::VersionSource;
use crate::resolver::{resolve_blocklist, resolve_manifest};
use crate::version::micro::find_micro_upgrade;
use crate::version::selector::select_upgrade_ladder;

/// Generates a report showing possible upgrades for streams in the given
/// manifest by directly querying Maven repositories.
#[derive(Debug, Args)]
pub struct FindUpgradesArgs {
    /// Manifest coordinate (URL, GAV, or local path).
    pub manifest_coordinate: String,

    /// Comma separated repository URLs where component upgrades should be
    /// looked for. Format is either `URL1,URL2,...` or `ID1::URL1,ID2::URL2,...`.
    #[arg(long = "repositories", value_delimiter = ',', required = true)]
    pub repositories: Vec<String>,

    /// Comma separated repository URLs where the manifest and blocklists
    /// should be looked for, if given as GAV coordinates.
    #[arg(long = "manifest-repositories", value_delimiter = ',')]
    pub manifest_repositories: Vec<String>,

    /// Regexp that versions need to match in order to be added to the report.
    #[arg(long = "include-pattern")]
    pub include_pattern: Option<String>,

    /// Regexp to exclude versions from being added to the report.
    #[arg(long = "exclude-pattern")]
    pub exclude_pattern: Option<String>,

    /// Blocklist coordinate (URL, GAV, or local path). Can be repeated.
    #[arg(long = "blocklist-coordinate")]
    pub blocklist_coordinates: Vec<String>,

    /// Directory where the report and manifest files are written.
    #[arg(long = "output-dir", short = 'o', default_value = ".")]
    pub output_dir: PathBuf,
}

pub async fn run(args: FindUpgradesArgs) -> anyhow::Result<()> {
    let coordinate = Coordinate::parse(&args.manifest_coordinate)?;
    let manifest_repositories = parse_repository_list(&args.manifest_repositories)?;
    let repositories = parse_repository_list(&args.repositories)?;

    let include = compile_pattern(args.include_pattern.as_deref())?;
    let exclude = compile_pattern(args.exclude_pattern.as_deref())?;

    let client = config::http_client()?;
    let manifest = resolve_manifest(&client, &coordinate, &manifest_repositories)
        .await
        .with_context(|| format!("Failed to resolve manifest {}", args.manifest_coordinate))?;

    let mut blocklists = Vec::new();
    for spec in &args.blocklist_coordinates {
        let blocklist_coordinate = Coordinate::parse(spec)?;
        let blocklist = resolve_blocklist(&client, &blocklist_coordinate, &manifest_repositories)
            .await
            .with_context(|| format!("Failed to resolve blocklist {spec}"))?;
        blocklists.push(blocklist);
    }

    let sources: Arc<Vec<Arc<dyn VersionSource>>> = Arc::new(
        repositories
            .iter()
            .map(|repository| {
                Arc::new(MavenRepository::new(repository, client.clone())) as Arc<dyn VersionSource>
            })
            .collect(),
    );

    let mut results: Vec<(Stream, Vec<String>, IndexMap<String, String>)> =
        futures::stream::iter(manifest.streams.iter().cloned())
            .map(|stream| {
                let sources = Arc::clone(&sources);
                let include = include.clone();
                let exclude = exclude.clone();
                let blocked: HashSet<String> = blocklists
                    .iter()
                    .flat_map(|b| b.versions_for(&stream.group_id, &stream.artifact_id))
                    .map(str::to_owned)
                    .collect();
                async move {
                    let pool = assemble_pool(&sources, &stream).await;
                    let ladder = select_upgrade_ladder(
                        &pool.versions,
                        include.as_ref(),
                        exclude.as_ref(),
                        &blocked,
                    );
                    (stream, ladder, pool.origins)
                }
            })
            .buffer_unordered(FETCH_CONCURRENCY)
            .collect()
            .await;

    // Fan-out order is arbitrary; keep logs and outputs deterministic.
    results.sort_by(|a, b| a.0.key().cmp(&b.0.key()));

    let mut upgrades: Vec<UpgradeEntry> = Vec::new();
    let mut diff_streams: IndexSet<Stream> = IndexSet::new();
    let mut all_streams: IndexMap<StreamKey, Stream> = manifest
        .streams
        .iter()
        .map(|stream| (stream.key(), stream.clone()))
        .collect();

    for (stream, ladder, origins) in results {
        if ladder.is_empty() {
            continue;
        }
        info!("Found upgrades: {} -> {}", stream, ladder.join(", "));

        if let Some(micro) = find_micro_upgrade(&stream.version, &ladder) {
            let upgraded = Stream::new(
                stream.group_id.clone(),
                stream.artifact_id.clone(),
                micro,
            );
            diff_streams.insert(upgraded.clone());
            if let Some(existing) = all_streams.get_mut(&stream.key()) {
                *existing = upgraded;
            }
        }

        upgrades.push(UpgradeEntry::new(stream, ladder).with_origins(origins.into_iter().collect()));
    }

    if upgrades.is_empty() {
        // Don't write any files when the report would be empty.
        info!("No upgrades found.");
        return Ok(());
    }

    if let Some(html) = ReportBuilder::new()
        .with_repositories(repositories)
        .with_upgrades(upgrades)
        .build()
    {
        let report_path = args.output_dir.join(config::REPORT_FILE);
        info!("Writing report file into {}", report_path.display());
        fs::write(&report_path, html)?;
    }

    let mut diff: Vec<Stream> = diff_streams.into_iter().collect();
    diff.sort_by_key(Stream::key);
    write_manifest_file(&args.output_dir.join(config::DIFF_MANIFEST_FILE), diff)?;

    let mut all: Vec<Stream> = all_streams.into_values().collect();
    all.sort_by_key(Stream::key);
    write_manifest_file(&args.output_dir.join(config::UPGRADED_MANIFEST_FILE), all)?;

    Ok(())
}

fn compile_pattern(pattern: Option<&str>) -> anyhow::Result<Option<Regex>> {
    pattern
        .map(Regex::new)
        .transpose()
        .context("Invalid version pattern")
}
