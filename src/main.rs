use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use channel_tools::cli::{compare_manifests, find_upgrades, merge_manifests};

#[derive(Parser)]
#[command(name = "channel-tools")]
#[command(version, about = "Find component upgrades and merge version manifests")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report possible upgrades for streams of a manifest
    FindUpgrades(find_upgrades::FindUpgradesArgs),
    /// Merge two manifests, second one wins on conflicts
    MergeManifests(merge_manifests::MergeManifestsArgs),
    /// Report intersecting streams of two manifests with differing versions
    CompareManifests(compare_manifests::CompareManifestsArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Command::FindUpgrades(args) => runtime.block_on(find_upgrades::run(args)),
        Command::MergeManifests(args) => runtime.block_on(merge_manifests::run(args)),
        Command::CompareManifests(args) => runtime.block_on(compare_manifests::run(args)),
    }
}
