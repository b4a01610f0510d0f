//! CLI command implementations
//!
//! Each command is a clap `Args` struct plus an async `run` entry point;
//! `main` owns argument parsing, logging setup and the runtime.

pub mod compare_manifests;
pub mod find_upgrades;
pub mod merge_manifests;
