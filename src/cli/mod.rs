//! Command-line parsing for the milestone tracker.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the store/projection code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "etapp",
    version,
    about = "Swedish environmental milestone tracker (SCB-backed)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Seed a milestone store from the built-in catalog.
    Init(InitArgs),
    /// Fetch SCB sources and recompute linked milestone progress.
    Sync(SyncArgs),
    /// List milestones with progress, expected percent, and overview stats.
    List(ListArgs),
    /// Show one milestone in full, with its actual-vs-expected chart.
    Show(ShowArgs),
    /// Decode a PX file and print the series it carries.
    Decode(DecodeArgs),
}

#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Re-seed even if a store already exists (overwrites progress).
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Parser)]
pub struct SyncArgs {
    /// Sync a single source by id (active or not) instead of all active sources.
    #[arg(value_name = "SOURCE_ID")]
    pub source_id: Option<u32>,
}

#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Only list milestones whose category contains this text (case-insensitive).
    #[arg(short = 'c', long)]
    pub category: Option<String>,
}

#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Milestone id (1-20 in the built-in catalog).
    #[arg(value_name = "ID")]
    pub id: u32,

    /// Render the actual-vs-expected ASCII chart (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the chart.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[derive(Debug, Parser)]
pub struct DecodeArgs {
    /// PX file to decode.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}
