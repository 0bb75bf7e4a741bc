//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// labskill - Extract, merge and weight programming skill tags in lab content
#[derive(Parser, Debug)]
#[command(name = "labskill")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit JSON responses on stdout for scripts and batch drivers
    #[arg(long, short = 'm', visible_alias = "machine", global = true)]
    pub json: bool,

    /// Force plain output (no colors, one record per line)
    #[arg(long, global = true, conflicts_with = "json")]
    pub plain: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logging except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/labskill/config.toml, then ./labskill.toml)
    #[arg(long, global = true, env = "LABSKILL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract skill tags from one source file or stdin
    Extract(commands::extract::ExtractArgs),

    /// Merge extracted skills into the step lists of lab manifests
    Tag(commands::tag::TagArgs),

    /// Rank a lab's skill universe by position and proportion weight
    Weight(commands::weight::WeightArgs),

    /// Remove every skill under a namespace from lab manifests
    Remove(commands::remove::RemoveArgs),

    /// List supported languages with their fence aliases and file types
    Languages(commands::languages::LanguagesArgs),
}
