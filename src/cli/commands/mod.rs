//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use std::path::Path;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;
use crate::lab::manifest::LabManifest;
use crate::skills::language::LanguageKey;

pub mod extract;
pub mod languages;
pub mod remove;
pub mod tag;
pub mod weight;

/// Dispatch a command to its handler.
///
/// Batch commands report per-lab failures themselves and signal them through
/// a failing exit code rather than an error.
pub fn run(ctx: &AppContext, command: &Commands) -> Result<ExitCode> {
    match command {
        Commands::Extract(args) => extract::run(ctx, args).map(|()| ExitCode::SUCCESS),
        Commands::Tag(args) => tag::run(ctx, args),
        Commands::Weight(args) => weight::run(ctx, args).map(|()| ExitCode::SUCCESS),
        Commands::Remove(args) => remove::run(ctx, args),
        Commands::Languages(args) => languages::run(ctx, args).map(|()| ExitCode::SUCCESS),
    }
}

/// Clap value parser for language keys.
pub(crate) fn parse_language(value: &str) -> std::result::Result<LanguageKey, String> {
    value.parse::<LanguageKey>().map_err(|err| err.to_string())
}

/// Display name of a lab: its manifest title, else its directory name.
pub(crate) fn lab_name(dir: &Path, manifest: &LabManifest) -> String {
    manifest.title.clone().unwrap_or_else(|| {
        dir.file_name()
            .map_or_else(|| dir.display().to_string(), |name| name.to_string_lossy().into_owned())
    })
}

/// Exit code for a batch with `failed` failing labs.
pub(crate) fn batch_exit(failed: usize) -> ExitCode {
    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
