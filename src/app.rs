//! Per-invocation application context.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub format: OutputFormat,
    pub quiet: bool,
    /// Directory the project config was resolved against.
    pub cwd: PathBuf,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &cwd)?;
        let format = OutputFormat::from_args(cli.json, cli.plain, config.output.format);
        if !format.use_colors() {
            console::set_colors_enabled(false);
        }
        debug!(?format, manifest = %config.lab.manifest, "loaded config");
        Ok(Self::new(config, format, cli.quiet, cwd))
    }

    #[must_use]
    pub const fn new(config: Config, format: OutputFormat, quiet: bool, cwd: PathBuf) -> Self {
        Self {
            config,
            format,
            quiet,
            cwd,
        }
    }
}
