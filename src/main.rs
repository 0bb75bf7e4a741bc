//! labskill - skill tagging and weighting for hands-on labs
//!
//! Reads lab manifests and step content, extracts skill tags per language,
//! persists merged step skill lists and ranks a lab's skills.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use labskill::Result;
use labskill::app::AppContext;
use labskill::cli::Cli;
use labskill::cli::output::{emit_json, robot_error};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            if cli.json {
                // Structured error on stdout for batch drivers
                if emit_json(&robot_error(&e)).is_err() {
                    eprintln!("Error: {e}");
                }
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let ctx = AppContext::from_cli(cli)?;
    labskill::cli::commands::run(&ctx, &cli.command)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,labskill=info",
        1 => "info,labskill=debug",
        2 => "debug,labskill=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.json {
        // JSON logging for machine mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
