//! labskill remove - Strip a skill namespace from lab manifests

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Args;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::app::AppContext;
use crate::cli::commands::{batch_exit, lab_name};
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, robot_batch};
use crate::config::Config;
use crate::error::{Result, StructuredError};
use crate::lab::manifest::LabManifest;
use crate::lab::removal::remove_namespace;
use crate::lab::sources::discover_labs;
use crate::skills::tag;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Namespace to remove (e.g. `python` removes every `python/*` tag)
    #[arg(long, short)]
    pub prefix: String,

    /// Report changes without writing manifests
    #[arg(long)]
    pub dry_run: bool,

    /// Lab directories, or roots searched for lab manifests
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct LabRemoveReport {
    pub lab: PathBuf,
    pub name: String,
    pub removed: bool,
    pub written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<StructuredError>,
}

pub fn run(ctx: &AppContext, args: &RemoveArgs) -> Result<ExitCode> {
    let prefix = tag::normalize_prefix(&args.prefix);
    let lab_config = &ctx.config.lab;
    let labs = discover_labs(&args.paths, &lab_config.manifest, lab_config.max_depth)?;

    let reports: Vec<LabRemoveReport> = labs
        .par_iter()
        .map(|dir| {
            remove_from_lab(&ctx.config, dir, prefix, args.dry_run).unwrap_or_else(|err| {
                warn!(lab = %dir.display(), error = %err, "removal failed");
                LabRemoveReport {
                    lab: dir.clone(),
                    name: dir.display().to_string(),
                    removed: false,
                    written: false,
                    error: Some(err.to_structured()),
                }
            })
        })
        .collect();

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    match ctx.format {
        OutputFormat::Json => emit_json(&robot_batch(&reports, reports.len() - failed, failed))?,
        OutputFormat::Plain => {
            for report in &reports {
                let state = match (&report.error, report.removed) {
                    (Some(_), _) => "failed",
                    (None, true) => "removed",
                    (None, false) => "unchanged",
                };
                println!("{}\t{state}", report.lab.display());
            }
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title(&format!("Removed `{prefix}/*` from {} lab(s)", reports.len()));
            for report in &reports {
                let line = match &report.error {
                    Some(err) => format!("{}: {}", report.name, err.message),
                    None if report.removed && report.written => format!("{}: removed", report.name),
                    None if report.removed => format!("{}: would remove", report.name),
                    None => format!("{}: nothing to remove", report.name),
                };
                layout.bullet(&line);
            }
            emit_human(layout);
        }
    }
    Ok(batch_exit(failed))
}

/// Remove `prefix` tags from every step of one lab.
pub fn remove_from_lab(config: &Config, dir: &Path, prefix: &str, dry_run: bool) -> Result<LabRemoveReport> {
    let manifest_path = dir.join(&config.lab.manifest);
    let mut manifest = LabManifest::load(&manifest_path)?;
    let name = lab_name(dir, &manifest);

    let mut steps = manifest.step_skills();
    let removed = remove_namespace(&mut steps, prefix);
    let written = removed && !dry_run;
    if written {
        manifest.set_step_skills(steps)?;
        manifest.save(&manifest_path)?;
    }
    info!(lab = %name, prefix, removed, written, "removed namespace");

    Ok(LabRemoveReport {
        lab: dir.to_path_buf(),
        name,
        removed,
        written,
        error: None,
    })
}
