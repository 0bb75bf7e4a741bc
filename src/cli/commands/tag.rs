//! labskill tag - Merge extracted skills into lab manifests
//!
//! With `--lang`, every step's code (fenced blocks of its text plus its
//! solution files) is classified and the result is unioned into the step's
//! skill list. Without it, step lists are only sorted and deduplicated.
//! Labs are processed in parallel; a failing lab is reported and leaves its
//! manifest untouched.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Args;
use console::style;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::app::AppContext;
use crate::cli::commands::{batch_exit, lab_name, parse_language};
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, robot_batch};
use crate::config::Config;
use crate::error::{Result, SkillError, StructuredError};
use crate::lab::aggregate::{dedupe_skills, extend_skills};
use crate::lab::manifest::LabManifest;
use crate::lab::sources::{discover_labs, step_code};
use crate::skills::extract::extract_skills;
use crate::skills::language::LanguageKey;
use crate::skills::registry;

#[derive(Args, Debug)]
pub struct TagArgs {
    /// Language whose skills are extracted; dedupe-only when omitted
    #[arg(long, short, value_parser = parse_language)]
    pub lang: Option<LanguageKey>,

    /// Report changes without writing manifests
    #[arg(long)]
    pub dry_run: bool,

    /// Lab directories, or roots searched for lab manifests
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}

/// Outcome for one lab.
#[derive(Debug, Serialize)]
pub struct LabTagReport {
    pub lab: PathBuf,
    pub name: String,
    pub steps: usize,
    pub changed_steps: usize,
    pub written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<StructuredError>,
}

impl LabTagReport {
    fn failed(lab: &Path, err: &SkillError) -> Self {
        Self {
            lab: lab.to_path_buf(),
            name: lab.display().to_string(),
            steps: 0,
            changed_steps: 0,
            written: false,
            error: Some(err.to_structured()),
        }
    }
}

pub fn run(ctx: &AppContext, args: &TagArgs) -> Result<ExitCode> {
    let lab_config = &ctx.config.lab;
    let labs = discover_labs(&args.paths, &lab_config.manifest, lab_config.max_depth)?;

    let reports: Vec<LabTagReport> = labs
        .par_iter()
        .map(|dir| {
            tag_lab(&ctx.config, dir, args.lang, args.dry_run).unwrap_or_else(|err| {
                warn!(lab = %dir.display(), error = %err, "tagging failed");
                LabTagReport::failed(dir, &err)
            })
        })
        .collect();

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    emit_reports(ctx.format, &reports, failed)?;
    Ok(batch_exit(failed))
}

/// Tag every step of one lab, writing the manifest when something changed.
pub fn tag_lab(
    config: &Config,
    dir: &Path,
    lang: Option<LanguageKey>,
    dry_run: bool,
) -> Result<LabTagReport> {
    let manifest_path = dir.join(&config.lab.manifest);
    let mut manifest = LabManifest::load(&manifest_path)?;
    let name = lab_name(dir, &manifest);

    let target = lang.map(|key| (registry::profile(key), config.fences.aliases_for(key)));

    let mut changed_steps = 0;
    for step in &mut manifest.details.steps {
        let aggregation = match &target {
            Some((profile, aliases)) => {
                let code = step_code(dir, step, profile, aliases, config.lab.include_solutions)?;
                let extracted = extract_skills(profile.key(), &code)?;
                extend_skills(&step.skills, &extracted)
            }
            None => dedupe_skills(&step.skills),
        };
        if aggregation.changed {
            changed_steps += 1;
            step.skills = aggregation.skills;
        }
    }

    let written = changed_steps > 0 && !dry_run;
    if written {
        manifest.save(&manifest_path)?;
    }
    info!(lab = %name, changed_steps, written, "tagged lab");

    Ok(LabTagReport {
        lab: dir.to_path_buf(),
        name,
        steps: manifest.details.steps.len(),
        changed_steps,
        written,
        error: None,
    })
}

fn emit_reports(format: OutputFormat, reports: &[LabTagReport], failed: usize) -> Result<()> {
    match format {
        OutputFormat::Json => emit_json(&robot_batch(reports, reports.len() - failed, failed)),
        OutputFormat::Plain => {
            for report in reports {
                let state = match (&report.error, report.written) {
                    (Some(_), _) => "failed",
                    (None, true) => "written",
                    (None, false) if report.changed_steps > 0 => "changed",
                    (None, false) => "unchanged",
                };
                println!("{}\t{}\t{}", report.lab.display(), state, report.changed_steps);
            }
            Ok(())
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title(&format!("Tagged {} lab(s)", reports.len()));
            for report in reports {
                let line = match &report.error {
                    Some(err) => format!("{} {}: {}", style("x").red(), report.name, err.message),
                    None => format!(
                        "{} {}: {}/{} steps changed{}",
                        style("+").green(),
                        report.name,
                        report.changed_steps,
                        report.steps,
                        if report.written { "" } else { " (not written)" }
                    ),
                };
                layout.bullet(&line);
            }
            emit_human(layout);
            Ok(())
        }
    }
}
