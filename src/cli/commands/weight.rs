//! labskill weight - Rank a lab's skill universe

use std::path::PathBuf;

use clap::Args;
use itertools::Itertools;
use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::cli::commands::lab_name;
use crate::cli::output::{HumanLayout, emit_formatted};
use crate::error::{Result, SkillError};
use crate::lab::manifest::LabManifest;
use crate::lab::weight::{SkillWeights, calculate_lab_weights};

#[derive(Args, Debug)]
pub struct WeightArgs {
    /// Skill of interest (repeatable); defaults to the manifest's `skills` list
    #[arg(long = "skill", short = 's', value_name = "TAG")]
    pub skills: Vec<String>,

    /// Lab directory
    #[arg(value_name = "LAB_DIR")]
    pub lab: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct WeightReport {
    pub lab: String,
    pub steps: usize,
    pub weights: SkillWeights,
}

pub fn run(ctx: &AppContext, args: &WeightArgs) -> Result<()> {
    let manifest = LabManifest::load(&args.lab.join(&ctx.config.lab.manifest))?;
    let name = lab_name(&args.lab, &manifest);

    let universe = if args.skills.is_empty() {
        manifest.skills.clone().unwrap_or_default()
    } else {
        args.skills.clone()
    };
    if universe.is_empty() {
        return Err(SkillError::EmptyUniverse(name));
    }

    let steps = manifest.step_skills();
    let weights = calculate_lab_weights(&name, &universe, &steps)?;
    info!(lab = %name, skills = weights.len(), "weighted lab");

    let report = WeightReport {
        lab: name,
        steps: steps.len(),
        weights,
    };
    emit_formatted(report, ctx.format, render_human, render_plain)
}

fn render_human(report: &WeightReport) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title(&format!("Skill weights for {}", report.lab));
    layout.kv("Steps", &report.steps.to_string());
    layout.blank();
    for entry in &report.weights {
        layout.kv(&entry.skill, &format!("{:.3}", entry.weight));
    }
    layout
}

fn render_plain(report: &WeightReport) -> String {
    report
        .weights
        .iter()
        .map(|entry| format!("{}\t{}", entry.skill, entry.weight))
        .join("\n")
}
