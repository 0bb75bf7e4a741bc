//! labskill extract - Extract skill tags from one source
//!
//! Reads a file (or stdin) and prints the skills the language profile finds.
//! With `--fenced` the input is treated as markdown and only code blocks
//! tagged with the profile's fence aliases are classified.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use itertools::Itertools;
use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::cli::commands::parse_language;
use crate::cli::output::{HumanLayout, emit_formatted};
use crate::error::Result;
use crate::lab::locator::locate_code;
use crate::skills::extract::extract_skills;
use crate::skills::language::LanguageKey;
use crate::skills::tag::SkillSet;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Language key (python, js, go, sql, ...)
    #[arg(long, short, value_parser = parse_language)]
    pub lang: LanguageKey,

    /// Treat the input as markdown and classify only matching fenced blocks
    #[arg(long)]
    pub fenced: bool,

    /// Source file; reads stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct ExtractReport {
    pub language: LanguageKey,
    pub source: String,
    pub skills: SkillSet,
}

pub fn run(ctx: &AppContext, args: &ExtractArgs) -> Result<()> {
    let (source, input) = read_input(args.file.as_ref())?;

    let code = if args.fenced {
        locate_code(&input, &ctx.config.fences.aliases_for(args.lang))
    } else {
        input
    };

    let skills = extract_skills(args.lang, &code)?;
    info!(language = %args.lang, %source, count = skills.len(), "extracted skills");

    let report = ExtractReport {
        language: args.lang,
        source,
        skills,
    };
    emit_formatted(report, ctx.format, render_human, render_plain)
}

fn read_input(file: Option<&PathBuf>) -> Result<(String, String)> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            let text = std::fs::read_to_string(path)?;
            Ok((path.display().to_string(), text))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(("<stdin>".to_string(), text))
        }
    }
}

fn render_human(report: &ExtractReport) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title(&format!("Skills in {}", report.source));
    layout.kv("Language", report.language.as_str());
    layout.kv("Count", &report.skills.len().to_string());
    if !report.skills.is_empty() {
        layout.blank();
        for skill in &report.skills {
            layout.bullet(skill);
        }
    }
    layout
}

fn render_plain(report: &ExtractReport) -> String {
    report.skills.iter().join("\n")
}
