//! labskill languages - List language profiles

use clap::Args;
use itertools::Itertools;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_formatted};
use crate::error::Result;
use crate::skills::language::LanguageKey;
use crate::skills::registry::{ExtractorKind, profiles};

#[derive(Args, Debug)]
pub struct LanguagesArgs {
    /// Include every tag each profile can emit
    #[arg(long)]
    pub vocabulary: bool,
}

#[derive(Debug, Serialize)]
pub struct LanguageEntry {
    pub key: LanguageKey,
    pub kind: ExtractorKind,
    pub fence_aliases: Vec<String>,
    pub extensions: Vec<&'static str>,
    pub file_names: Vec<&'static str>,
    pub skill_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vec<String>>,
}

pub fn run(ctx: &AppContext, args: &LanguagesArgs) -> Result<()> {
    let entries: Vec<LanguageEntry> = profiles()
        .map(|profile| {
            let vocabulary = profile.vocabulary();
            LanguageEntry {
                key: profile.key(),
                kind: profile.kind(),
                fence_aliases: ctx.config.fences.aliases_for(profile.key()),
                extensions: profile.extensions().to_vec(),
                file_names: profile.file_names().to_vec(),
                skill_count: vocabulary.len(),
                vocabulary: args.vocabulary.then(|| vocabulary.into_iter().collect()),
            }
        })
        .collect();

    emit_formatted(entries, ctx.format, render_human, render_plain)
}

fn render_human(entries: &Vec<LanguageEntry>) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title(&format!("{} languages", entries.len()));
    for entry in entries {
        layout.section(entry.key.as_str());
        layout.kv("Extractor", &entry.kind.to_string());
        layout.kv("Fence aliases", &entry.fence_aliases.join(", "));
        let mut files: Vec<String> = entry.extensions.iter().map(|ext| format!(".{ext}")).collect();
        files.extend(entry.file_names.iter().map(ToString::to_string));
        layout.kv("Solution files", &files.join(", "));
        layout.kv("Skills", &entry.skill_count.to_string());
        if let Some(vocabulary) = &entry.vocabulary {
            for skill in vocabulary {
                layout.bullet(skill);
            }
        }
        layout.blank();
    }
    layout
}

fn render_plain(entries: &Vec<LanguageEntry>) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}\t{}\t{}\t{}",
                entry.key,
                entry.kind,
                entry.fence_aliases.join(","),
                entry.skill_count
            )
        })
        .join("\n")
}
