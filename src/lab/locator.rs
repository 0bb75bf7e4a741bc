//! Fenced code block location.
//!
//! A block opens on a line made of optional indentation, a fence marker of
//! three or more backticks or tildes, and an info string whose first word is
//! the alias. It closes on the next fence line of the same character (or at
//! the end of the document).

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

/// A fence line: indentation, marker, rest of line.
static FENCE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*(`{3,}|~{3,})(.*)$").expect("invalid fence regex"));

fn fence(line: &str) -> Option<(char, &str)> {
    let caps = FENCE_LINE.captures(line)?;
    let marker = caps.get(1)?.as_str();
    let info = caps.get(2).map_or("", |m| m.as_str());
    marker.chars().next().map(|ch| (ch, info))
}

/// First word of an info string: up to whitespace, `:` or `{`.
fn info_word(info: &str) -> &str {
    let info = info.trim_start();
    let end = info
        .find(|ch: char| ch.is_whitespace() || ch == ':' || ch == '{')
        .unwrap_or(info.len());
    &info[..end]
}

/// Contents of every block tagged `alias`, joined with `\n`.
///
/// Returns an empty string when the alias never opens a block.
#[must_use]
pub fn blocks_for_alias(document: &str, alias: &str) -> String {
    let mut fragments: Vec<String> = Vec::new();
    let mut marker: Option<char> = None;
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        let fence = fence(line);
        match marker {
            Some(open) => {
                let closes = fence.is_some_and(|(ch, info)| ch == open && info.trim().is_empty());
                if closes {
                    fragments.push(current.join("\n"));
                    current.clear();
                    marker = None;
                } else {
                    current.push(line);
                }
            }
            None => {
                if let Some((ch, info)) = fence {
                    if info_word(info) == alias {
                        marker = Some(ch);
                    }
                }
            }
        }
    }
    if marker.is_some() {
        fragments.push(current.join("\n"));
    }
    fragments.join("\n")
}

/// Code for a list of aliases: per-alias results joined with `\n` in alias
/// order. Aliases that never appear contribute an empty string.
#[must_use]
pub fn locate_code(document: &str, aliases: &[String]) -> String {
    aliases
        .iter()
        .map(|alias| blocks_for_alias(document, alias))
        .join("\n")
}

/// Join code gathered from several sources of one step.
#[must_use]
pub fn join_sources<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts.into_iter().map(|part| part.as_ref().to_owned()).join("\n")
}
