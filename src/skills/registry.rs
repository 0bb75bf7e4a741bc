//! Language profile registry.
//!
//! One [`LanguageProfile`] per [`LanguageKey`], built once on first use and
//! never mutated. A profile bundles the extractor with the fence aliases used
//! to find its code in markdown and the solution-file names it reads raw.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use serde::Serialize;

use crate::skills::ast::PythonAstExtractor;
use crate::skills::extract::SkillExtractor;
use crate::skills::language::LanguageKey;
use crate::skills::patterns::{PatternExtractor, rule_table};
use crate::skills::tag::SkillSet;

/// How a profile classifies text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    Ast,
    Pattern,
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ast => f.write_str("ast"),
            Self::Pattern => f.write_str("pattern"),
        }
    }
}

enum Extractor {
    Ast(PythonAstExtractor),
    Pattern(PatternExtractor),
}

/// Static description of one language.
pub struct LanguageProfile {
    key: LanguageKey,
    extractor: Extractor,
    fence_aliases: &'static [&'static str],
    extensions: &'static [&'static str],
    file_names: &'static [&'static str],
}

impl fmt::Debug for LanguageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("key", &self.key)
            .field("kind", &self.kind())
            .field("fence_aliases", &self.fence_aliases)
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}

impl LanguageProfile {
    #[must_use]
    pub const fn key(&self) -> LanguageKey {
        self.key
    }

    #[must_use]
    pub const fn kind(&self) -> ExtractorKind {
        match self.extractor {
            Extractor::Ast(_) => ExtractorKind::Ast,
            Extractor::Pattern(_) => ExtractorKind::Pattern,
        }
    }

    #[must_use]
    pub fn extractor(&self) -> &dyn SkillExtractor {
        match &self.extractor {
            Extractor::Ast(ast) => ast,
            Extractor::Pattern(pattern) => pattern,
        }
    }

    /// Default fence info strings that mark this language's code blocks.
    #[must_use]
    pub const fn fence_aliases(&self) -> &'static [&'static str] {
        self.fence_aliases
    }

    /// Solution-file extensions (without the dot) read verbatim.
    #[must_use]
    pub const fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    /// Exact solution-file names read verbatim (e.g. `Dockerfile`).
    #[must_use]
    pub const fn file_names(&self) -> &'static [&'static str] {
        self.file_names
    }

    /// Whether a solution file belongs to this profile and is read raw.
    #[must_use]
    pub fn accepts_source(&self, path: &Path) -> bool {
        let by_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.file_names.contains(&name));
        let by_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            });
        by_name || by_extension
    }

    /// Every tag the profile can emit.
    #[must_use]
    pub fn vocabulary(&self) -> SkillSet {
        match &self.extractor {
            Extractor::Ast(_) => PythonAstExtractor::vocabulary(),
            Extractor::Pattern(pattern) => pattern.vocabulary(),
        }
    }
}

/// Fence aliases, solution extensions and exact file names per language.
type SourceTable = (
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
);

const fn sources(key: LanguageKey) -> SourceTable {
    match key {
        LanguageKey::Python => (&["py", "python", "bash", "shell", "python3"], &["py"], &[]),
        LanguageKey::Pandas
        | LanguageKey::Numpy
        | LanguageKey::Matplotlib
        | LanguageKey::Sklearn
        | LanguageKey::Django
        | LanguageKey::Flask
        | LanguageKey::Pygame
        | LanguageKey::Tkinter => (&["py", "python", "python3"], &["py", "ipynb"], &[]),
        LanguageKey::Js => (&["js", "javascript", "node"], &["js", "mjs", "cjs"], &[]),
        LanguageKey::Typescript => (&["ts", "typescript", "tsx"], &["ts", "tsx"], &[]),
        LanguageKey::React => (&["jsx", "tsx", "js", "javascript"], &["jsx", "tsx", "js"], &[]),
        LanguageKey::Jquery => (&["js", "javascript", "html"], &["js", "html"], &[]),
        LanguageKey::Html => (&["html", "htm"], &["html", "htm"], &[]),
        LanguageKey::Css => (&["css", "scss"], &["css", "scss"], &[]),
        LanguageKey::C => (&["c", "h"], &["c", "h"], &[]),
        LanguageKey::Cpp => (&["cpp", "c++", "cc", "cxx", "hpp"], &["cpp", "cc", "cxx", "hpp", "hh"], &[]),
        LanguageKey::Java => (&["java"], &["java"], &[]),
        LanguageKey::Go => (&["go", "golang"], &["go"], &[]),
        LanguageKey::Rust => (&["rust", "rs"], &["rs"], &[]),
        LanguageKey::Sql => (&["sql"], &["sql"], &[]),
        LanguageKey::Mysql => (&["sql", "mysql"], &["sql"], &[]),
        LanguageKey::Shell | LanguageKey::Linux => {
            (&["bash", "shell", "sh", "zsh"], &["sh", "bash"], &[])
        }
        LanguageKey::Git => (&["bash", "shell", "sh", "git"], &["sh"], &[]),
        LanguageKey::Docker => (
            &["dockerfile", "docker", "bash", "shell"],
            &["dockerfile"],
            &["Dockerfile", "docker-compose.yml", "docker-compose.yaml"],
        ),
    }
}

fn build(key: LanguageKey) -> LanguageProfile {
    let extractor = match rule_table(key) {
        Some(table) => Extractor::Pattern(PatternExtractor::compile(key, table)),
        None => Extractor::Ast(PythonAstExtractor),
    };
    let (fence_aliases, extensions, file_names) = sources(key);
    LanguageProfile {
        key,
        extractor,
        fence_aliases,
        extensions,
        file_names,
    }
}

static REGISTRY: LazyLock<HashMap<LanguageKey, LanguageProfile>> = LazyLock::new(|| {
    LanguageKey::ALL
        .into_iter()
        .map(|key| (key, build(key)))
        .collect()
});

/// Profile for `key`. Every key has one.
#[must_use]
pub fn profile(key: LanguageKey) -> &'static LanguageProfile {
    &REGISTRY[&key]
}

/// All profiles in [`LanguageKey::ALL`] order.
pub fn profiles() -> impl Iterator<Item = &'static LanguageProfile> {
    LanguageKey::ALL.into_iter().map(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::tag;

    #[test]
    fn every_key_has_a_profile() {
        assert_eq!(profiles().count(), LanguageKey::ALL.len());
        for key in LanguageKey::ALL {
            assert_eq!(profile(key).key(), key);
        }
    }

    #[test]
    fn only_python_is_ast() {
        let ast: Vec<_> = profiles()
            .filter(|p| p.kind() == ExtractorKind::Ast)
            .map(LanguageProfile::key)
            .collect();
        assert_eq!(ast, vec![LanguageKey::Python]);
    }

    #[test]
    fn vocabularies_are_namespaced() {
        for profile in profiles() {
            let vocabulary = profile.vocabulary();
            assert!(!vocabulary.is_empty(), "{} has no vocabulary", profile.key());
            for skill in vocabulary {
                assert!(tag::is_well_formed(&skill));
                assert_eq!(tag::namespace(&skill), Some(profile.key().namespace()));
            }
        }
    }

    #[test]
    fn every_profile_has_aliases() {
        for profile in profiles() {
            assert!(!profile.fence_aliases().is_empty());
        }
    }

    #[test]
    fn accepts_sources_by_extension_and_name() {
        let docker = profile(LanguageKey::Docker);
        assert!(docker.accepts_source(Path::new("solutions/Dockerfile")));
        assert!(!docker.accepts_source(Path::new("solutions/app.py")));

        let python = profile(LanguageKey::Python);
        assert!(python.accepts_source(Path::new("main.PY")));
        assert!(!python.accepts_source(Path::new("notes.md")));
    }
}
