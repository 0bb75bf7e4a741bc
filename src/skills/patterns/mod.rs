//! Pattern-based skill extraction.
//!
//! Every language except Python is classified heuristically: a profile is an
//! unordered list of independent rules, each a search over the raw text.
//! Rules never disable one another and malformed input never errors; a
//! snippet may trigger any subset of rules, including none.
//!
//! Rule tables are written as `const` slices of [`RuleSpec`] (pattern source
//! plus skill ids) and compiled once into [`PatternExtractor`]s by the
//! registry.
//!
//! Brace rules only look at groups that hold a comma. A single-entry literal
//! such as `{"a": 1}` never fires either side of the pair, so a profile that
//! must catch it needs a regex rule as well (Go's `map[` rule, for example).

mod ops;
mod python_libs;
mod queries;
mod systems;
mod web;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::skills::extract::SkillExtractor;
use crate::skills::language::LanguageKey;
use crate::skills::tag::SkillSet;

/// Matches one innermost `{...}` group and captures its content.
static BRACE_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").expect("invalid brace group regex"));

/// Source form of a matcher, as written in the rule tables.
#[derive(Debug, Clone, Copy)]
pub enum PatternSpec {
    /// Regex source searched anywhere in the text.
    Regex(&'static str),
    /// Content of an innermost brace group holding a comma-separated list,
    /// with (`colon: true`) or without (`colon: false`) a colon in it.
    BraceContent { colon: bool },
}

/// One uncompiled rule: a pattern and the skill ids it produces.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub pattern: PatternSpec,
    pub skills: &'static [&'static str],
}

/// Shorthand for a regex rule in the tables.
pub(crate) const fn rule(pattern: &'static str, skills: &'static [&'static str]) -> RuleSpec {
    RuleSpec {
        pattern: PatternSpec::Regex(pattern),
        skills,
    }
}

/// Shorthand for a brace-content rule in the tables. Only comma-separated
/// groups count; block bodies like `{ run() }` are skipped.
pub(crate) const fn braces(colon: bool, skills: &'static [&'static str]) -> RuleSpec {
    RuleSpec {
        pattern: PatternSpec::BraceContent { colon },
        skills,
    }
}

/// Compiled matcher.
#[derive(Debug, Clone)]
pub enum Matcher {
    Regex(Regex),
    BraceContent { colon: bool },
}

impl Matcher {
    /// Whether the matcher fires anywhere in `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Regex(regex) => regex.is_match(text),
            Self::BraceContent { colon } => BRACE_GROUP
                .captures_iter(text)
                .filter_map(|cap| cap.get(1))
                .map(|m| m.as_str())
                .filter(|content| content.contains(','))
                .any(|content| content.contains(':') == *colon),
        }
    }
}

/// Compiled rule with fully namespaced tags.
#[derive(Debug, Clone)]
pub struct Rule {
    pub matcher: Matcher,
    pub skills: Vec<String>,
}

/// Heuristic extractor for one language.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    language: LanguageKey,
    rules: Vec<Rule>,
}

impl PatternExtractor {
    /// Compile a rule table. Tag ids are prefixed with the language namespace.
    ///
    /// # Panics
    ///
    /// Panics if a table regex is invalid. Tables are compile-time constants,
    /// so this is a programming error covered by the registry tests.
    #[must_use]
    pub fn compile(language: LanguageKey, specs: &[RuleSpec]) -> Self {
        let namespace = language.namespace();
        let rules = specs
            .iter()
            .map(|spec| {
                let matcher = match spec.pattern {
                    PatternSpec::Regex(source) => Matcher::Regex(
                        Regex::new(source).unwrap_or_else(|err| {
                            panic!("invalid {namespace} rule regex {source:?}: {err}")
                        }),
                    ),
                    PatternSpec::BraceContent { colon } => Matcher::BraceContent { colon },
                };
                let skills = spec
                    .skills
                    .iter()
                    .map(|id| format!("{namespace}/{id}"))
                    .collect();
                Rule { matcher, skills }
            })
            .collect();
        Self { language, rules }
    }

    /// Language this extractor classifies.
    #[must_use]
    pub const fn language(&self) -> LanguageKey {
        self.language
    }

    /// Compiled rules in table order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Every tag this profile can emit.
    #[must_use]
    pub fn vocabulary(&self) -> SkillSet {
        self.rules
            .iter()
            .flat_map(|rule| rule.skills.iter().cloned())
            .collect()
    }

    /// Evaluate every rule against the full text.
    #[must_use]
    pub fn scan(&self, text: &str) -> SkillSet {
        let mut skills = SkillSet::new();
        for rule in &self.rules {
            if rule.matcher.is_match(text) {
                skills.extend(rule.skills.iter().cloned());
            }
        }
        skills
    }
}

impl SkillExtractor for PatternExtractor {
    fn language(&self) -> LanguageKey {
        self.language
    }

    fn extract(&self, text: &str) -> Result<SkillSet> {
        Ok(self.scan(text))
    }
}

/// Rule table for a pattern-based language; `None` for the AST language.
#[must_use]
pub fn rule_table(language: LanguageKey) -> Option<&'static [RuleSpec]> {
    let table = match language {
        LanguageKey::Python => return None,
        LanguageKey::Pandas => python_libs::PANDAS,
        LanguageKey::Numpy => python_libs::NUMPY,
        LanguageKey::Matplotlib => python_libs::MATPLOTLIB,
        LanguageKey::Sklearn => python_libs::SKLEARN,
        LanguageKey::Django => python_libs::DJANGO,
        LanguageKey::Flask => python_libs::FLASK,
        LanguageKey::Pygame => python_libs::PYGAME,
        LanguageKey::Tkinter => python_libs::TKINTER,
        LanguageKey::Js => web::JS,
        LanguageKey::Typescript => web::TYPESCRIPT,
        LanguageKey::React => web::REACT,
        LanguageKey::Jquery => web::JQUERY,
        LanguageKey::Html => web::HTML,
        LanguageKey::Css => web::CSS,
        LanguageKey::C => systems::C,
        LanguageKey::Cpp => systems::CPP,
        LanguageKey::Java => systems::JAVA,
        LanguageKey::Go => systems::GO,
        LanguageKey::Rust => systems::RUST,
        LanguageKey::Sql => queries::SQL,
        LanguageKey::Mysql => queries::MYSQL,
        LanguageKey::Shell => ops::SHELL,
        LanguageKey::Linux => ops::LINUX,
        LanguageKey::Git => ops::GIT,
        LanguageKey::Docker => ops::DOCKER,
    };
    Some(table)
}
