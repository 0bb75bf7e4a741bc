//! Python skill extraction over a tree-sitter syntax tree.
//!
//! The source is parsed strictly: any error or missing node fails the whole
//! extraction with [`SkillError::Parse`] and no partial result. A valid tree
//! is walked once; every named node whose kind maps onto [`NodeKind`] is
//! handed to the predicate registered for that kind.

pub mod tables;

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;
use tree_sitter::{Node, Parser as TsParser, Tree};

use crate::error::{Result, SkillError};
use crate::skills::extract::SkillExtractor;
use crate::skills::language::LanguageKey;
use crate::skills::tag::SkillSet;

use tables::{
    BUILTINS, COLLECTION_CONSTRUCTORS, IMPORT_TAGS, ITERATOR_BUILTINS, READ_METHODS,
    STANDARD_LIBRARY, TYPE_CONVERSIONS, WRITE_METHODS,
};

const NAMESPACE: &str = "python";

/// Node kinds the extractor reacts to. Everything else is only traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    ClassDefinition,
    FunctionDefinition,
    Call,
    Attribute,
    List,
    Dictionary,
    Set,
    Tuple,
    Import,
    ImportFrom,
    FutureImport,
    Boolean,
    Number,
    String,
    Interpolation,
    Assignment,
    Comment,
    If,
    ConditionalExpression,
    For,
    While,
    Break,
    Continue,
    Comprehension,
    Lambda,
    Global,
    Nonlocal,
    Try,
    Finally,
    Raise,
    Assert,
    With,
    Yield,
}

impl NodeKind {
    /// Map a tree-sitter-python kind string onto the closed kind set.
    #[must_use]
    pub fn from_kind(kind: &str) -> Option<Self> {
        let kind = match kind {
            "class_definition" => Self::ClassDefinition,
            "function_definition" => Self::FunctionDefinition,
            "call" => Self::Call,
            "attribute" => Self::Attribute,
            "list" => Self::List,
            "dictionary" => Self::Dictionary,
            "set" => Self::Set,
            "tuple" => Self::Tuple,
            "import_statement" => Self::Import,
            "import_from_statement" => Self::ImportFrom,
            "future_import_statement" => Self::FutureImport,
            "true" | "false" => Self::Boolean,
            "integer" | "float" => Self::Number,
            "string" => Self::String,
            "interpolation" => Self::Interpolation,
            "assignment" => Self::Assignment,
            "comment" => Self::Comment,
            "if_statement" => Self::If,
            "conditional_expression" => Self::ConditionalExpression,
            "for_statement" => Self::For,
            "while_statement" => Self::While,
            "break_statement" => Self::Break,
            "continue_statement" => Self::Continue,
            "list_comprehension"
            | "dictionary_comprehension"
            | "set_comprehension"
            | "generator_expression" => Self::Comprehension,
            "lambda" => Self::Lambda,
            "global_statement" => Self::Global,
            "nonlocal_statement" => Self::Nonlocal,
            "try_statement" => Self::Try,
            "finally_clause" => Self::Finally,
            "raise_statement" => Self::Raise,
            "assert_statement" => Self::Assert,
            "with_statement" => Self::With,
            "yield" => Self::Yield,
            _ => return None,
        };
        Some(kind)
    }
}

type Predicate = fn(&mut Visitor<'_>, Node<'_>);

/// Static kind -> predicate table.
const PREDICATE_TABLE: &[(NodeKind, Predicate)] = &[
    (NodeKind::ClassDefinition, visit_class),
    (NodeKind::FunctionDefinition, visit_function),
    (NodeKind::Call, visit_call),
    (NodeKind::Attribute, visit_attribute),
    (NodeKind::List, |v, n| v.tag_if_nonempty(n, "lists", 0)),
    (NodeKind::Dictionary, |v, n| v.tag_if_nonempty(n, "dictionaries", 0)),
    (NodeKind::Set, |v, n| v.tag_if_nonempty(n, "sets", 0)),
    (NodeKind::Tuple, |v, n| v.tag_if_nonempty(n, "tuples", 1)),
    (NodeKind::Import, visit_import),
    (NodeKind::ImportFrom, visit_import_from),
    (NodeKind::FutureImport, |v, _| v.tag("importing_modules")),
    (NodeKind::Boolean, |v, _| v.tag("booleans")),
    (NodeKind::Number, |v, _| v.tag("numeric_types")),
    (NodeKind::String, |v, _| v.tag("strings")),
    (NodeKind::Interpolation, |v, _| v.tag("strings")),
    (NodeKind::Assignment, visit_assignment),
    (NodeKind::Comment, |v, _| v.tag("comments")),
    (NodeKind::If, |v, _| v.tag("conditional_statements")),
    (NodeKind::ConditionalExpression, |v, _| v.tag("conditional_statements")),
    (NodeKind::For, |v, _| v.tag("for_loops")),
    (NodeKind::While, |v, _| v.tag("while_loops")),
    (NodeKind::Break, |v, _| v.tag("break_continue")),
    (NodeKind::Continue, |v, _| v.tag("break_continue")),
    (NodeKind::Comprehension, |v, _| v.tag("list_comprehensions")),
    (NodeKind::Lambda, |v, _| v.tag("lambda_functions")),
    (NodeKind::Global, |v, _| v.tag("scope")),
    (NodeKind::Nonlocal, |v, _| v.tag("scope")),
    (NodeKind::Try, |v, _| v.tag("catching_exceptions")),
    (NodeKind::Finally, |v, _| v.tag("finally_block")),
    (NodeKind::Raise, |v, _| v.tag("raising_exceptions")),
    (NodeKind::Assert, |v, _| v.tag("raising_exceptions")),
    (NodeKind::With, |v, _| v.tag("with_statement")),
    (NodeKind::Yield, |v, _| v.tag("generators")),
];

static PREDICATES: LazyLock<HashMap<NodeKind, Predicate>> =
    LazyLock::new(|| PREDICATE_TABLE.iter().copied().collect());

/// Accumulates tags while walking one tree.
struct Visitor<'src> {
    source: &'src [u8],
    skills: SkillSet,
}

impl<'src> Visitor<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source: source.as_bytes(),
            skills: SkillSet::new(),
        }
    }

    fn tag(&mut self, id: &str) {
        self.skills.insert(format!("{NAMESPACE}/{id}"));
    }

    fn text(&self, node: Node<'_>) -> &'src str {
        node.utf8_text(self.source).unwrap_or_default()
    }

    /// Tag collection literals holding more than `min` elements.
    fn tag_if_nonempty(&mut self, node: Node<'_>, id: &str, min: usize) {
        let elements = node
            .named_children(&mut node.walk())
            .filter(|child| child.kind() != "comment")
            .count();
        if elements > min {
            self.tag(id);
        }
    }
}

/// Pre-order walk over every node below (and including) `root`.
fn walk<'tree>(root: Node<'tree>, mut visit: impl FnMut(Node<'tree>)) {
    let mut cursor = root.walk();
    loop {
        visit(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

fn is_dunder(name: &str) -> bool {
    name.len() > 4 && name.starts_with("__") && name.ends_with("__")
}

/// Name of the first parameter of a function definition, if any.
fn first_parameter<'src>(visitor: &Visitor<'src>, function: Node<'_>) -> Option<&'src str> {
    let params = function.child_by_field_name("parameters")?;
    let first = params.named_children(&mut params.walk()).next()?;
    let ident = match first.kind() {
        "identifier" => first,
        "default_parameter" | "typed_default_parameter" => first.child_by_field_name("name")?,
        "typed_parameter" => first
            .named_children(&mut first.walk())
            .find(|child| child.kind() == "identifier")?,
        _ => return None,
    };
    Some(visitor.text(ident))
}

/// Function definitions directly in a class body, decorated or not.
fn methods<'tree>(body: Node<'tree>) -> Vec<Node<'tree>> {
    body.named_children(&mut body.walk())
        .filter_map(|child| match child.kind() {
            "function_definition" => Some(child),
            "decorated_definition" => child
                .child_by_field_name("definition")
                .filter(|def| def.kind() == "function_definition"),
            _ => None,
        })
        .collect()
}

fn visit_class(v: &mut Visitor<'_>, node: Node<'_>) {
    v.tag("classes_objects");

    if let Some(bases) = node.child_by_field_name("superclasses") {
        let bases: Vec<_> = bases
            .named_children(&mut bases.walk())
            .filter(|base| !matches!(base.kind(), "keyword_argument" | "comment"))
            .collect();
        if !bases.is_empty() {
            v.tag("inheritance");
        }
        let custom = bases.iter().any(|base| {
            let name = v.text(*base).rsplit('.').next().unwrap_or_default();
            name.ends_with("Exception") || name.ends_with("Error")
        });
        if custom {
            v.tag("custom_exceptions");
        }
    }

    let Some(body) = node.child_by_field_name("body") else {
        return;
    };
    let mut has_self_method = false;
    let mut names = Vec::new();
    for method in methods(body) {
        if first_parameter(v, method) == Some("self") {
            has_self_method = true;
        }
        if let Some(name) = method.child_by_field_name("name") {
            names.push(v.text(name));
        }
    }
    let defines = |wanted: &str| names.iter().any(|name| *name == wanted);

    if has_self_method {
        v.tag("encapsulation");
        if names.iter().any(|name| is_dunder(name) && *name != "__init__") {
            v.tag("polymorphism");
        }
    }
    if defines("__init__") {
        v.tag("constructor");
    }
    if defines("__enter__") && defines("__exit__") {
        v.tag("context_managers");
    }
    if defines("__iter__") && defines("__next__") {
        v.tag("iterators");
    }
}

fn visit_function(v: &mut Visitor<'_>, node: Node<'_>) {
    v.tag("function_definition");

    if let Some(params) = node.child_by_field_name("parameters") {
        for param in params.named_children(&mut params.walk()) {
            match param.kind() {
                "default_parameter" | "typed_default_parameter" => v.tag("default_arguments"),
                "list_splat_pattern" | "dictionary_splat_pattern" => v.tag("keyword_arguments"),
                "typed_parameter" => {
                    let variadic = param.named_children(&mut param.walk()).any(|child| {
                        matches!(child.kind(), "list_splat_pattern" | "dictionary_splat_pattern")
                    });
                    if variadic {
                        v.tag("keyword_arguments");
                    }
                }
                _ => {}
            }
        }
    }

    let own_name = node.child_by_field_name("name").map(|name| v.text(name));
    if let Some(body) = node.child_by_field_name("body") {
        let mut returns = false;
        let mut recursive = false;
        let mut nested = false;
        walk(body, |inner| match inner.kind() {
            "return_statement" => returns = true,
            "function_definition" => nested = true,
            "call" => {
                let callee = inner
                    .child_by_field_name("function")
                    .filter(|f| f.kind() == "identifier")
                    .map(|f| v.text(f));
                if callee.is_some() && callee == own_name {
                    recursive = true;
                }
            }
            _ => {}
        });
        if returns {
            v.tag("arguments_return");
        }
        if recursive {
            v.tag("recursion");
        }
        if nested {
            v.tag("scope");
        }
    }

    if let Some(parent) = node.parent().filter(|p| p.kind() == "decorated_definition") {
        for decorator in parent
            .named_children(&mut parent.walk())
            .filter(|child| child.kind() == "decorator")
        {
            v.tag("decorators");
            let name = v.text(decorator).trim_start_matches('@').trim();
            if matches!(name, "staticmethod" | "classmethod") {
                v.tag("class_static_methods");
            }
        }
    }
}

fn visit_call(v: &mut Visitor<'_>, node: Node<'_>) {
    let Some(function) = node.child_by_field_name("function") else {
        return;
    };
    match function.kind() {
        "identifier" => {
            let name = v.text(function);
            if TYPE_CONVERSIONS.contains(&name) {
                v.tag("type_conversion");
            }
            if COLLECTION_CONSTRUCTORS.contains(&name) {
                v.tag("data_collections");
            }
            if name == "open" {
                v.tag("file_opening_closing");
            }
            if ITERATOR_BUILTINS.contains(&name) {
                v.tag("iterators");
            }
            if BUILTINS.contains(name) {
                v.tag("build_in_functions");
            }
        }
        "attribute" => {
            let closes = function
                .child_by_field_name("attribute")
                .is_some_and(|attr| v.text(attr) == "close");
            if closes {
                v.tag("file_opening_closing");
            }
        }
        _ => {}
    }
}

/// `.read`/`.write` style access, called or passed around.
fn visit_attribute(v: &mut Visitor<'_>, node: Node<'_>) {
    let Some(attr) = node.child_by_field_name("attribute") else {
        return;
    };
    let name = v.text(attr);
    if READ_METHODS.contains(&name) || WRITE_METHODS.contains(&name) {
        v.tag("file_reading_writing");
    }
}

fn tag_module(v: &mut Visitor<'_>, path: &str) {
    v.tag("importing_modules");
    if path.contains('.') {
        v.tag("using_packages");
    }
    let top = path.split('.').next().unwrap_or_default();
    if let Some(ids) = IMPORT_TAGS.get(top) {
        for id in *ids {
            v.tag(id);
        }
    }
    if STANDARD_LIBRARY.contains(top) {
        v.tag("standard_libraries");
    }
}

fn visit_import(v: &mut Visitor<'_>, node: Node<'_>) {
    for name in node.children_by_field_name("name", &mut node.walk()) {
        let path = match name.kind() {
            "aliased_import" => name.child_by_field_name("name").map(|n| v.text(n)),
            _ => Some(v.text(name)),
        };
        if let Some(path) = path {
            tag_module(v, path);
        }
    }
}

fn visit_import_from(v: &mut Visitor<'_>, node: Node<'_>) {
    let Some(module) = node.child_by_field_name("module_name") else {
        v.tag("importing_modules");
        return;
    };
    if module.kind() == "relative_import" {
        v.tag("importing_modules");
        v.tag("creating_modules");
        return;
    }
    let path = v.text(module);
    tag_module(v, path);
}

fn visit_assignment(v: &mut Visitor<'_>, node: Node<'_>) {
    if node
        .child_by_field_name("left")
        .is_some_and(|left| left.kind() == "identifier")
    {
        v.tag("variables_data_types");
    }
}

/// Python 2 statement forms the grammar still accepts without an error node.
const LEGACY_STATEMENTS: &[&str] = &["print_statement", "exec_statement"];

/// Position and description of the first error, missing or legacy node.
fn first_error(root: Node<'_>) -> Option<(usize, usize, String)> {
    let mut found = None;
    walk(root, |node| {
        if found.is_some() {
            return;
        }
        let pos = node.start_position();
        if node.is_missing() {
            found = Some((pos.row, pos.column, format!("missing '{}'", node.kind())));
        } else if node.is_error() {
            found = Some((pos.row, pos.column, "invalid syntax".to_string()));
        } else if LEGACY_STATEMENTS.contains(&node.kind()) {
            let keyword = node.kind().trim_end_matches("_statement");
            found = Some((pos.row, pos.column, format!("python 2 '{keyword}' statement")));
        }
    });
    found
}

/// Parse Python source, failing on any syntax error.
pub fn parse(source: &str) -> Result<Tree> {
    let mut parser = TsParser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|err| SkillError::parse(NAMESPACE, 0, 0, format!("grammar unavailable: {err}")))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| SkillError::parse(NAMESPACE, 0, 0, "parser produced no tree"))?;

    let root = tree.root_node();
    let error = first_error(root)
        .or_else(|| root.has_error().then(|| (0, 0, "invalid syntax".to_string())));
    if let Some((row, column, message)) = error {
        debug!(row, column, %message, "python parse failed");
        return Err(SkillError::parse(NAMESPACE, row, column, message));
    }
    Ok(tree)
}

/// Syntax-tree extractor for Python.
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonAstExtractor;

impl PythonAstExtractor {
    /// Every tag this extractor can emit.
    #[must_use]
    pub fn vocabulary() -> SkillSet {
        tables::VOCABULARY
            .iter()
            .map(|id| format!("{NAMESPACE}/{id}"))
            .collect()
    }
}

impl SkillExtractor for PythonAstExtractor {
    fn language(&self) -> LanguageKey {
        LanguageKey::Python
    }

    fn extract(&self, text: &str) -> Result<SkillSet> {
        let tree = parse(text)?;
        let mut visitor = Visitor::new(text);
        walk(tree.root_node(), |node| {
            if !node.is_named() {
                return;
            }
            if let Some(predicate) = NodeKind::from_kind(node.kind()).and_then(|k| PREDICATES.get(&k)) {
                predicate(&mut visitor, node);
            }
        });
        Ok(visitor.skills)
    }
}
