//! Closed lookup tables for the Python syntax-tree extractor.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Every id the Python extractor can emit (tags are `python/<id>`).
pub const VOCABULARY: &[&str] = &[
    "arguments_return",
    "booleans",
    "break_continue",
    "build_in_functions",
    "catching_exceptions",
    "class_static_methods",
    "classes_objects",
    "comments",
    "conditional_statements",
    "constructor",
    "context_managers",
    "creating_modules",
    "custom_exceptions",
    "data_analysis",
    "data_collections",
    "data_serialization",
    "data_visualization",
    "date_time",
    "decorators",
    "default_arguments",
    "dictionaries",
    "encapsulation",
    "file_opening_closing",
    "file_reading_writing",
    "finally_block",
    "for_loops",
    "function_definition",
    "generators",
    "http_requests",
    "importing_modules",
    "inheritance",
    "iterators",
    "keyword_arguments",
    "lambda_functions",
    "list_comprehensions",
    "lists",
    "machine_learning",
    "math_random",
    "networking_protocols",
    "numeric_types",
    "numerical_computing",
    "os_system",
    "polymorphism",
    "raising_exceptions",
    "recursion",
    "regular_expressions",
    "scope",
    "sets",
    "socket_programming",
    "standard_libraries",
    "strings",
    "threading_multiprocessing",
    "tuples",
    "type_conversion",
    "using_packages",
    "variables_data_types",
    "while_loops",
    "with_statement",
];

pub(super) const TYPE_CONVERSIONS: &[&str] = &["int", "float", "str", "bool", "complex"];

pub(super) const COLLECTION_CONSTRUCTORS: &[&str] = &["list", "tuple", "set", "dict", "frozenset"];

pub(super) const ITERATOR_BUILTINS: &[&str] = &["iter", "next", "enumerate", "zip", "reversed"];

pub(super) const READ_METHODS: &[&str] = &["read", "readline", "readlines"];

pub(super) const WRITE_METHODS: &[&str] = &["write", "writelines"];

pub(super) static BUILTINS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "abs", "all", "any", "ascii", "bin", "bool", "bytearray", "bytes", "callable", "chr",
        "classmethod", "compile", "complex", "delattr", "dict", "dir", "divmod", "enumerate",
        "eval", "exec", "filter", "float", "format", "frozenset", "getattr", "globals",
        "hasattr", "hash", "help", "hex", "id", "input", "int", "isinstance", "issubclass",
        "iter", "len", "list", "locals", "map", "max", "memoryview", "min", "next", "object",
        "oct", "open", "ord", "pow", "print", "property", "range", "repr", "reversed", "round",
        "set", "setattr", "slice", "sorted", "staticmethod", "str", "sum", "super", "tuple",
        "type", "vars", "zip", "__import__",
    ]
    .into_iter()
    .collect()
});

pub(super) static STANDARD_LIBRARY: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "abc", "argparse", "array", "ast", "asyncio", "base64", "bisect", "builtins",
        "calendar", "cmath", "collections", "concurrent", "configparser", "contextlib", "copy",
        "csv", "ctypes", "dataclasses", "datetime", "decimal", "difflib", "enum", "errno",
        "fnmatch", "fractions", "functools", "gc", "getpass", "glob", "gzip", "hashlib",
        "heapq", "hmac", "html", "http", "importlib", "inspect", "io", "ipaddress",
        "itertools", "json", "keyword", "logging", "marshal", "math", "mimetypes",
        "multiprocessing", "operator", "os", "pathlib", "pickle", "platform", "pprint",
        "queue", "random", "re", "secrets", "select", "shelve", "shlex", "shutil", "signal",
        "socket", "sqlite3", "ssl", "stat", "statistics", "string", "struct", "subprocess",
        "sys", "tempfile", "textwrap", "threading", "time", "timeit", "tkinter", "traceback",
        "types", "typing", "unicodedata", "unittest", "urllib", "uuid", "warnings", "weakref",
        "xml", "zipfile", "zlib",
    ]
    .into_iter()
    .collect()
});

/// Top-level module name to the ids its import implies.
const IMPORT_TABLE: &[(&str, &[&str])] = &[
    ("re", &["regular_expressions"]),
    ("math", &["math_random"]),
    ("random", &["math_random"]),
    ("datetime", &["date_time"]),
    ("time", &["date_time"]),
    ("calendar", &["date_time"]),
    ("collections", &["data_collections"]),
    ("json", &["data_serialization"]),
    ("pickle", &["data_serialization"]),
    ("csv", &["data_serialization"]),
    ("marshal", &["data_serialization"]),
    ("shelve", &["data_serialization"]),
    ("os", &["os_system"]),
    ("sys", &["os_system"]),
    ("shutil", &["os_system"]),
    ("subprocess", &["os_system"]),
    ("pathlib", &["os_system"]),
    ("requests", &["http_requests"]),
    ("urllib", &["http_requests"]),
    ("http", &["http_requests"]),
    ("threading", &["threading_multiprocessing"]),
    ("multiprocessing", &["threading_multiprocessing"]),
    ("concurrent", &["threading_multiprocessing"]),
    ("asyncio", &["threading_multiprocessing"]),
    ("pandas", &["data_analysis"]),
    ("matplotlib", &["data_visualization"]),
    ("seaborn", &["data_visualization"]),
    ("plotly", &["data_visualization"]),
    ("sklearn", &["machine_learning"]),
    ("tensorflow", &["machine_learning"]),
    ("torch", &["machine_learning"]),
    ("keras", &["machine_learning"]),
    ("socket", &["socket_programming", "networking_protocols"]),
    ("numpy", &["numerical_computing"]),
    ("scipy", &["numerical_computing"]),
    ("itertools", &["iterators"]),
    ("contextlib", &["context_managers"]),
];

pub(super) static IMPORT_TAGS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| IMPORT_TABLE.iter().copied().collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_tags_are_in_vocabulary() {
        for ids in IMPORT_TAGS.values() {
            for id in *ids {
                assert!(VOCABULARY.contains(id), "{id} missing from vocabulary");
            }
        }
    }

    #[test]
    fn vocabulary_is_sorted_and_unique() {
        let mut sorted = VOCABULARY.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, VOCABULARY);
    }

    #[test]
    fn call_sets_are_builtins() {
        for name in TYPE_CONVERSIONS
            .iter()
            .chain(COLLECTION_CONSTRUCTORS)
            .chain(ITERATOR_BUILTINS)
        {
            assert!(BUILTINS.contains(name), "{name} is not a builtin");
        }
    }
}
