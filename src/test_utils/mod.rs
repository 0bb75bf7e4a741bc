//! Shared test utilities for labskill.

pub mod fixtures;

use std::fmt::Debug;

pub use fixtures::{LabFixture, StepFixture};

/// One row of a table-driven test.
#[derive(Debug, Clone)]
pub struct TableCase<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
}

impl<I, E> TableCase<I, E> {
    pub const fn new(name: &'static str, input: I, expected: E) -> Self {
        Self {
            name,
            input,
            expected,
        }
    }
}

/// Run every case through `check`, then fail once listing all mismatches.
///
/// # Panics
///
/// Panics when any case's actual value differs from its expected value.
pub fn run_table<I, E, F>(cases: &[TableCase<I, E>], mut check: F)
where
    I: Debug,
    E: Debug + PartialEq,
    F: FnMut(&I) -> E,
{
    let failures: Vec<String> = cases
        .iter()
        .filter_map(|case| {
            let actual = check(&case.input);
            (actual != case.expected).then(|| {
                format!(
                    "{}: input {:?}\n    expected {:?}\n    actual   {:?}",
                    case.name, case.input, case.expected, actual
                )
            })
        })
        .collect();

    assert!(
        failures.is_empty(),
        "{} of {} cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}
