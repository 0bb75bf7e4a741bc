use std::path::PathBuf;

use insta::assert_snapshot;

use labskill::SkillError;

#[test]
fn test_error_parse() {
    let err = SkillError::parse("python", 1, 10, "invalid syntax");
    assert_snapshot!(err.to_string(), @"python parse error at line 2, column 11: invalid syntax");
}

#[test]
fn test_error_empty_corpus() {
    let err = SkillError::EmptyCorpus {
        lab: "Intro to Go".to_string(),
    };
    assert_snapshot!(err.to_string(), @"Lab 'Intro to Go' has no step skills to weight");
}

#[test]
fn test_error_manifest_not_found() {
    let err = SkillError::ManifestNotFound(PathBuf::from("labs/a/index.json"));
    assert_snapshot!(err.to_string(), @"Lab manifest not found: labs/a/index.json");
}

#[test]
fn test_structured_empty_universe() {
    let structured = SkillError::EmptyUniverse("demo".to_string()).to_structured();
    assert_eq!(structured.numeric_code, 202);
    assert_snapshot!(structured.suggestion, @"Pass --skill <tag> or add a top-level `skills` list to the lab manifest");
}
