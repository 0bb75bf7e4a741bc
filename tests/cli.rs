use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};

use labskill::test_utils::{LabFixture, StepFixture};

/// Binary isolated from any user or project configuration.
fn labskill(fixture: &LabFixture) -> Command {
    let mut cmd = Command::cargo_bin("labskill").unwrap();
    cmd.current_dir(fixture.root())
        .env("XDG_CONFIG_HOME", fixture.root().join(".config"))
        .env("HOME", fixture.root())
        .env_remove("LABSKILL_CONFIG")
        .env_remove("LABSKILL_OUTPUT_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

const PYTHON_STEP: StepFixture = StepFixture {
    file: "step1.md",
    markdown: "# Lists\n\n```python\nnums = [1, 2, 3]\nfor n in nums:\n    print(n)\n```\n",
    skills: &["python/strings"],
    solutions: &[],
};

#[test]
fn test_cli_help() {
    let fixture = LabFixture::new();
    labskill(&fixture)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let fixture = LabFixture::new();
    labskill(&fixture)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_extract_python_from_stdin() {
    let fixture = LabFixture::new();
    labskill(&fixture)
        .args(["--plain", "extract", "--lang", "python"])
        .write_stdin("nums = [1, 2]\nfor n in nums:\n    print(n)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("python/lists"))
        .stdout(predicate::str::contains("python/for_loops"));
}

#[test]
fn test_extract_fenced_file() {
    let fixture = LabFixture::new();
    let doc = fixture.write(
        "step.md",
        "Intro\n\n```go\nch := make(chan int)\ngo func() { ch <- 1 }()\n```\n\n```python\nx = [1]\n```\n",
    );
    labskill(&fixture)
        .args(["--plain", "extract", "--lang", "go", "--fenced"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("go/goroutines"))
        .stdout(predicate::str::contains("python/").not());
}

#[test]
fn test_extract_json_envelope() {
    let fixture = LabFixture::new();
    let output = labskill(&fixture)
        .args(["--json", "extract", "--lang", "py"])
        .write_stdin("class Point:\n    pass\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["status"], "ok");
    assert_eq!(value["data"]["language"], "python");
    assert_eq!(value["data"]["source"], "<stdin>");
    let skills = value["data"]["skills"].as_array().unwrap();
    assert!(skills.contains(&json!("python/classes_objects")));
}

#[test]
fn test_extract_parse_error_is_structured() {
    let fixture = LabFixture::new();
    let output = labskill(&fixture)
        .args(["--json", "extract", "--lang", "python"])
        .write_stdin("def broken(:\n    pass\n")
        .output()
        .unwrap();
    assert!(!output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["status"]["error"]["code"], "SOURCE_PARSE_ERROR");
    assert_eq!(value["status"]["error"]["numeric_code"], 101);
}

#[test]
fn test_extract_unknown_language() {
    let fixture = LabFixture::new();
    labskill(&fixture)
        .args(["extract", "--lang", "cobol"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cobol"));
}

#[test]
fn test_tag_writes_manifest() {
    let fixture = LabFixture::new();
    fixture.lab("labs/lists", "Lists", None, &[PYTHON_STEP]);

    labskill(&fixture)
        .args(["--plain", "tag", "--lang", "python", "labs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("written"));

    let skills = &fixture.step_skills("labs/lists")[0];
    assert!(skills.contains(&"python/lists".to_string()));
    assert!(skills.contains(&"python/for_loops".to_string()));
    assert!(skills.contains(&"python/strings".to_string()));
}

#[test]
fn test_tag_keeps_unknown_manifest_fields() {
    let fixture = LabFixture::new();
    fixture.lab("", "Lists", None, &[PYTHON_STEP]);

    labskill(&fixture)
        .args(["tag", "--lang", "python", "."])
        .assert()
        .success();

    let manifest = fixture.read_manifest("");
    assert_eq!(manifest["type"], "lab");
    assert_eq!(manifest["details"]["steps"][0]["text"], "step1.md");
}

#[test]
fn test_tag_dry_run_leaves_files() {
    let fixture = LabFixture::new();
    let dir = fixture.lab("", "Lists", None, &[PYTHON_STEP]);
    let before = std::fs::read_to_string(dir.join("index.json")).unwrap();

    labskill(&fixture)
        .args(["tag", "--lang", "python", "--dry-run"])
        .arg(&dir)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(dir.join("index.json")).unwrap(), before);
}

#[test]
fn test_tag_reports_partial_batch() {
    let fixture = LabFixture::new();
    fixture.lab("labs/good", "Good", None, &[PYTHON_STEP]);
    fixture.lab(
        "labs/bad",
        "Bad",
        None,
        &[StepFixture {
            file: "step1.md",
            markdown: "```python\ndef broken(:\n```\n",
            ..StepFixture::default()
        }],
    );

    let output = labskill(&fixture)
        .args(["--json", "tag", "--lang", "python", "labs"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["status"]["partial"]["completed"], 1);
    assert_eq!(value["status"]["partial"]["failed"], 1);
    let reports = value["data"].as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["error"]["code"], "SOURCE_PARSE_ERROR");
    assert_eq!(reports[1]["written"], true);
}

#[test]
fn test_tag_without_language_dedupes() {
    let fixture = LabFixture::new();
    fixture.lab(
        "",
        "Dupes",
        None,
        &[StepFixture {
            skills: &["b/x", "a/y", "b/x"],
            ..StepFixture::default()
        }],
    );

    labskill(&fixture).args(["tag", "."]).assert().success();
    assert_eq!(fixture.step_skills(""), vec![vec!["a/y", "b/x"]]);
}

#[test]
fn test_weight_plain() {
    let fixture = LabFixture::new();
    fixture.lab(
        "",
        "Weights",
        Some(&["a", "b"]),
        &[
            StepFixture {
                skills: &["a", "b"],
                ..StepFixture::default()
            },
            StepFixture {
                skills: &["a"],
                ..StepFixture::default()
            },
        ],
    );

    labskill(&fixture)
        .args(["--plain", "weight", "."])
        .assert()
        .success()
        .stdout("a\t1.667\nb\t0.583\n");
}

#[test]
fn test_weight_skill_flags_override_manifest() {
    let fixture = LabFixture::new();
    fixture.lab(
        "",
        "Weights",
        Some(&["a"]),
        &[StepFixture {
            skills: &["a", "b"],
            ..StepFixture::default()
        }],
    );

    let output = labskill(&fixture)
        .args(["--json", "weight", "-s", "b", "."])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["data"]["weights"], json!({"b": 1.0}));
}

#[test]
fn test_weight_empty_universe_fails() {
    let fixture = LabFixture::new();
    fixture.lab("", "Nothing", None, &[StepFixture::default()]);

    labskill(&fixture)
        .args(["weight", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing"));
}

#[test]
fn test_remove_namespace() {
    let fixture = LabFixture::new();
    fixture.lab(
        "",
        "Mixed",
        None,
        &[
            StepFixture {
                skills: &["js/arrays", "python/lists"],
                ..StepFixture::default()
            },
            StepFixture {
                skills: &["python/sets"],
                ..StepFixture::default()
            },
        ],
    );

    labskill(&fixture)
        .args(["--plain", "remove", "--prefix", "python/", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed"));

    assert_eq!(
        fixture.step_skills(""),
        vec![vec!["js/arrays".to_string()], Vec::new()]
    );
}

#[test]
fn test_languages_plain() {
    let fixture = LabFixture::new();
    labskill(&fixture)
        .args(["--plain", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("python\tast\tpy,python,bash,shell,python3"))
        .stdout(predicate::str::contains("go\tpattern"));
}

#[test]
fn test_project_config_overrides_fences() {
    let fixture = LabFixture::new();
    fixture.write("labskill.toml", "[fences]\npython = [\"py3\"]\n");
    let doc = fixture.write("step.md", "```py3\nx = [1]\n```\n```python\nclass A:\n    pass\n```\n");

    labskill(&fixture)
        .args(["--plain", "extract", "--lang", "python", "--fenced"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("python/lists"))
        .stdout(predicate::str::contains("python/classes_objects").not());
}

#[test]
fn test_missing_explicit_config_fails() {
    let fixture = LabFixture::new();
    labskill(&fixture)
        .args(["--config", "nope.toml", "languages"])
        .assert()
        .failure();
}
