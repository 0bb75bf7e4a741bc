use labskill::cli::commands::remove::remove_from_lab;
use labskill::cli::commands::tag::tag_lab;
use labskill::config::Config;
use labskill::lab::manifest::LabManifest;
use labskill::lab::sources::discover_labs;
use labskill::lab::calculate_lab_weights;
use labskill::test_utils::{LabFixture, StepFixture};
use labskill::{LanguageKey, SkillError};

const LOOPS: StepFixture = StepFixture {
    file: "step1.md",
    markdown: "```python\nfor i in range(3):\n    print(i)\n```\n",
    skills: &[],
    solutions: &[],
};

const FUNCTIONS: StepFixture = StepFixture {
    file: "step2.md",
    markdown: "```python\ndef add(a, b):\n    return a + b\n```\n",
    skills: &["python/for_loops"],
    solutions: &[],
};

#[test]
fn test_tag_then_weight() {
    let fixture = LabFixture::new();
    let dir = fixture.lab(
        "",
        "Basics",
        Some(&["python/for_loops", "python/function_definition"]),
        &[LOOPS, FUNCTIONS],
    );
    let config = Config::default();

    let report = tag_lab(&config, &dir, Some(LanguageKey::Python), false).unwrap();
    assert_eq!(report.steps, 2);
    assert!(report.written);

    let manifest = LabManifest::load(&dir.join("index.json")).unwrap();
    let universe = manifest.skills.clone().unwrap();
    let weights = calculate_lab_weights("Basics", &universe, &manifest.step_skills()).unwrap();
    assert_eq!(weights.len(), 2);
    assert_eq!(weights.iter().next().unwrap().skill, "python/for_loops");
}

#[test]
fn test_tag_then_remove_round_trip() {
    let fixture = LabFixture::new();
    let dir = fixture.lab("", "Basics", None, &[LOOPS]);
    let config = Config::default();

    tag_lab(&config, &dir, Some(LanguageKey::Python), false).unwrap();
    assert!(!fixture.step_skills("")[0].is_empty());

    let report = remove_from_lab(&config, &dir, "python", false).unwrap();
    assert!(report.removed);
    assert!(fixture.step_skills("")[0].is_empty());
}

#[test]
fn test_solutions_can_be_excluded() {
    let fixture = LabFixture::new();
    let dir = fixture.lab(
        "",
        "Solutions",
        None,
        &[StepFixture {
            solutions: &[("answer.py", "while True:\n    break\n")],
            ..StepFixture::default()
        }],
    );
    let mut config = Config::default();
    config.lab.include_solutions = false;

    let report = tag_lab(&config, &dir, Some(LanguageKey::Python), false).unwrap();
    assert_eq!(report.changed_steps, 0);

    config.lab.include_solutions = true;
    let report = tag_lab(&config, &dir, Some(LanguageKey::Python), false).unwrap();
    assert_eq!(report.changed_steps, 1);
    assert!(fixture.step_skills("")[0].contains(&"python/while_loops".to_string()));
}

#[test]
fn test_missing_step_text_is_not_found() {
    let fixture = LabFixture::new();
    let dir = fixture.root().to_path_buf();
    fixture.manifest(
        "",
        &serde_json::json!({"details": {"steps": [{"text": "gone.md", "skills": []}]}}),
    );

    let err = tag_lab(&Config::default(), &dir, Some(LanguageKey::Python), false).unwrap_err();
    assert!(matches!(err, SkillError::NotFound(_)));
}

#[test]
fn test_discovery_respects_depth_and_manifest_name() {
    let fixture = LabFixture::new();
    fixture.lab("a", "A", None, &[]);
    fixture.lab("deep/er/still/b", "B", None, &[]);

    let shallow = discover_labs(&[fixture.root().to_path_buf()], "index.json", 2).unwrap();
    assert_eq!(shallow, vec![fixture.lab_dir("a")]);

    let all = discover_labs(&[fixture.root().to_path_buf()], "index.json", 5).unwrap();
    assert_eq!(all.len(), 2);

    let none = discover_labs(&[fixture.root().to_path_buf()], "lab.json", 5).unwrap();
    assert!(none.is_empty());
}
