use labskill::lab::locator::locate_code;
use labskill::skills::{profile, tag};
use labskill::test_utils::{TableCase, run_table};
use labskill::{LanguageKey, SkillError, extract_skills};

fn has(language: LanguageKey, source: &str, skill: &str) -> bool {
    extract_skills(language, source)
        .unwrap_or_default()
        .contains(skill)
}

#[test]
fn test_pattern_languages_detect_representative_skills() {
    let cases = [
        TableCase::new("git", (LanguageKey::Git, "git commit -m 'x'", "git/commit"), true),
        TableCase::new("go channels", (LanguageKey::Go, "ch := make(chan int)\ngo work(ch)\n", "go/goroutines"), true),
        TableCase::new("css flexbox", (LanguageKey::Css, ".a { display: flex; }", "css/flexbox"), true),
        TableCase::new("html tables", (LanguageKey::Html, "<table><tr><td>1</td></tr></table>", "html/tables"), true),
        TableCase::new("pandas csv", (LanguageKey::Pandas, "df = pd.read_csv('a.csv')", "pandas/read_csv"), true),
        TableCase::new("git pull absent", (LanguageKey::Git, "git push origin main", "git/pull"), false),
        TableCase::new("numpy random", (LanguageKey::Numpy, "x = np.random.rand(3)", "numpy/random"), true),
        TableCase::new("numpy zeros is not random", (LanguageKey::Numpy, "x = np.zeros(3)", "numpy/random"), false),
        TableCase::new("matplotlib hist", (LanguageKey::Matplotlib, "plt.hist(data, bins=10)", "matplotlib/histograms"), true),
        TableCase::new("matplotlib line plot", (LanguageKey::Matplotlib, "plt.plot(x, y)", "matplotlib/histograms"), false),
        TableCase::new(
            "sklearn split",
            (LanguageKey::Sklearn, "X_train, X_test, y_train, y_test = train_test_split(X, y)", "sklearn/train_test_split"),
            true,
        ),
        TableCase::new("sklearn fit only", (LanguageKey::Sklearn, "model.fit(X, y)", "sklearn/train_test_split"), false),
        TableCase::new(
            "django model",
            (LanguageKey::Django, "class Post(models.Model):\n    title = models.CharField(max_length=80)\n", "django/models"),
            true,
        ),
        TableCase::new("django view", (LanguageKey::Django, "def index(request):\n    pass\n", "django/models"), false),
        TableCase::new("flask app", (LanguageKey::Flask, "app = Flask(__name__)", "flask/app_creation"), true),
        TableCase::new("flask run only", (LanguageKey::Flask, "app.run(debug=True)", "flask/app_creation"), false),
        TableCase::new("pygame clock", (LanguageKey::Pygame, "clock = pygame.time.Clock()", "pygame/frame_rate"), true),
        TableCase::new("pygame init only", (LanguageKey::Pygame, "pygame.init()", "pygame/frame_rate"), false),
        TableCase::new("tkinter root", (LanguageKey::Tkinter, "root = Tk()", "tkinter/root_window"), true),
        TableCase::new("tkinter loop only", (LanguageKey::Tkinter, "root.mainloop()", "tkinter/root_window"), false),
        TableCase::new(
            "typescript interface",
            (LanguageKey::Typescript, "interface User {\n  name: string;\n}\n", "typescript/interfaces"),
            true,
        ),
        TableCase::new("typescript plain let", (LanguageKey::Typescript, "let total = 1;", "typescript/interfaces"), false),
        TableCase::new(
            "react state",
            (LanguageKey::React, "const [count, setCount] = useState(0);", "react/use_state_hook"),
            true,
        ),
        TableCase::new("react effect only", (LanguageKey::React, "useEffect(() => {}, []);", "react/use_state_hook"), false),
        TableCase::new("jquery selector", (LanguageKey::Jquery, "$(\".item\").hide();", "jquery/selectors"), true),
        TableCase::new("jquery plain dom", (LanguageKey::Jquery, "document.getElementById('x');", "jquery/selectors"), false),
        TableCase::new("cpp cout", (LanguageKey::Cpp, "std::cout << x << std::endl;", "cpp/output"), true),
        TableCase::new("cpp printf", (LanguageKey::Cpp, "printf(\"%d\", x);", "cpp/output"), false),
        TableCase::new("java println", (LanguageKey::Java, "System.out.println(\"hi\");", "java/output"), true),
        TableCase::new("java declaration", (LanguageKey::Java, "int x = 1;", "java/output"), false),
        TableCase::new("rust enum", (LanguageKey::Rust, "enum Color { Red, Green }", "rust/enums"), true),
        TableCase::new("rust bare fn", (LanguageKey::Rust, "fn main() {}", "rust/enums"), false),
        TableCase::new("mysql alter", (LanguageKey::Mysql, "ALTER TABLE users ADD age INT;", "mysql/alter_table"), true),
        TableCase::new("mysql select", (LanguageKey::Mysql, "SELECT name FROM users;", "mysql/alter_table"), false),
        TableCase::new("shell shebang", (LanguageKey::Shell, "#!/bin/bash\necho hi\n", "shell/shebang"), true),
        TableCase::new("shell no shebang", (LanguageKey::Shell, "echo hi", "shell/shebang"), false),
        TableCase::new("linux mkdir", (LanguageKey::Linux, "mkdir -p build", "linux/mkdir"), true),
        TableCase::new("linux ls", (LanguageKey::Linux, "ls -la", "linux/mkdir"), false),
        TableCase::new(
            "dockerfile from",
            (LanguageKey::Docker, "FROM python:3.12-slim\nRUN pip install flask\n", "docker/dockerfile_from"),
            true,
        ),
        TableCase::new("docker cli is not a dockerfile", (LanguageKey::Docker, "docker ps -a", "docker/dockerfile_from"), false),
        TableCase::new("docker ps", (LanguageKey::Docker, "docker ps -a", "docker/ps"), true),
    ];
    run_table(&cases, |(language, source, skill)| has(*language, source, skill));
}

#[test]
fn test_every_tag_is_namespaced_by_its_language() {
    let samples = [
        (LanguageKey::Python, "import os\nclass A:\n    def f(self):\n        return [x for x in range(3)]\n"),
        (LanguageKey::Js, "const f = async () => { await fetch('/x'); };\n"),
        (LanguageKey::Sql, "SELECT name FROM users WHERE id = 1 ORDER BY name;"),
        (LanguageKey::Docker, "FROM alpine\nRUN apk add curl\nEXPOSE 80\n"),
        (LanguageKey::Rust, "fn main() { let v: Vec<i32> = Vec::new(); }"),
    ];
    for (language, source) in samples {
        let skills = extract_skills(language, source).unwrap();
        assert!(!skills.is_empty(), "{language} found nothing");
        for skill in &skills {
            assert!(tag::is_well_formed(skill), "{skill} is malformed");
            assert_eq!(tag::namespace(skill), Some(language.namespace()), "{skill}");
        }
    }
}

#[test]
fn test_empty_source_yields_no_skills() {
    for language in LanguageKey::ALL {
        let skills = extract_skills(language, "").unwrap();
        assert!(skills.is_empty(), "{language} tagged empty input");
    }
}

#[test]
fn test_python_parse_error_reports_position() {
    let err = extract_skills(LanguageKey::Python, "x = 1\ndef broken(:\n    pass\n").unwrap_err();
    match err {
        SkillError::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_fenced_markdown_feeds_extraction() {
    let doc = "Run this:\n\n```bash\nfor f in *.txt; do echo \"$f\"; done\n```\n\n```python\nwhile True:\n    break\n```\n";
    let aliases = vec!["python".to_string()];
    let code = locate_code(doc, &aliases);
    let skills = extract_skills(LanguageKey::Python, &code).unwrap();
    assert!(skills.contains("python/while_loops"));
    assert!(skills.contains("python/break_continue"));
    assert!(!skills.contains("python/for_loops"));
}

#[test]
fn test_default_python_fences_include_shell_blocks() {
    let aliases: Vec<String> = profile(LanguageKey::Python)
        .fence_aliases()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert!(aliases.iter().any(|alias| alias == "bash"));
    assert!(aliases.iter().any(|alias| alias == "shell"));

    let pythonic = "```python\nitems = [1, 2]\n```\n\n```shell\nfor item in items:\n    print(item)\n```\n";
    let skills = extract_skills(LanguageKey::Python, &locate_code(pythonic, &aliases)).unwrap();
    assert!(skills.contains("python/lists"));
    assert!(skills.contains("python/for_loops"));

    let shell = "```python\nitems = [1, 2]\n```\n\n```bash\npip install requests\n```\n";
    let err = extract_skills(LanguageKey::Python, &locate_code(shell, &aliases)).unwrap_err();
    assert!(matches!(err, SkillError::Parse { .. }), "got {err:?}");
}
