use insta::assert_snapshot;

use labskill::{LanguageKey, calculate_weights, extract_skills};

const GO_LOOP: &str = "package main\n\
\n\
import \"fmt\"\n\
\n\
func main() {\n\
\tnums := []int{1, 2, 3}\n\
\tfor _, n := range nums {\n\
\t\tfmt.Println(n)\n\
\t}\n\
}\n";

#[test]
fn test_go_loop_skills() {
    let skills = extract_skills(LanguageKey::Go, GO_LOOP).unwrap();
    let listing = skills.into_iter().collect::<Vec<_>>().join("\n");
    assert_snapshot!(listing, @r"
    go/arrays_slices
    go/for
    go/functions
    go/imports
    go/packages
    go/range
    go/variables
    ");
}

#[test]
fn test_weights_json() {
    let owned = |list: &[&str]| list.iter().map(ToString::to_string).collect::<Vec<_>>();
    let steps = vec![owned(&["a", "b"]), owned(&["a"])];
    let weights = calculate_weights(&owned(&["b", "a", "c"]), &steps).unwrap();
    let json = serde_json::to_string_pretty(&weights).unwrap();
    assert_snapshot!(json, @r#"
    {
      "a": 1.667,
      "b": 0.583,
      "c": 0.0
    }
    "#);
}
