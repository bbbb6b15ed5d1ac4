//! Integration tests for the dotted-call normalizer.

use hearth_parser::{normalize, split};

#[test]
fn every_action_rewrites() {
    assert_eq!(normalize("User.all()"), "all User");
    assert_eq!(normalize("User.count()"), "count User");
    assert_eq!(normalize("User.create()"), "create User");
    assert_eq!(normalize("User.show(\"abc\")"), "show User \"abc\"");
    assert_eq!(normalize("User.destroy(\"abc\")"), "destroy User \"abc\"");
}

#[test]
fn scalar_argument_list_joins_on_commas() {
    assert_eq!(
        normalize("Place.update(\"abc\", \"max_guest\", 4)"),
        "update Place \"abc\" \"max_guest\" 4"
    );
}

#[test]
fn quoted_arguments_survive_for_the_tokenizer() {
    // normalize carries quotes through untouched; split strips them.
    let line = normalize("User.show(\"abc\")");
    assert_eq!(line, "show User \"abc\"");
    assert_eq!(split(&line), vec!["show", "User", "abc"]);
}

#[test]
fn dict_literal_single_quotes_become_json() {
    assert_eq!(
        normalize("Place.update(\"abc\", {'max_guest': 4, 'name': 'Loft'})"),
        "update Place abc '{\"max_guest\": 4, \"name\": \"Loft\"}'"
    );
}

#[test]
fn identity_before_literal_loses_trailing_comma() {
    assert_eq!(
        normalize("User.update(\"abc\",{'age': 27})"),
        "update User abc '{\"age\": 27}'"
    );
}

#[test]
fn shell_style_lines_pass_through() {
    for line in ["create User", "all", "count City", "update User abc age 27"] {
        assert_eq!(normalize(line), line);
    }
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(normalize("  City.count()  "), "count City");
}

#[test]
fn malformed_dotted_calls_degrade_gracefully() {
    // No exceptions, just passthrough of whatever was derived.
    assert_eq!(normalize("User.show("), "User.show(");
    assert_eq!(normalize("()"), "()");
    assert_eq!(normalize("User.show)"), "User.show)");
    assert_eq!(normalize("just (parenthetical) text"), "just (parenthetical) text");
}

proptest::proptest! {
    // Normalization never panics on arbitrary input.
    #[test]
    fn never_panics(line in "[ -~]{0,60}") {
        let _ = normalize(&line);
    }
}
