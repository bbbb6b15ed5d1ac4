//! End-to-end session scenarios over a real storage file.

use std::fs;

use hearth_foundation::Value;
use hearth_runtime::{Console, Outcome};
use tempfile::TempDir;

fn output(console: &mut Console, line: &str) -> String {
    match console.execute(line).unwrap() {
        Outcome::Output(text) => text,
        other => panic!("expected output for {line:?}, got {other:?}"),
    }
}

#[test]
fn create_user_prints_uuid_and_files_one_entry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hearth.json");
    let mut console = Console::new(&path).unwrap();

    let id = output(&mut console, "create User");
    assert_eq!(id.len(), 36);

    let text = fs::read_to_string(&path).unwrap();
    let document: serde_json::Value = serde_json::from_str(&text).unwrap();
    let entries = document.as_object().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[&format!("User.{id}")]["__class__"], "User");
}

#[test]
fn show_missing_instance() {
    let dir = TempDir::new().unwrap();
    let mut console = Console::new(dir.path().join("hearth.json")).unwrap();
    assert_eq!(
        output(&mut console, "show BaseModel 12345"),
        "** no instance found **"
    );
}

#[test]
fn dotted_dict_update_applies_and_touches() {
    let dir = TempDir::new().unwrap();
    let mut console = Console::new(dir.path().join("hearth.json")).unwrap();
    let id = output(&mut console, "create User");
    let created = console.store().find("User", &id).unwrap().created_at();

    console
        .execute(&format!(
            "User.update(\"{id}\", {{'grade': '1st class', 'age': 27}})"
        ))
        .unwrap();

    let record = console.store().find("User", &id).unwrap();
    assert_eq!(record.get("grade"), Some(&Value::from("1st class")));
    assert_eq!(record.get("age"), Some(&Value::Int(27)));
    assert!(record.updated_at() >= created);
}

#[test]
fn all_on_empty_store_prints_empty_brackets() {
    let dir = TempDir::new().unwrap();
    let mut console = Console::new(dir.path().join("hearth.json")).unwrap();
    assert_eq!(output(&mut console, "all"), "[]");
    assert_eq!(output(&mut console, "User.all()"), "[]");
}

#[test]
fn dotted_count_filters_by_kind() {
    let dir = TempDir::new().unwrap();
    let mut console = Console::new(dir.path().join("hearth.json")).unwrap();
    console.execute("create City").unwrap();
    console.execute("create City").unwrap();
    console.execute("create User").unwrap();
    assert_eq!(output(&mut console, "City.count()"), "2");
}

#[test]
fn full_lifecycle_across_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hearth.json");

    let id = {
        let mut console = Console::new(&path).unwrap();
        let id = output(&mut console, "create Place");
        console
            .execute(&format!("update Place {id} name \"Loft\""))
            .unwrap();
        console
            .execute(&format!("update Place {id} max_guest 6"))
            .unwrap();
        id
    };

    // Second session: values survived, then tear down.
    let mut console = Console::new(&path).unwrap();
    let record = console.store().find("Place", &id).unwrap();
    assert_eq!(record.get("name"), Some(&Value::from("Loft")));
    assert_eq!(record.get("max_guest"), Some(&Value::Int(6)));

    console.execute(&format!("destroy Place {id}")).unwrap();
    assert_eq!(output(&mut console, "count"), "0");

    // Third session sees the empty document.
    let console = Console::new(&path).unwrap();
    assert!(console.store().is_empty());
}

#[test]
fn listing_mixed_kinds_frames_and_joins() {
    let dir = TempDir::new().unwrap();
    let mut console = Console::new(dir.path().join("hearth.json")).unwrap();
    console.execute("create Amenity").unwrap();
    console.execute("create State").unwrap();

    let listed = output(&mut console, "all");
    assert!(listed.starts_with('['));
    assert!(listed.ends_with(']'));
    assert!(listed.contains("[Amenity]"));
    assert!(listed.contains("[State]"));
    assert!(listed.contains(", "));
}

#[test]
fn unknown_syntax_echoes_the_normalized_line() {
    let dir = TempDir::new().unwrap();
    let mut console = Console::new(dir.path().join("hearth.json")).unwrap();
    assert_eq!(
        output(&mut console, "teleport User"),
        "*** Unknown syntax: teleport User"
    );
    // Dotted lines echo their rewritten form.
    assert_eq!(
        output(&mut console, "User.teleport()"),
        "*** Unknown syntax: teleport User"
    );
}
