//! Integration tests for records and schemas.
//!
//! Round-trip, identity uniqueness, and timestamp monotonicity.

use std::collections::BTreeSet;

use hearth_foundation::Value;
use hearth_store::{Record, SchemaRegistry};
use proptest::prelude::*;

const KINDS: [&str; 7] = [
    "BaseModel", "User", "State", "City", "Place", "Review", "Amenity",
];

// =============================================================================
// Round-trip
// =============================================================================

#[test]
fn round_trip_every_kind() {
    let schemas = SchemaRegistry::builtin();
    for kind in KINDS {
        let record = Record::new(kind, schemas.defaults_for(kind));
        let map = record.to_json();
        assert_eq!(map["__class__"], serde_json::json!(kind));

        let back = Record::from_attributes(kind, schemas.defaults_for(kind), &map).unwrap();
        assert_eq!(back.id(), record.id());
        assert_eq!(back.created_at(), record.created_at());
        assert_eq!(back.updated_at(), record.updated_at());
        assert_eq!(back.attributes(), record.attributes());
    }
}

#[test]
fn round_trip_preserves_extra_attributes() {
    let schemas = SchemaRegistry::builtin();
    let mut record = Record::new("User", schemas.defaults_for("User"));
    record.set("grade", Value::from("1st class"));
    record.set("age", Value::Int(27));
    record.set("score", Value::Float(99.5));

    let back =
        Record::from_attributes("User", schemas.defaults_for("User"), &record.to_json()).unwrap();
    assert_eq!(back, record);
}

proptest! {
    // Any scalar attribute survives serialize → reconstruct.
    #[test]
    fn round_trip_arbitrary_scalars(
        name in "f_[a-z]{1,8}",
        text in "[ -~]{0,20}",
        number in -1_000_000_000i64..1_000_000_000i64,
        ratio in -1.0e9f64..1.0e9f64,
    ) {
        let mut record = Record::new("BaseModel", std::collections::BTreeMap::new());
        record.set(name.clone(), Value::Str(text));
        record.set("n", Value::Int(number));
        record.set("r", Value::Float(ratio));

        let back = Record::from_attributes(
            "BaseModel",
            std::collections::BTreeMap::new(),
            &record.to_json(),
        ).unwrap();
        prop_assert_eq!(back, record);
    }
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn identities_are_unique_composite_keys() {
    let schemas = SchemaRegistry::builtin();
    let mut keys = BTreeSet::new();
    for _ in 0..20 {
        for kind in KINDS {
            let record = Record::new(kind, schemas.defaults_for(kind));
            assert!(keys.insert(record.key()), "duplicate key {}", record.key());
        }
    }
    assert_eq!(keys.len(), 140);
}

#[test]
fn identity_is_36_character_uuid() {
    let record = Record::new("User", std::collections::BTreeMap::new());
    assert_eq!(record.id().len(), 36);
    assert!(!record.id().contains('.'));
}

// =============================================================================
// Timestamps
// =============================================================================

#[test]
fn touch_is_monotonic_and_preserves_created_at() {
    let mut record = Record::new("State", std::collections::BTreeMap::new());
    let created = record.created_at();
    let mut last = record.updated_at();
    for _ in 0..100 {
        record.touch();
        assert!(record.updated_at() >= last);
        last = record.updated_at();
    }
    assert_eq!(record.created_at(), created);
    assert!(record.updated_at() >= record.created_at());
}

#[test]
fn elapsed_time_strictly_advances_updated_at() {
    let mut record = Record::new("State", std::collections::BTreeMap::new());
    let before = record.updated_at();
    std::thread::sleep(std::time::Duration::from_millis(2));
    record.touch();
    assert!(record.updated_at() > before);
}

// =============================================================================
// Serialized form
// =============================================================================

#[test]
fn serialized_timestamps_are_iso_strings_but_rendered_ones_are_not() {
    let record = Record::new("User", std::collections::BTreeMap::new());
    let map = record.to_json();
    let iso = map["created_at"].as_str().unwrap().to_string();
    assert_eq!(iso.len(), 26);

    // render() shows the native debug form, unquoted
    let rendered = record.to_string();
    assert!(!rendered.contains(&format!("'{iso}'")));
    assert!(rendered.contains("'created_at': "));
}
