//! Kind schemas and the schema registry.
//!
//! A schema supplies the *default* attributes a fresh record of a kind
//! starts with. It never constrains which attributes may later be set;
//! the attribute bag stays open.

use std::collections::BTreeMap;

use hearth_foundation::Value;

/// Schema definition for one entity kind.
#[derive(Clone, Debug, PartialEq)]
pub struct KindSchema {
    /// Kind name (e.g. `User`, `City`).
    name: String,
    /// Declared fields with their default values.
    defaults: Vec<(String, Value)>,
}

impl KindSchema {
    /// Creates a new kind schema with no declared fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            defaults: Vec::new(),
        }
    }

    /// Adds a declared field with its default value.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.defaults.push((name.into(), default.into()));
        self
    }

    /// Returns the kind name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared fields and their defaults.
    #[must_use]
    pub fn defaults(&self) -> &[(String, Value)] {
        &self.defaults
    }
}

/// Static mapping from kind name to its schema.
///
/// Lookups for unknown kinds fail silently (false / empty); callers,
/// not the registry, produce user-facing errors.
#[derive(Clone, Debug, Default)]
pub struct SchemaRegistry {
    kinds: BTreeMap<String, KindSchema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the registry of builtin kinds.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(KindSchema::new("BaseModel"));
        registry.register(
            KindSchema::new("User")
                .with_field("email", "")
                .with_field("password", "")
                .with_field("first_name", "")
                .with_field("last_name", ""),
        );
        registry.register(KindSchema::new("State").with_field("name", ""));
        registry.register(
            KindSchema::new("City")
                .with_field("state_id", "")
                .with_field("name", ""),
        );
        registry.register(
            KindSchema::new("Place")
                .with_field("city_id", "")
                .with_field("user_id", "")
                .with_field("name", "")
                .with_field("description", "")
                .with_field("number_rooms", 0_i64)
                .with_field("number_bathrooms", 0_i64)
                .with_field("max_guest", 0_i64)
                .with_field("price_by_night", 0_i64)
                .with_field("latitude", 0.0)
                .with_field("longitude", 0.0)
                .with_field("amenity_ids", Value::List(Vec::new())),
        );
        registry.register(
            KindSchema::new("Review")
                .with_field("place_id", "")
                .with_field("user_id", "")
                .with_field("text", ""),
        );
        registry.register(KindSchema::new("Amenity").with_field("name", ""));
        registry
    }

    /// Registers a kind schema, replacing any existing schema of the same name.
    pub fn register(&mut self, schema: KindSchema) {
        self.kinds.insert(schema.name().to_string(), schema);
    }

    /// Returns true if the kind is registered.
    #[must_use]
    pub fn exists(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    /// Returns the declared defaults for a kind, empty for unknown kinds.
    #[must_use]
    pub fn defaults_for(&self, kind: &str) -> BTreeMap<String, Value> {
        self.kinds
            .get(kind)
            .map(|schema| schema.defaults().iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the registered kind names.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }
}
