//! The record type: one instance of an entity kind.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDateTime, Timelike};
use hearth_foundation::{Error, Result, Value};
use uuid::Uuid;

/// ISO-8601 output format with fixed microsecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Parse format accepting any sub-second precision.
const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Keys carried by every serialized record that are not attributes.
const RESERVED_KEYS: [&str; 4] = ["id", "created_at", "updated_at", "__class__"];

/// The current local time, truncated to microsecond resolution.
///
/// Truncation keeps timestamps exactly representable in the ISO-8601
/// microsecond serialization, so a persisted record reloads equal.
fn now() -> NaiveDateTime {
    let now = chrono::Local::now().naive_local();
    now.with_nanosecond(now.nanosecond() / 1_000 * 1_000)
        .unwrap_or(now)
}

/// One instance of an entity kind.
///
/// A record is a generic, schema-less attribute bag plus identity and
/// timestamp bookkeeping. The kind and identity are immutable after
/// construction; attributes may be extended beyond the schema's
/// declared fields at any time.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    kind: String,
    id: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    attributes: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a fresh record: new UUID identity, both timestamps set
    /// to now, attributes seeded from the kind's schema defaults.
    #[must_use]
    pub fn new(kind: &str, defaults: impl IntoIterator<Item = (String, Value)>) -> Self {
        let now = now();
        Self {
            kind: kind.to_string(),
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            attributes: defaults.into_iter().collect(),
        }
    }

    /// Reconstructs a record from serialized attributes (the reload path).
    ///
    /// `id`, `created_at`, and `updated_at` entries are parsed out of the
    /// map when present; every other entry is copied verbatim into the
    /// attribute bag, overriding the schema defaults. Reload data written
    /// by the store always carries identity and timestamps; if they are
    /// missing, fresh values are generated.
    ///
    /// # Errors
    ///
    /// Returns an error if a timestamp string is not ISO-8601, if `id`
    /// is not a string, or if an attribute value has no scalar
    /// representation.
    pub fn from_attributes(
        kind: &str,
        defaults: impl IntoIterator<Item = (String, Value)>,
        entries: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<Self> {
        let id = match entries.get("id") {
            Some(value) => value
                .as_str()
                .ok_or_else(|| Error::serialization(format!("non-string id: {value}")))?
                .to_string(),
            None => Uuid::new_v4().to_string(),
        };
        let created_at = match entries.get("created_at") {
            Some(value) => parse_timestamp(value)?,
            None => now(),
        };
        let updated_at = match entries.get("updated_at") {
            Some(value) => parse_timestamp(value)?,
            None => created_at,
        };

        let mut attributes: BTreeMap<String, Value> = defaults.into_iter().collect();
        for (key, value) in entries {
            if RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            attributes.insert(key.clone(), Value::from_json(value)?);
        }

        Ok(Self {
            kind: kind.to_string(),
            id,
            created_at,
            updated_at,
            attributes,
        })
    }

    /// Returns the kind name.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the identity (UUID text form).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the composite registry key, `kind.id`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}.{}", self.kind, self.id)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Returns the last-update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    /// Returns an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Sets an attribute. The bag is open: names outside the schema's
    /// declared fields are accepted.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.attributes.insert(name.into(), value);
    }

    /// Returns the attribute bag.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    /// Refreshes `updated_at`. Never moves backward: under clock
    /// regression the previous value is kept.
    pub fn touch(&mut self) {
        let now = now();
        if now > self.updated_at {
            self.updated_at = now;
        }
    }

    /// Serializes the record to a flat JSON object: every attribute
    /// plus `id`, ISO-8601 `created_at`/`updated_at`, and `__class__`.
    ///
    /// The bookkeeping keys are written last, so attributes that shadow
    /// them never reach the persisted file.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map: serde_json::Map<String, serde_json::Value> = self
            .attributes
            .iter()
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect();
        map.insert("id".to_string(), serde_json::Value::from(self.id.clone()));
        map.insert(
            "created_at".to_string(),
            serde_json::Value::from(self.created_at.format(TIMESTAMP_FORMAT).to_string()),
        );
        map.insert(
            "updated_at".to_string(),
            serde_json::Value::from(self.updated_at.format(TIMESTAMP_FORMAT).to_string()),
        );
        map.insert(
            "__class__".to_string(),
            serde_json::Value::from(self.kind.clone()),
        );
        map
    }
}

/// Human-readable form: `[Kind] (id) {dict}`.
///
/// Timestamps render in their native debug form here, not the ISO
/// string form used by [`Record::to_json`] — the asymmetry is part of
/// the command surface's output format.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ({}) {{'id': '{}', 'created_at': {:?}, 'updated_at': {:?}",
            self.kind, self.id, self.id, self.created_at, self.updated_at
        )?;
        for (key, value) in &self.attributes {
            write!(f, ", '{key}': {value}")?;
        }
        write!(f, "}}")
    }
}

fn parse_timestamp(value: &serde_json::Value) -> Result<NaiveDateTime> {
    let text = value
        .as_str()
        .ok_or_else(|| Error::timestamp(value.to_string()))?;
    NaiveDateTime::parse_from_str(text, TIMESTAMP_PARSE_FORMAT).map_err(|_| Error::timestamp(text))
}
