//! The file-backed object store.
//!
//! The store owns every live record for the lifetime of the process,
//! keyed by the composite `kind.id` key, and round-trips them through
//! a single JSON document.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use hearth_foundation::{Error, Result};

use crate::record::Record;
use crate::schema::SchemaRegistry;

/// Default storage file name.
pub const DEFAULT_FILE: &str = "hearth.json";

/// Process-wide registry of live records with JSON persistence.
#[derive(Debug)]
pub struct FileStore {
    /// Path of the persisted JSON document.
    path: PathBuf,
    /// Live records keyed by `kind.id`.
    records: BTreeMap<String, Record>,
}

impl FileStore {
    /// Creates an empty store persisting to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: BTreeMap::new(),
        }
    }

    /// Returns the storage file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inserts a record under its composite key.
    ///
    /// An existing entry under the same key is silently replaced; UUID
    /// identities make a collision unreachable in practice.
    pub fn register(&mut self, record: Record) {
        self.records.insert(record.key(), record);
    }

    /// Returns the full registry, keyed by `kind.id`.
    #[must_use]
    pub fn all(&self) -> &BTreeMap<String, Record> {
        &self.records
    }

    /// Returns the records of one kind.
    pub fn iter_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Record> {
        self.records
            .values()
            .filter(move |record| record.kind() == kind)
    }

    /// Looks up a record by kind and identity.
    #[must_use]
    pub fn find(&self, kind: &str, id: &str) -> Option<&Record> {
        self.records.get(&composite_key(kind, id))
    }

    /// Looks up a record mutably by kind and identity.
    pub fn find_mut(&mut self, kind: &str, id: &str) -> Option<&mut Record> {
        self.records.get_mut(&composite_key(kind, id))
    }

    /// Removes a record; returns whether an entry was present.
    ///
    /// Absence is not an error at this layer — the dispatcher reports
    /// "not found" to the user.
    pub fn delete(&mut self, kind: &str, id: &str) -> bool {
        self.records.remove(&composite_key(kind, id)).is_some()
    }

    /// Returns the number of live records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clears the registry. Test isolation only; not reachable from the
    /// command surface.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    /// Serializes every record into one JSON object keyed by `kind.id`
    /// and overwrites the storage file.
    ///
    /// # Errors
    ///
    /// A write failure is fatal and propagates; there is no degraded
    /// mode for a save that did not happen.
    pub fn persist(&self) -> Result<()> {
        let mut document = serde_json::Map::new();
        for (key, record) in &self.records {
            document.insert(key.clone(), serde_json::Value::Object(record.to_json()));
        }
        let text = serde_json::to_string(&document)
            .map_err(|e| Error::serialization(e.to_string()))?;
        fs::write(&self.path, text).map_err(|e| Error::io(self.path.display().to_string(), &e))
    }

    /// Loads the storage file and registers every persisted record.
    ///
    /// A missing file is a valid empty-store startup and a no-op. An
    /// empty or unparsable file is tolerated the same way, but reported
    /// as a warning. Inside valid JSON, however, an entry whose
    /// `__class__` is missing, malformed, or unknown to the schema
    /// registry is a hard error: that is corrupt persisted state, not
    /// an empty one.
    ///
    /// # Errors
    ///
    /// Returns an error on unreadable files (other than missing), on
    /// corrupt entries, and on unknown kinds.
    pub fn reload(&mut self, schemas: &SchemaRegistry) -> Result<()> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(Error::io(self.path.display().to_string(), &e)),
        };
        if text.trim().is_empty() {
            return Ok(());
        }

        let document = match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "storage file is not a JSON object; starting with an empty store"
                );
                return Ok(());
            }
        };

        for (key, value) in document {
            let serde_json::Value::Object(entry) = value else {
                return Err(Error::serialization(format!(
                    "persisted entry '{key}' is not an object"
                )));
            };
            let kind = entry
                .get("__class__")
                .and_then(serde_json::Value::as_str)
                .ok_or_else(|| {
                    Error::serialization(format!("persisted entry '{key}' has no __class__"))
                })?;
            if !schemas.exists(kind) {
                return Err(Error::unknown_kind(kind));
            }
            let record = Record::from_attributes(kind, schemas.defaults_for(kind), &entry)?;
            self.register(record);
        }
        Ok(())
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_FILE)
    }
}

fn composite_key(kind: &str, id: &str) -> String {
    format!("{kind}.{id}")
}
