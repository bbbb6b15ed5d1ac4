//! The command dispatcher.
//!
//! One command table serves both surface syntaxes: the raw line is
//! normalized (dotted calls rewritten to shell style), tokenized, and
//! routed here. User input errors are printable one-liners and never
//! faults; only persistence failures propagate as errors.

use std::path::PathBuf;

use hearth_foundation::{Result, Value};
use hearth_parser::{normalize, split};
use hearth_store::{FileStore, Record, SchemaRegistry};

const CLASS_MISSING: &str = "** class name missing **";
const CLASS_UNKNOWN: &str = "** class doesn't exist **";
const ID_MISSING: &str = "** instance id missing **";
const NO_INSTANCE: &str = "** no instance found **";
const ATTR_MISSING: &str = "** attribute name missing **";
const VALUE_MISSING: &str = "** value missing **";

/// Result of executing one command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print (a result or a user-input error message).
    Output(String),
    /// Command succeeded with nothing to print.
    Silent,
    /// Terminate the session.
    Quit,
}

/// The console: schema registry plus object store behind one command table.
#[derive(Debug)]
pub struct Console {
    store: FileStore,
    schemas: SchemaRegistry,
}

impl Console {
    /// Opens a console over the given storage file, reloading any
    /// persisted records.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage file exists but holds corrupt
    /// entries (unknown kinds, malformed timestamps) or cannot be read.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let schemas = SchemaRegistry::builtin();
        let mut store = FileStore::new(path);
        store.reload(&schemas)?;
        Ok(Self { store, schemas })
    }

    /// Creates a console from pre-built parts (tests and embedding).
    #[must_use]
    pub fn with_store(store: FileStore, schemas: SchemaRegistry) -> Self {
        Self { store, schemas }
    }

    /// Returns the object store.
    #[must_use]
    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// Returns the schema registry.
    #[must_use]
    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    /// Executes one raw input line through normalize → tokenize → dispatch.
    ///
    /// # Errors
    ///
    /// Returns an error only for persistence failures; every user input
    /// error comes back as [`Outcome::Output`] with the canonical
    /// message.
    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        let normalized = normalize(line);
        let tokens = split(&normalized);
        let Some((command, args)) = tokens.split_first() else {
            return Ok(Outcome::Silent);
        };

        match command.as_str() {
            "create" => self.create(args),
            "show" => Ok(self.show(args)),
            "destroy" => self.destroy(args),
            "update" => self.update(args),
            "all" => Ok(self.list(args)),
            "count" => Ok(self.count(args)),
            "quit" => Ok(Outcome::Quit),
            _ => Ok(Outcome::Output(format!("*** Unknown syntax: {normalized}"))),
        }
    }

    /// `create <kind>`: register a fresh record, persist, print its id.
    fn create(&mut self, args: &[String]) -> Result<Outcome> {
        let kind = match self.validate_kind(args) {
            Ok(kind) => kind,
            Err(message) => return Ok(Outcome::Output(message.to_string())),
        };
        let record = Record::new(kind, self.schemas.defaults_for(kind));
        let id = record.id().to_string();
        self.store.register(record);
        self.store.persist()?;
        Ok(Outcome::Output(id))
    }

    /// `show <kind> <id>`: print the record's rendered form.
    fn show(&self, args: &[String]) -> Outcome {
        match self.validate_instance(args) {
            Ok((kind, id)) => match self.store.find(kind, id) {
                Some(record) => Outcome::Output(record.to_string()),
                None => Outcome::Output(NO_INSTANCE.to_string()),
            },
            Err(message) => Outcome::Output(message.to_string()),
        }
    }

    /// `destroy <kind> <id>`: remove the record and persist.
    fn destroy(&mut self, args: &[String]) -> Result<Outcome> {
        let (kind, id) = match self.validate_instance(args) {
            Ok(target) => target,
            Err(message) => return Ok(Outcome::Output(message.to_string())),
        };
        self.store.delete(kind, id);
        self.store.persist()?;
        Ok(Outcome::Silent)
    }

    /// `update <kind> <id> <field> <value>` or `update <kind> <id> {dict}`.
    fn update(&mut self, args: &[String]) -> Result<Outcome> {
        let (kind, id) = match self.validate_instance(args) {
            Ok(target) => target,
            Err(message) => return Ok(Outcome::Output(message.to_string())),
        };
        let Some(third) = args.get(2) else {
            return Ok(Outcome::Output(ATTR_MISSING.to_string()));
        };

        let updates = if third.starts_with('{') && third.ends_with('}') {
            // Dict form: values applied as given, no coercion.
            let json_text = third.replace('\'', "\"");
            let Ok(serde_json::Value::Object(entries)) = serde_json::from_str(&json_text) else {
                return Ok(Outcome::Output(ATTR_MISSING.to_string()));
            };
            if entries.is_empty() {
                // Valid no-op: nothing changed, so no touch and no write.
                return Ok(Outcome::Silent);
            }
            let mut updates = Vec::with_capacity(entries.len());
            for (key, value) in &entries {
                let Ok(value) = Value::from_json(value) else {
                    return Ok(Outcome::Output(VALUE_MISSING.to_string()));
                };
                updates.push((key.clone(), value));
            }
            updates
        } else {
            // Single-field form: one pair, numeric-looking value coerced,
            // further positional tokens ignored.
            let Some(value) = args.get(3) else {
                return Ok(Outcome::Output(VALUE_MISSING.to_string()));
            };
            vec![(third.clone(), coerce_scalar(value))]
        };

        // validate_instance guarantees presence
        if let Some(record) = self.store.find_mut(kind, id) {
            for (key, value) in updates {
                record.set(key, value);
            }
            record.touch();
        }
        self.store.persist()?;
        Ok(Outcome::Silent)
    }

    /// `all [kind]`: bracketed, comma-joined rendered records.
    fn list(&self, args: &[String]) -> Outcome {
        match self.rendered(args) {
            Ok(items) => Outcome::Output(format!("[{}]", items.join(", "))),
            Err(message) => Outcome::Output(message.to_string()),
        }
    }

    /// `count [kind]`: number of matching records.
    fn count(&self, args: &[String]) -> Outcome {
        match self.rendered(args) {
            Ok(items) => Outcome::Output(items.len().to_string()),
            Err(message) => Outcome::Output(message.to_string()),
        }
    }

    /// Renders every record, optionally filtered to one kind.
    fn rendered(&self, args: &[String]) -> std::result::Result<Vec<String>, &'static str> {
        match args.first() {
            Some(kind) => {
                if !self.schemas.exists(kind) {
                    return Err(CLASS_UNKNOWN);
                }
                Ok(self.store.iter_kind(kind).map(ToString::to_string).collect())
            }
            None => Ok(self.store.all().values().map(ToString::to_string).collect()),
        }
    }

    /// Validation chain: kind present → kind known.
    fn validate_kind<'a>(&self, args: &'a [String]) -> std::result::Result<&'a str, &'static str> {
        let kind = args.first().ok_or(CLASS_MISSING)?;
        if !self.schemas.exists(kind) {
            return Err(CLASS_UNKNOWN);
        }
        Ok(kind)
    }

    /// Validation chain: kind present → kind known → id present → record exists.
    fn validate_instance<'a>(
        &self,
        args: &'a [String],
    ) -> std::result::Result<(&'a str, &'a str), &'static str> {
        let kind = self.validate_kind(args)?;
        let id = args.get(1).ok_or(ID_MISSING)?;
        if self.store.find(kind, id).is_none() {
            return Err(NO_INSTANCE);
        }
        Ok((kind, id))
    }
}

/// Coerces a single-field update value: a purely numeric token becomes
/// an integer, everything else stays a string.
fn coerce_scalar(token: &str) -> Value {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        token
            .parse::<i64>()
            .map_or_else(|_| Value::from(token), Value::Int)
    } else {
        Value::from(token)
    }
}
