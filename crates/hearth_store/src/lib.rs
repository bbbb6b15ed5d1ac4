//! Records, kind schemas, and the file-backed object store for Hearth.
//!
//! This crate provides:
//! - [`Record`] - One instance of an entity kind: identity, timestamps,
//!   and an open attribute bag
//! - [`KindSchema`] / [`SchemaRegistry`] - The static kind → default-fields table
//! - [`FileStore`] - The process-wide registry of live records and its
//!   JSON persistence

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod record;
pub mod schema;
pub mod store;

pub use record::Record;
pub use schema::{KindSchema, SchemaRegistry};
pub use store::FileStore;
