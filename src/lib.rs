//! Hearth - Interactive console for typed lodging records
//!
//! This crate re-exports all layers of the Hearth system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: hearth_runtime    — Console dispatcher, REPL, CLI
//! Layer 2: hearth_parser     — Tokenizer, dotted-call normalizer
//! Layer 1: hearth_store      — Records, schemas, file-backed object store
//! Layer 0: hearth_foundation — Core types (Value, Error)
//! ```

pub use hearth_foundation as foundation;
pub use hearth_parser as parser;
pub use hearth_runtime as runtime;
pub use hearth_store as store;
