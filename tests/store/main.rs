//! Integration tests for the store layer.
//!
//! Covers records, schemas, and the file-backed object store.

mod records;
