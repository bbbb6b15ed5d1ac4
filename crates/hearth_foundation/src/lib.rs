//! Core types for the Hearth system.
//!
//! This crate provides:
//! - [`Value`] - The scalar attribute value type for all record data
//! - [`Error`] - Error types shared across the workspace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod value;

pub use error::{Error, ErrorKind};
pub use value::Value;

/// Result type alias using the Hearth error type.
pub type Result<T> = std::result::Result<T, Error>;
