//! Line parsing for the Hearth console.
//!
//! Two surface syntaxes reach the dispatcher: space-separated
//! shell-style commands and dotted method calls (`Kind.action(args)`).
//! This crate collapses them into one canonical form:
//!
//! - [`normalize`] rewrites a dotted call into the shell-style form,
//!   passing anything else through unchanged
//! - [`split`] tokenizes a shell-style line, respecting single and
//!   double quotes
//!
//! Both are pure text functions with no semantic validation; the
//! dispatcher is the authoritative error source.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rewrite;
pub mod tokenizer;

pub use rewrite::normalize;
pub use tokenizer::split;
