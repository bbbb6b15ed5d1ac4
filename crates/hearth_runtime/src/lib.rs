//! Console dispatcher, REPL, and CLI for Hearth.
//!
//! This crate provides:
//! - [`Console`] - The command dispatcher: one canonical command table
//!   fed by both surface syntaxes
//! - [`Repl`] - The interactive read loop over a swappable [`LineEditor`]
//! - The `hearth` binary entry point

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod console;
pub mod editor;
pub mod repl;

pub use console::{Console, Outcome};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
