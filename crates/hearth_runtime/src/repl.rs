//! The interactive read loop.

use hearth_foundation::Result;
use hearth_parser::split;

use crate::console::{Console, Outcome};
use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Default prompt.
const PROMPT: &str = "(hearth) ";

/// The interactive REPL: reads lines, routes them through the console,
/// prints results. Exits on `quit` or end of input.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The command dispatcher.
    console: Console,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor, completing
    /// over the command words and the registered kind names.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(console: Console) -> Result<Self> {
        let mut keywords: Vec<String> = ["create", "show", "destroy", "update", "all", "count", "quit"]
            .into_iter()
            .map(String::from)
            .collect();
        keywords.extend(console.schemas().kinds().map(String::from));
        let editor = RustylineEditor::new(keywords)?;
        Ok(Self::with_editor(editor, console))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, console: Console) -> Self {
        Self {
            editor,
            console,
            prompt: PROMPT.to_string(),
        }
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the console.
    #[must_use]
    pub const fn console(&self) -> &Console {
        &self.console
    }

    /// Returns a mutable reference to the console.
    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }

    /// Runs the read loop until `quit`, end of input, or a fatal error.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails or a command cannot
    /// persist the store.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Eof => break,
                ReadResult::Interrupted => {
                    println!();
                }
                ReadResult::Line(line) => {
                    if !split(&line).is_empty() {
                        self.editor.add_history(&line);
                    }
                    match self.console.execute(&line)? {
                        Outcome::Output(text) => println!("{text}"),
                        Outcome::Silent => {}
                        Outcome::Quit => break,
                    }
                }
            }
        }
        Ok(())
    }
}
