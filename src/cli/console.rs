//! Terminal-backed console

use crate::cli::style::Stylize;
use anstream::{eprintln, println};
use dialoguer::Confirm;
use prebase::console::Console;
use prebase::error::{Error, Result};

/// [`Console`] implementation printing to the terminal and prompting with
/// dialoguer
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    /// Create a terminal console
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn info(&self, msg: &str) {
        println!("{msg}");
    }

    fn error(&self, msg: &str) {
        eprintln!("{}", msg.warn());
    }

    fn confirm(&self, question: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(|e| Error::Internal(format!("Failed to read confirmation: {e}")))
    }
}
