//! Console capability for the rebase workflow
//!
//! The workflow reports progress and asks its one yes/no question through
//! this trait, so tests can drive it with a scripted double instead of a
//! real terminal.

use crate::error::Result;

/// User-facing output and confirmation prompt
pub trait Console: Send + Sync {
    /// Print an informational message
    fn info(&self, msg: &str);

    /// Print an error message
    fn error(&self, msg: &str);

    /// Ask the user a yes/no question
    ///
    /// Only invoked in interactive environments; see [`is_non_interactive`].
    fn confirm(&self, question: &str) -> Result<bool>;
}

/// Whether the process is running in a non-interactive/automated
/// environment, signalled by the `CI` environment variable
#[must_use]
pub fn is_non_interactive() -> bool {
    std::env::var_os("CI").is_some()
}
