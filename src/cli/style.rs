//! Terminal styling helpers

use owo_colors::OwoColorize;

/// Check mark glyph
pub const CHECK: &str = "✓";

/// Styling extensions for displayable values
pub trait Stylize: std::fmt::Display + Sized {
    /// De-emphasized text
    fn muted(&self) -> String {
        format!("{}", self.dimmed())
    }

    /// Emphasized text
    fn emphasis(&self) -> String {
        format!("{}", self.bold())
    }

    /// Accent color for names and values
    fn accent(&self) -> String {
        format!("{}", self.cyan())
    }

    /// Success color
    fn success(&self) -> String {
        format!("{}", self.green())
    }

    /// Warning color
    fn warn(&self) -> String {
        format!("{}", self.yellow())
    }
}

impl<T: std::fmt::Display> Stylize for T {}

/// Green check mark
#[must_use]
pub fn check() -> String {
    format!("{}", CHECK.green())
}
