//! CLI layer: terminal console, styling, and command wiring

pub mod console;
pub mod rebase;
pub mod style;

pub use console::TerminalConsole;
