//! Version-control command runner
//!
//! The rebase workflow drives git exclusively through the [`GitClient`]
//! trait, so tests can substitute a recording mock for the real binary.

mod command;

pub use command::GitCommandClient;

use crate::error::Result;

/// Captured result of a git invocation
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Exit status (-1 if the process was killed by a signal)
    pub status: i32,
    /// Captured stdout
    pub stdout: String,
    /// Captured stderr
    pub stderr: String,
}

impl GitOutput {
    /// Whether the command exited zero
    #[must_use]
    pub const fn success(&self) -> bool {
        self.status == 0
    }
}

/// Runner for git commands against a single working tree
///
/// Two execution modes: [`run`] treats any non-zero exit as an error and
/// fails the calling operation, [`run_graceful`] hands the status back to
/// the caller and only errors when the process could not be spawned at all.
/// The rebase workflow runs exactly one step (the rebase itself) gracefully;
/// its exit status is a decision signal, not a failure.
///
/// [`run`]: GitClient::run
/// [`run_graceful`]: GitClient::run_graceful
pub trait GitClient: Send + Sync {
    /// Run a git command, erroring on non-zero exit
    fn run(&self, args: &[&str]) -> Result<GitOutput>;

    /// Run a git command, never erroring on non-zero exit
    fn run_graceful(&self, args: &[&str]) -> Result<GitOutput>;

    /// Whether the working tree has uncommitted changes to tracked files
    fn has_local_changes(&self) -> Result<bool>;

    /// The currently checked out branch name, or the revision hash when
    /// HEAD is detached
    fn current_branch_or_revision(&self) -> Result<String>;
}
