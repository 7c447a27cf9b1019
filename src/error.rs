//! Error types for prebase

use thiserror::Error;

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a rebase run
#[derive(Debug, Error)]
pub enum Error {
    /// The working tree has uncommitted changes
    #[error("cannot perform rebase: found uncommitted local changes, commit or stash them first")]
    DirtyWorkTree,

    /// The current user may not push to the PR's head branch
    #[error(
        "cannot rebase PR #{0}: you did not author it and the author has not \
         allowed maintainers to modify it"
    )]
    PushNotAuthorized(u64),

    /// A git command exited non-zero in strict mode
    #[error("git {command} failed with status {status}: {stderr}")]
    GitCommand {
        /// The command line that was run (token redacted)
        command: String,
        /// Exit status of the command
        status: i32,
        /// Captured stderr, trimmed
        stderr: String,
    },

    /// Spawning a subprocess failed
    #[error("failed to run subprocess: {0}")]
    Subprocess(#[from] std::io::Error),

    /// The pull request does not exist
    #[error("pull request #{0} not found")]
    PrNotFound(u64),

    /// GitHub API error with message
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Octocrab transport/API error
    #[error(transparent)]
    Octocrab(#[from] Box<octocrab::Error>),

    /// A repository URL could not be parsed
    #[error("invalid repository URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The remote URL is not a recognized GitHub remote
    #[error("could not determine owner/repo from remote URL: {0}")]
    RemoteNotRecognized(String),

    /// Authentication token could not be resolved
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Internal error
    #[error("{0}")]
    Internal(String),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::Octocrab(Box::new(err))
    }
}
