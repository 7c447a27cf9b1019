//! Authentication for GitHub
//!
//! Supports environment variables and CLI-based auth (gh).

mod github;

pub use github::{GitHubAuthConfig, get_github_auth};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from the gh CLI tool
    Cli,
    /// Token from an environment variable
    EnvVar,
}
