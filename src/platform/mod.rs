//! Platform services for pull request metadata
//!
//! Provides the API-facing seam of the rebase workflow: everything the
//! workflow needs to know about a PR is fetched through [`PlatformService`].

mod detection;
mod github;

pub use detection::{parse_owner_repo, parse_repo_info};
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{PlatformConfig, PullRequestMetadata};
use async_trait::async_trait;

/// Platform service trait for pull request lookups
///
/// Abstracts the GitHub API so the rebase workflow can be driven by a test
/// double as well as the real client.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Fetch the metadata snapshot for a pull request
    ///
    /// Fails if the PR does not exist or the API call errors. This happens
    /// before any repository mutation, so no cleanup is required for it.
    async fn pr_metadata(&self, pr_number: u64) -> Result<PullRequestMetadata>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}
