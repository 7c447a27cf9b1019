//! Core types for prebase

use serde::{Deserialize, Serialize};

/// PR lifecycle state (open, closed, merged)
///
/// Informational only; the rebase workflow does not refuse closed or merged
/// PRs, it just reports the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrState {
    /// PR is open
    Open,
    /// PR was closed without merging
    Closed,
    /// PR was merged
    Merged,
}

impl std::fmt::Display for PrState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Merged => write!(f, "merged"),
        }
    }
}

/// One side of a pull request (head or base branch)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrRef {
    /// Branch name
    pub name: String,
    /// HTTP URL of the repository owning the branch
    pub repo_url: String,
    /// Full `owner/repo` name of the repository owning the branch
    pub repo_full_name: String,
}

/// Metadata about a pull request, fetched once and immutable for the run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestMetadata {
    /// Lifecycle state of the PR
    pub state: PrState,
    /// Whether maintainers of the target repository may push to the head branch
    pub maintainer_can_modify: bool,
    /// Whether the authenticated user authored the PR
    pub viewer_did_author: bool,
    /// Commit the head branch is expected to be at remotely; used as the
    /// optimistic-concurrency guard for the eventual push
    pub head_ref_oid: String,
    /// The PR's source branch
    pub head_ref: PrRef,
    /// The PR's merge-target branch
    pub base_ref: PrRef,
}

impl PullRequestMetadata {
    /// Whether the authenticated user is allowed to push to the head branch
    #[must_use]
    pub const fn can_push_to_head(&self) -> bool {
        self.viewer_did_author || self.maintainer_can_modify
    }
}

/// Platform configuration for API access
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}
