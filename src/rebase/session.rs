//! Rebase session context

use crate::error::Result;
use crate::git::GitClient;
use crate::rebase::refs::{authenticated_url, force_with_lease_flag, full_ref};
use crate::types::PullRequestMetadata;
use tracing::debug;

/// Everything the workflow derives from the PR metadata snapshot, plus the
/// recovery target captured before any mutation
///
/// Constructed once per run and read-only thereafter. The lease flag is
/// derived from the snapshot and never refreshed, so the eventual push
/// either matches the remote state we observed or is rejected.
pub struct RebaseSession {
    /// The PR being rebased
    pub pr_number: u64,
    /// Branch or detached revision checked out before any mutation; the
    /// target [`cleanup`](Self::cleanup) restores
    pub previous_branch_or_revision: String,
    /// Head branch name
    pub head_ref_name: String,
    /// Base branch name
    pub base_ref_name: String,
    /// `owner/repo:branch` display form of the head ref
    pub full_head_ref: String,
    /// `owner/repo:branch` display form of the base ref
    pub full_base_ref: String,
    /// Head repository URL with the auth token embedded
    pub head_ref_url: String,
    /// Base repository URL with the auth token embedded
    pub base_ref_url: String,
    /// Head repository URL without credentials, for printed instructions
    pub head_repo_url: String,
    /// The `--force-with-lease=<branch>:<oid>` push guard
    pub force_with_lease: String,
}

impl RebaseSession {
    /// Build a session from the metadata snapshot
    ///
    /// Captures the current branch or revision before anything mutates the
    /// repository; it is never recomputed afterwards.
    pub fn begin(
        git: &dyn GitClient,
        pr_number: u64,
        pr: &PullRequestMetadata,
        token: &str,
    ) -> Result<Self> {
        let previous_branch_or_revision = git.current_branch_or_revision()?;
        debug!(
            pr_number,
            previous = %previous_branch_or_revision,
            "captured recovery target"
        );

        Ok(Self {
            pr_number,
            previous_branch_or_revision,
            head_ref_name: pr.head_ref.name.clone(),
            base_ref_name: pr.base_ref.name.clone(),
            full_head_ref: full_ref(&pr.head_ref),
            full_base_ref: full_ref(&pr.base_ref),
            head_ref_url: authenticated_url(&pr.head_ref.repo_url, token)?,
            base_ref_url: authenticated_url(&pr.base_ref.repo_url, token)?,
            head_repo_url: pr.head_ref.repo_url.clone(),
            force_with_lease: force_with_lease_flag(&pr.head_ref.name, &pr.head_ref_oid),
        })
    }

    /// Best-effort restoration of the pre-run repository state
    ///
    /// Aborts any in-progress rebase, discards partial working tree and
    /// index state, and checks the original branch or revision back out.
    /// Every step runs gracefully with errors suppressed: cleanup must not
    /// fail the process with a misleading secondary error. Idempotent.
    pub fn cleanup(&self, git: &dyn GitClient) {
        debug!(
            target = %self.previous_branch_or_revision,
            "restoring pre-run repository state"
        );
        let _ = git.run_graceful(&["rebase", "--abort"]);
        let _ = git.run_graceful(&["reset", "--hard"]);
        let _ = git.run_graceful(&["checkout", &self.previous_branch_or_revision]);
    }
}
