//! Ref and URL builders
//!
//! Pure functions deriving fetch/push targets from PR metadata.

use crate::error::{Error, Result};
use crate::types::PrRef;
use url::Url;

/// Fully-qualified `owner/repo:branch` form of a PR ref, for display
#[must_use]
pub fn full_ref(pr_ref: &PrRef) -> String {
    format!("{}:{}", pr_ref.repo_full_name, pr_ref.name)
}

/// Embed an auth token as the user-info component of a repository URL
///
/// Only the credentials change; scheme, host, path, query and fragment are
/// preserved. `https://github.com/org/repo.git` with token `abc123` becomes
/// `https://abc123@github.com/org/repo.git`.
pub fn authenticated_url(repo_url: &str, token: &str) -> Result<String> {
    let mut url = Url::parse(repo_url)?;
    url.set_username(token)
        .map_err(|()| Error::Internal(format!("cannot set credentials on URL: {repo_url}")))?;
    Ok(url.to_string())
}

/// Build the `--force-with-lease` flag binding a push to the head commit
/// observed when the PR metadata was fetched
///
/// The remote rejects the push if anyone moved the head branch in the
/// meantime, so a stale snapshot can never overwrite newer work.
#[must_use]
pub fn force_with_lease_flag(head_branch: &str, head_ref_oid: &str) -> String {
    format!("--force-with-lease={head_branch}:{head_ref_oid}")
}
