//! The rebase workflow
//!
//! Fetches a PR's head and base branches, checks the head out detached,
//! rebases it onto the base, and force-pushes the result guarded by a
//! `--force-with-lease` token bound to the head commit observed in the PR
//! metadata. Every failure path restores the repository to the branch or
//! revision checked out before the run; the one exception is a conflict
//! where the operator explicitly chooses to finish the rebase by hand.

mod refs;
mod session;
mod workflow;

pub use refs::{authenticated_url, force_with_lease_flag, full_ref};
pub use session::RebaseSession;
pub use workflow::{RebaseOptions, RebaseOutcome, rebase_pr};
