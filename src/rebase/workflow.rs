//! The rebase workflow state machine

use crate::console::Console;
use crate::error::{Error, Result};
use crate::git::GitClient;
use crate::platform::PlatformService;
use crate::rebase::session::RebaseSession;
use tracing::debug;

/// Options for a rebase run
#[derive(Debug, Clone)]
pub struct RebaseOptions {
    /// The PR to rebase
    pub pr_number: u64,
    /// Auth token embedded into fetch/push URLs
    pub token: String,
    /// Whether a human is attached and may be prompted on conflicts
    pub interactive: bool,
}

/// Terminal outcome of a rebase run
///
/// The workflow returns a tagged outcome instead of exiting the process;
/// the binary maps it to an exit status at the process boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebaseOutcome {
    /// Clean rebase, pushed to the head branch
    Pushed,
    /// Rebase hit conflicts; the repository was restored to its pre-run state
    ConflictsCleanedUp,
    /// Rebase hit conflicts; the operator chose to finish it by hand, so the
    /// working tree was deliberately left mid-rebase
    ConflictsManual,
}

impl RebaseOutcome {
    /// Process exit code for this outcome
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Pushed => 0,
            Self::ConflictsCleanedUp | Self::ConflictsManual => 1,
        }
    }
}

/// How the rebase step itself ended
enum RebaseAttempt {
    Clean,
    Conflict,
}

/// Rebase a pull request onto its target branch and push the result
///
/// The workflow runs strictly top to bottom:
///
/// 1. refuse to start if the working tree has uncommitted changes;
/// 2. fetch the PR metadata snapshot;
/// 3. refuse to continue if the authenticated user may not push to the head
///    branch (neither author nor maintainer-modifiable);
/// 4. fetch head, check it out detached, fetch base, rebase;
/// 5. on a clean rebase, force-push with a lease bound to the head commit
///    from the snapshot; on conflicts, offer manual completion when
///    interactive, otherwise restore the pre-run state.
///
/// Any unexpected failure once mutation has begun runs cleanup before the
/// error propagates, so the repository is never left in a partially-rebased
/// state the user was not told about.
pub async fn rebase_pr(
    git: &dyn GitClient,
    platform: &dyn PlatformService,
    console: &dyn Console,
    options: &RebaseOptions,
) -> Result<RebaseOutcome> {
    // Precondition guard: nothing below may run against a dirty tree
    if git.has_local_changes()? {
        return Err(Error::DirtyWorkTree);
    }

    let pr = platform.pr_metadata(options.pr_number).await?;
    debug!(pr_number = options.pr_number, state = %pr.state, "resolved PR metadata");

    // Permission check happens before any fetch/checkout so a refusal needs
    // no cleanup
    if !pr.can_push_to_head() {
        return Err(Error::PushNotAuthorized(options.pr_number));
    }

    let session = RebaseSession::begin(git, options.pr_number, &pr, &options.token)?;

    console.info(&format!(
        "Attempting to rebase PR #{} ({}) onto {}",
        session.pr_number, session.full_head_ref, session.full_base_ref
    ));

    // Single recovery boundary: whatever fails past this point, the
    // repository is restored before the error surfaces
    match mutate_and_publish(git, console, options, &session) {
        Ok(outcome) => Ok(outcome),
        Err(err) => {
            session.cleanup(git);
            Err(err)
        }
    }
}

/// The mutating git sequence and its outcome handling
fn mutate_and_publish(
    git: &dyn GitClient,
    console: &dyn Console,
    options: &RebaseOptions,
    session: &RebaseSession,
) -> Result<RebaseOutcome> {
    match attempt_rebase(git, session)? {
        RebaseAttempt::Clean => {
            console.info("Rebase completed automatically without conflicts");
            // Lease mismatch makes the remote reject this push; that
            // surfaces as a strict-mode error and funnels into cleanup
            git.run(&[
                "push",
                &session.head_ref_url,
                &format!("HEAD:{}", session.head_ref_name),
                &session.force_with_lease,
            ])?;
            console.info(&format!("Rebased and updated PR #{}", session.pr_number));
            session.cleanup(git);
            Ok(RebaseOutcome::Pushed)
        }
        RebaseAttempt::Conflict => handle_conflict(git, console, options, session),
    }
}

/// Fetch head, detach onto it, fetch base, rebase
///
/// Only the rebase step runs gracefully: its exit status is the decision
/// signal between a clean rebase and a conflict. Every other operation is
/// strict, and a non-zero result there is an unexpected failure, not a
/// conflict.
fn attempt_rebase(git: &dyn GitClient, session: &RebaseSession) -> Result<RebaseAttempt> {
    git.run(&["fetch", "-q", &session.head_ref_url, &session.head_ref_name])?;
    // Detached checkout avoids creating or disturbing any local branch and
    // needs no remote-tracking setup for a possibly-foreign fork
    git.run(&["checkout", "-q", "--detach", "FETCH_HEAD"])?;
    git.run(&["fetch", "-q", &session.base_ref_url, &session.base_ref_name])?;

    let rebase = git.run_graceful(&["rebase", "FETCH_HEAD"])?;
    debug!(status = rebase.status, "rebase step finished");
    if rebase.success() {
        Ok(RebaseAttempt::Clean)
    } else {
        Ok(RebaseAttempt::Conflict)
    }
}

/// Conflict branch of the outcome handler
///
/// In an interactive environment the operator may elect to finish the
/// rebase by hand; the exact push and recovery commands are printed and the
/// mid-rebase state is left intact. Otherwise the pre-run state is restored.
fn handle_conflict(
    git: &dyn GitClient,
    console: &dyn Console,
    options: &RebaseOptions,
    session: &RebaseSession,
) -> Result<RebaseOutcome> {
    console.error("Rebase was unable to complete automatically without conflicts.");

    let continue_manually =
        options.interactive && console.confirm("Manually complete the rebase?")?;

    if continue_manually {
        console.info(&format!(
            "After manually completing the rebase, run the following command to update PR #{}:",
            session.pr_number
        ));
        console.info(&format!(
            "  $ git push {} HEAD:{} {}",
            session.head_repo_url, session.head_ref_name, session.force_with_lease
        ));
        console.info("");
        console.info(
            "To abort the rebase and return to the state of the repository before this command, run:",
        );
        console.info(&format!(
            "  $ git rebase --abort && git reset --hard && git checkout {}",
            session.previous_branch_or_revision
        ));
        return Ok(RebaseOutcome::ConflictsManual);
    }

    session.cleanup(git);
    Ok(RebaseOutcome::ConflictsCleanedUp)
}
