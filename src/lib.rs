//! prebase - rebase a GitHub pull request onto its target branch and push it
//! back safely.
//!
//! The crate is built around one workflow ([`rebase::rebase_pr`]): verify the
//! working tree is clean, fetch the PR's metadata, check the PR head and base
//! out in a detached state, rebase, and force-push the result guarded by a
//! `--force-with-lease` token derived from the metadata snapshot. Every
//! failure path restores the repository to the branch or revision that was
//! checked out before the tool ran.

pub mod auth;
pub mod console;
pub mod error;
pub mod git;
pub mod platform;
pub mod rebase;
pub mod types;
