//! Git runner backed by the system `git` binary

use crate::error::{Error, Result};
use crate::git::{GitClient, GitOutput};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// [`GitClient`] implementation that spawns the `git` binary
///
/// Commands run synchronously with stdout/stderr captured. When a token is
/// attached, it is scrubbed from every logged command line and from error
/// messages, since authenticated fetch/push URLs embed it.
pub struct GitCommandClient {
    repo_root: PathBuf,
    token: Option<String>,
}

impl GitCommandClient {
    /// Create a runner for the repository at `repo_root`
    #[must_use]
    pub fn new(repo_root: &Path) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            token: None,
        }
    }

    /// Attach an auth token to be redacted from logs and error output
    #[must_use]
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    fn redact(&self, text: &str) -> String {
        match &self.token {
            Some(token) if !token.is_empty() => text.replace(token, "<TOKEN>"),
            _ => text.to_string(),
        }
    }

    fn spawn(&self, args: &[&str]) -> Result<GitOutput> {
        debug!(command = %self.redact(&format!("git {}", args.join(" "))), "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_root)
            .output()?;

        Ok(GitOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl GitClient for GitCommandClient {
    fn run(&self, args: &[&str]) -> Result<GitOutput> {
        let output = self.spawn(args)?;
        if output.success() {
            Ok(output)
        } else {
            Err(Error::GitCommand {
                command: self.redact(&args.join(" ")),
                status: output.status,
                stderr: self.redact(output.stderr.trim()),
            })
        }
    }

    fn run_graceful(&self, args: &[&str]) -> Result<GitOutput> {
        self.spawn(args)
    }

    fn has_local_changes(&self) -> Result<bool> {
        // diff-index exits non-zero when tracked files differ from HEAD
        let output = self.run_graceful(&["diff-index", "--quiet", "HEAD"])?;
        Ok(!output.success())
    }

    fn current_branch_or_revision(&self) -> Result<String> {
        let output = self.run_graceful(&["symbolic-ref", "--short", "HEAD"])?;
        if output.success() {
            return Ok(output.stdout.trim().to_string());
        }
        // Detached HEAD has no symbolic ref, fall back to the revision
        let output = self.run(&["rev-parse", "HEAD"])?;
        Ok(output.stdout.trim().to_string())
    }
}
