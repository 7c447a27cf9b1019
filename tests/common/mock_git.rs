//! Mock git client for testing
//!
//! Records every command, scripts the rebase exit status, injects failures
//! by command prefix, and tracks which ref checkouts leave current.

#![allow(dead_code)]

use prebase::error::{Error, Result};
use prebase::git::{GitClient, GitOutput};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

/// Scripted, call-recording [`GitClient`]
pub struct MockGitClient {
    current: Mutex<String>,
    dirty: AtomicBool,
    rebase_status: AtomicI32,
    fail_prefixes: Mutex<Vec<String>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockGitClient {
    /// Create a mock with the given branch/revision checked out
    pub fn new(current: &str) -> Self {
        Self {
            current: Mutex::new(current.to_string()),
            dirty: AtomicBool::new(false),
            rebase_status: AtomicI32::new(0),
            fail_prefixes: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script whether the working tree reports uncommitted changes
    pub fn set_dirty(&self, dirty: bool) {
        self.dirty.store(dirty, Ordering::SeqCst);
    }

    /// Script the exit status of `git rebase FETCH_HEAD`
    pub fn set_rebase_status(&self, status: i32) {
        self.rebase_status.store(status, Ordering::SeqCst);
    }

    /// Make strict-mode commands whose joined args start with `prefix` fail
    pub fn fail_on(&self, prefix: &str) {
        self.fail_prefixes.lock().unwrap().push(prefix.to_string());
    }

    /// All recorded command invocations
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded commands whose joined args start with `prefix`
    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|args| args.join(" ").starts_with(prefix))
            .count()
    }

    /// The ref the repository currently has checked out
    pub fn current_ref(&self) -> String {
        self.current.lock().unwrap().clone()
    }

    fn record(&self, args: &[&str]) -> String {
        let owned: Vec<String> = args.iter().map(ToString::to_string).collect();
        let joined = owned.join(" ");
        // Checkout moves the current ref to its last argument
        if args.first() == Some(&"checkout")
            && let Some(target) = args.last()
        {
            *self.current.lock().unwrap() = (*target).to_string();
        }
        self.calls.lock().unwrap().push(owned);
        joined
    }

    fn should_fail(&self, joined: &str) -> bool {
        self.fail_prefixes
            .lock()
            .unwrap()
            .iter()
            .any(|prefix| joined.starts_with(prefix.as_str()))
    }
}

impl GitClient for MockGitClient {
    fn run(&self, args: &[&str]) -> Result<GitOutput> {
        let joined = self.record(args);
        if self.should_fail(&joined) {
            return Err(Error::GitCommand {
                command: joined,
                status: 128,
                stderr: "mock failure".to_string(),
            });
        }
        Ok(GitOutput {
            status: 0,
            stdout: String::new(),
            stderr: String::new(),
        })
    }

    fn run_graceful(&self, args: &[&str]) -> Result<GitOutput> {
        let joined = self.record(args);
        let status = if joined.starts_with("rebase FETCH_HEAD") {
            self.rebase_status.load(Ordering::SeqCst)
        } else {
            0
        };
        Ok(GitOutput {
            status,
            stdout: String::new(),
            stderr: String::new(),
        })
    }

    fn has_local_changes(&self) -> Result<bool> {
        Ok(self.dirty.load(Ordering::SeqCst))
    }

    fn current_branch_or_revision(&self) -> Result<String> {
        Ok(self.current.lock().unwrap().clone())
    }
}
