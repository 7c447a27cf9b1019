//! Mock console for testing

#![allow(dead_code)]

use prebase::console::Console;
use prebase::error::Result;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Recording [`Console`] with a scripted confirmation answer
pub struct MockConsole {
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    confirm_response: AtomicBool,
    confirm_calls: AtomicUsize,
}

impl MockConsole {
    /// Create a mock that answers "no" to confirmations
    pub fn new() -> Self {
        Self::answering(false)
    }

    /// Create a mock with a scripted confirmation answer
    pub fn answering(response: bool) -> Self {
        Self {
            infos: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
            confirm_response: AtomicBool::new(response),
            confirm_calls: AtomicUsize::new(0),
        }
    }

    /// All info messages printed so far
    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    /// All error messages printed so far
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    /// How many times the workflow prompted for confirmation
    pub fn confirm_calls(&self) -> usize {
        self.confirm_calls.load(Ordering::SeqCst)
    }
}

impl Console for MockConsole {
    fn info(&self, msg: &str) {
        self.infos.lock().unwrap().push(msg.to_string());
    }

    fn error(&self, msg: &str) {
        self.errors.lock().unwrap().push(msg.to_string());
    }

    fn confirm(&self, _question: &str) -> Result<bool> {
        self.confirm_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.confirm_response.load(Ordering::SeqCst))
    }
}
