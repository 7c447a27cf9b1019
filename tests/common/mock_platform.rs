//! Mock platform service for testing

#![allow(dead_code)]

use async_trait::async_trait;
use prebase::error::{Error, Result};
use prebase::platform::PlatformService;
use prebase::types::{PlatformConfig, PullRequestMetadata};
use std::sync::Mutex;

/// Scripted [`PlatformService`] with call tracking and error injection
pub struct MockPlatformService {
    config: PlatformConfig,
    metadata: Mutex<Option<PullRequestMetadata>>,
    error: Mutex<Option<String>>,
    calls: Mutex<Vec<u64>>,
}

impl MockPlatformService {
    /// Create a mock that serves the given metadata for any PR number
    pub fn with_metadata(metadata: PullRequestMetadata) -> Self {
        Self {
            config: PlatformConfig {
                owner: "angular".to_string(),
                repo: "angular".to_string(),
                host: None,
            },
            metadata: Mutex::new(Some(metadata)),
            error: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make `pr_metadata` return an API error
    pub fn fail_with(&self, msg: &str) {
        *self.error.lock().unwrap() = Some(msg.to_string());
    }

    /// PR numbers that were looked up
    pub fn calls(&self) -> Vec<u64> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn pr_metadata(&self, pr_number: u64) -> Result<PullRequestMetadata> {
        self.calls.lock().unwrap().push(pr_number);
        if let Some(msg) = self.error.lock().unwrap().clone() {
            return Err(Error::GitHubApi(msg));
        }
        self.metadata
            .lock()
            .unwrap()
            .clone()
            .ok_or(Error::PrNotFound(pr_number))
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
