//! Shared test fixtures and mocks

pub mod mock_console;
pub mod mock_git;
pub mod mock_platform;

pub use mock_console::MockConsole;
pub use mock_git::MockGitClient;
pub use mock_platform::MockPlatformService;

use prebase::types::{PrRef, PrState, PullRequestMetadata};

/// The reference scenario: PR #42, head `org/fork:feature`, base
/// `angular/angular:main`, head expected at `deadbeef`
pub fn pr42_metadata() -> PullRequestMetadata {
    PullRequestMetadata {
        state: PrState::Open,
        maintainer_can_modify: true,
        viewer_did_author: false,
        head_ref_oid: "deadbeef".to_string(),
        head_ref: PrRef {
            name: "feature".to_string(),
            repo_url: "https://github.com/org/fork".to_string(),
            repo_full_name: "org/fork".to_string(),
        },
        base_ref: PrRef {
            name: "main".to_string(),
            repo_url: "https://github.com/angular/angular".to_string(),
            repo_full_name: "angular/angular".to_string(),
        },
    }
}
