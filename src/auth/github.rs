//! GitHub token resolution

use crate::auth::AuthSource;
use crate::error::{Error, Result};
use std::process::Command;
use tracing::debug;

/// Resolved GitHub authentication
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// The personal access token
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
}

/// Resolve a GitHub token
///
/// Checks `GITHUB_TOKEN` and `GH_TOKEN`, then falls back to asking the gh
/// CLI (`gh auth token`).
pub fn get_github_auth() -> Result<GitHubAuthConfig> {
    for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
        if let Ok(token) = std::env::var(var)
            && !token.trim().is_empty()
        {
            debug!(var, "using token from environment");
            return Ok(GitHubAuthConfig {
                token: token.trim().to_string(),
                source: AuthSource::EnvVar,
            });
        }
    }

    if let Some(token) = gh_cli_token() {
        debug!("using token from gh CLI");
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::Cli,
        });
    }

    Err(Error::Auth(
        "no GitHub token found; set GITHUB_TOKEN or run 'gh auth login'".to_string(),
    ))
}

fn gh_cli_token() -> Option<String> {
    let output = Command::new("gh").args(["auth", "token"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!token.is_empty()).then_some(token)
}
