//! Remote URL parsing

use crate::error::{Error, Result};
use crate::types::PlatformConfig;
use regex::Regex;
use std::sync::OnceLock;

fn https_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https?://(?:[^@/]+@)?(?P<host>[^/]+)/(?P<owner>[^/]+)/(?P<repo>[^/]+?)(?:\.git)?/?$")
            .expect("valid regex")
    })
}

fn ssh_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:ssh://)?git@(?P<host>[^:/]+)[:/](?P<owner>[^/]+)/(?P<repo>[^/]+?)(?:\.git)?/?$")
            .expect("valid regex")
    })
}

/// Parse a git remote URL into a [`PlatformConfig`]
///
/// Accepts the common https and ssh remote forms:
/// - `https://github.com/owner/repo.git`
/// - `git@github.com:owner/repo.git`
/// - `ssh://git@github.com/owner/repo`
///
/// Any host other than `github.com` is treated as a GitHub Enterprise
/// installation and carried through as a custom host.
pub fn parse_repo_info(remote_url: &str) -> Result<PlatformConfig> {
    let url = remote_url.trim();

    let captures = https_pattern()
        .captures(url)
        .or_else(|| ssh_pattern().captures(url))
        .ok_or_else(|| Error::RemoteNotRecognized(url.to_string()))?;

    let host = &captures["host"];
    Ok(PlatformConfig {
        owner: captures["owner"].to_string(),
        repo: captures["repo"].to_string(),
        host: (host != "github.com").then(|| host.to_string()),
    })
}

/// Parse an `owner/repo` pair as passed on the command line
pub fn parse_owner_repo(value: &str) -> Result<PlatformConfig> {
    match value.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok(PlatformConfig {
                owner: owner.to_string(),
                repo: repo.to_string(),
                host: None,
            })
        }
        _ => Err(Error::RemoteNotRecognized(format!(
            "expected owner/repo, got '{value}'"
        ))),
    }
}
