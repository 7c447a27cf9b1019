//! Rebase command - rebase a PR onto its target branch and push it back

use crate::cli::TerminalConsole;
use crate::cli::style::{Stylize, check};
use anstream::println;
use prebase::auth::get_github_auth;
use prebase::console::is_non_interactive;
use prebase::error::Result;
use prebase::git::{GitClient, GitCommandClient};
use prebase::platform::{GitHubService, parse_owner_repo, parse_repo_info};
use prebase::rebase::{RebaseOptions, RebaseOutcome, rebase_pr};
use prebase::types::PlatformConfig;
use std::path::Path;

/// Options for the rebase command
#[derive(Debug, Clone)]
pub struct RebaseCommandOptions {
    /// PR number to rebase
    pub pr_number: u64,
    /// Explicit `owner/repo` override; detected from origin when absent
    pub repo: Option<String>,
}

/// Run the rebase command
pub async fn run_rebase(path: &Path, options: RebaseCommandOptions) -> Result<RebaseOutcome> {
    let auth = get_github_auth()?;
    let git = GitCommandClient::new(path).with_token(&auth.token);
    let config = resolve_platform_config(&git, options.repo.as_deref())?;

    println!(
        "{} {}",
        "Repository:".emphasis(),
        format!("{}/{}", config.owner, config.repo).accent()
    );

    let platform = GitHubService::new(&auth.token, config)?;
    let console = TerminalConsole::new();

    let outcome = rebase_pr(
        &git,
        &platform,
        &console,
        &RebaseOptions {
            pr_number: options.pr_number,
            token: auth.token,
            interactive: !is_non_interactive(),
        },
    )
    .await?;

    if outcome == RebaseOutcome::Pushed {
        println!(
            "{} {}",
            check(),
            format!("PR #{} rebased and pushed", options.pr_number).success()
        );
    }

    Ok(outcome)
}

/// Resolve owner/repo from the command line or the origin remote URL
fn resolve_platform_config(git: &dyn GitClient, repo: Option<&str>) -> Result<PlatformConfig> {
    if let Some(value) = repo {
        return parse_owner_repo(value);
    }
    let output = git.run(&["remote", "get-url", "origin"])?;
    parse_repo_info(output.stdout.trim())
}
