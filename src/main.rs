//! prebase binary entry point

mod cli;

use clap::Parser;
use cli::rebase::{RebaseCommandOptions, run_rebase};
use cli::style::Stylize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Rebase a GitHub pull request onto its target branch and push it back
/// safely with a force-with-lease guard
#[derive(Debug, Parser)]
#[command(name = "prebase", version, about)]
struct Cli {
    /// PR number to rebase
    pr_number: u64,

    /// Repository as owner/repo (defaults to the origin remote)
    #[arg(long)]
    repo: Option<String>,

    /// Path to the local repository
    #[arg(long, default_value = ".")]
    path: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = RebaseCommandOptions {
        pr_number: cli.pr_number,
        repo: cli.repo,
    };

    // The workflow reports a tagged outcome; the exit status is decided
    // here, at the process boundary
    let code = match run_rebase(&cli.path, options).await {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            anstream::eprintln!("{} {err}", "error:".warn());
            1
        }
    };
    std::process::exit(code);
}
