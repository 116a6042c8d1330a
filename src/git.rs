//! src/git.rs

use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// Runs a git subcommand and returns its captured stdout. The child process
/// is awaited to completion before this returns.
pub async fn run_git_command(args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .context("Failed to execute git command")?;

    if output.status.success() {
        Ok(String::from_utf8(output.stdout).context("Failed to parse git command output")?)
    } else {
        let stderr = String::from_utf8(output.stderr)
            .unwrap_or_else(|_| "Could not read stderr".to_string());
        Err(anyhow!(
            "Git command failed with status {}:\n{}",
            output.status,
            stderr
        ))
    }
}

/// Absolute path of the working tree's top-level directory.
pub async fn get_repo_toplevel() -> Result<PathBuf> {
    let output = run_git_command(&["rev-parse", "--show-toplevel"]).await?;
    Ok(PathBuf::from(output.trim()))
}
