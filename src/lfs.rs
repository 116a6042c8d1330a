//! src/lfs.rs
// Git LFS presence check and hook installation.

use anyhow::{bail, Context, Result};

use crate::git::run_git_command;

pub const LFS_INSTALL_URL: &str = "https://git-lfs.github.com";

/// Checks if the Git LFS binary is installed on the machine and fails if not.
/// Missing LFS is always fatal: hook scripts committed to the repository
/// assume it is present.
pub fn check_lfs_is_present(binary: &str) -> Result<()> {
    if which::which(binary).is_ok() {
        log::info!("Git LFS is available on your system.");
        Ok(())
    } else {
        log::error!(
            "Git LFS does not appear to be available on your system. \
             Please install it. Git operations will not work without it."
        );
        log::error!("See {LFS_INSTALL_URL}");
        bail!("{binary} was not found on the executable search path")
    }
}

/// Installs the Git LFS hooks on the repository and reports the tool's own
/// output once the child process has exited.
pub async fn install_lfs_hooks() -> Result<()> {
    log::info!("Installing Git LFS...");
    let stdout = run_git_command(&["lfs", "install"])
        .await
        .context("Failed to install Git LFS on repository")?;

    for line in stdout.lines().filter(|line| !line.trim().is_empty()) {
        log::info!("{line}");
    }
    Ok(())
}
