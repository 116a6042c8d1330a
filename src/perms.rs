//! src/perms.rs
// Recursive permission normalization for the hooks directory.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use async_recursion::async_recursion;
use futures::future::join_all;
use tokio::fs;

/// Mode applied to every hook script: owner read/write/execute, group read,
/// other read.
pub const GIT_HOOKS_MODE: u32 = 0o744;

/// Outcome of a permission walk.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkSummary {
    pub changed: usize,
    pub failed: usize,
}

/// Recursively walks down `start_path` and sets each file found to `mode`.
/// Directories keep their original mode. A missing or non-directory root
/// aborts before anything is touched; a failure on a single file is logged
/// and the walk continues with its siblings.
pub async fn set_file_mode_in_dir(start_path: &Path, mode: u32) -> Result<WalkSummary> {
    match fs::metadata(start_path).await {
        Ok(meta) if meta.is_dir() => {}
        _ => {
            log::error!("{} is not a directory", start_path.display());
            bail!("{} is not a directory", start_path.display());
        }
    }

    let mut files = Vec::new();
    collect_files(start_path, &mut files).await?;

    // Every chmod is awaited here, so the walk only reports completion once
    // all of them have settled.
    let results = join_all(files.into_iter().map(|path| async move {
        match set_mode(&path, mode).await {
            Ok(()) => {
                log::info!("Set permissions on {}", path.display());
                true
            }
            Err(err) => {
                log::error!("Failed to set permissions: {err:#}");
                false
            }
        }
    }))
    .await;

    let changed = results.iter().filter(|ok| **ok).count();
    Ok(WalkSummary {
        changed,
        failed: results.len() - changed,
    })
}

/// Gathers every non-directory entry beneath `dir`. Entries are classified
/// with lstat, so a symlink to a directory counts as a file and is never
/// recursed into; symlinked directory cycles cannot occur.
#[async_recursion]
async fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Could not read directory {}", dir.display()))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("Could not read directory {}", dir.display()))?
    {
        let path = entry.path();
        let stat = fs::symlink_metadata(&path)
            .await
            .with_context(|| format!("Could not stat {}", path.display()))?;

        if stat.is_dir() {
            collect_files(&path, files).await?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(unix)]
async fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .await
        .with_context(|| format!("chmod {:o} {}", mode, path.display()))
}

#[cfg(not(unix))]
async fn set_mode(path: &Path, _mode: u32) -> Result<()> {
    // Unix permission bits do not map onto this platform.
    log::warn!("Skipping permission change on {}", path.display());
    Ok(())
}
