//! src/cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Set up a freshly cloned repository: Git LFS checks and hook permissions.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full bootstrap sequence: fix hook permissions, check for Git LFS, install its hooks.
    #[command(alias = "s")]
    Setup,
    /// Check that the Git LFS binary is available on the executable search path.
    Check,
    /// Install the Git LFS hooks into the repository.
    InstallLfs,
    /// Normalize file permissions under the hooks directory.
    FixPerms {
        /// Directory to walk. Defaults to the configured hooks directory.
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Initialize the repo-bootstrap configuration file.
    #[command(alias = "i")]
    Init,
}
