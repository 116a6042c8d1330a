//! src/main.rs

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

mod cli;
mod config;
mod git;
mod lfs;
mod perms;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = config::load_config().await?;

    match cli.command {
        Commands::Setup => {
            log::info!(
                "Hang on while we set up the project on your system and do some checks..."
            );
            let hooks_dir = config.hooks_dir().await?;
            perms::set_file_mode_in_dir(&hooks_dir, perms::GIT_HOOKS_MODE).await?;
            lfs::check_lfs_is_present(&config.lfs.binary)?;
            lfs::install_lfs_hooks().await?;
            println!("{}", "Repository setup complete.".green());
        }
        Commands::Check => {
            lfs::check_lfs_is_present(&config.lfs.binary)?;
        }
        Commands::InstallLfs => {
            lfs::install_lfs_hooks().await?;
        }
        Commands::FixPerms { dir } => {
            let hooks_dir = match dir {
                Some(dir) => dir,
                None => config.hooks_dir().await?,
            };
            perms::set_file_mode_in_dir(&hooks_dir, perms::GIT_HOOKS_MODE).await?;
        }
        Commands::Init => {
            config::create_default_config().await?;
        }
    }

    Ok(())
}
