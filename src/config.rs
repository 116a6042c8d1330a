//! src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::git;

/// Represents the main configuration for the application.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    /// Git LFS settings.
    pub lfs: LfsConfig,
    /// Hooks directory settings.
    pub hooks: HooksConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LfsConfig {
    /// Name of the executable probed on the search path.
    pub binary: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HooksConfig {
    /// Hooks directory, resolved against the repository toplevel when relative.
    pub dir: PathBuf,
}

impl Default for LfsConfig {
    fn default() -> Self {
        Self {
            binary: "git-lfs".to_string(),
        }
    }
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".githooks"),
        }
    }
}

impl Config {
    /// Resolves the hooks directory. Relative paths are anchored at the
    /// repository toplevel so the command works from any subdirectory.
    pub async fn hooks_dir(&self) -> Result<PathBuf> {
        if self.hooks.dir.is_absolute() {
            return Ok(self.hooks.dir.clone());
        }
        let toplevel = git::get_repo_toplevel()
            .await
            .context("Could not locate the repository toplevel")?;
        Ok(toplevel.join(&self.hooks.dir))
    }
}

/// Returns the configuration directory path (~/.config/repo-bootstrap).
pub async fn get_config_dir() -> Result<PathBuf> {
    let config_dir = if cfg!(windows) {
        // Windows: %APPDATA%\repo-bootstrap
        dirs::data_dir()
            .map(|p| p.join("repo-bootstrap"))
            .context("Could not get data directory")?
    } else {
        // Linux/macOS: ~/.config/repo-bootstrap
        dirs::config_dir()
            .map(|p| p.join("repo-bootstrap"))
            .context("Could not get config directory")?
    };

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .await
            .context("Could not create config directory")?;
    }
    Ok(config_dir)
}

/// Creates a default configuration file, overwriting any existing one.
pub async fn create_default_config() -> Result<()> {
    let config_dir = get_config_dir().await?;
    let config_path = config_dir.join("config.toml");

    let config_content = toml::to_string(&Config::default())?;
    let mut file = fs::File::create(&config_path).await?;
    file.write_all(config_content.as_bytes()).await?;

    println!("Created default config file at {:?}", config_path);
    Ok(())
}

/// Loads the configuration, falling back to built-in defaults when no
/// config file exists. `init` is the only thing that writes one.
pub async fn load_config() -> Result<Config> {
    let config_dir = get_config_dir().await?;
    let config_path = config_dir.join("config.toml");

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(config_path)
        .await
        .context("Could not read config file")?;
    let config: Config =
        toml::from_str(&config_content).context("Could not parse config file")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_probe_git_lfs_under_githooks() {
        let config = Config::default();
        assert_eq!(config.lfs.binary, "git-lfs");
        assert_eq!(config.hooks.dir, PathBuf::from(".githooks"));
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_fields() {
        let config: Config = toml::from_str("[hooks]\ndir = \"hooks\"\n").unwrap();
        assert_eq!(config.hooks.dir, PathBuf::from("hooks"));
        assert_eq!(config.lfs.binary, "git-lfs");
    }
}
