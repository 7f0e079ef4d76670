use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use serde::Deserialize;

pub const DEFAULT_COMMIT_LIMIT: usize = 20;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Option<String>,
    pub commit_limit: Option<usize>,
    pub log_file: Option<PathBuf>,
    pub filter: FilterConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterConfig {
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub include_pattern: Option<String>,
    pub exclude_pattern: Option<String>,
}

impl AppConfig {
    pub fn commit_limit(&self) -> usize {
        self.commit_limit.unwrap_or(DEFAULT_COMMIT_LIMIT)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    let home = std::env::var_os("HOME").map(PathBuf::from);

    config_path_from_parts(xdg_config_home, home)
}

fn config_path_from_parts(
    xdg_config_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(base) = xdg_config_home.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(base.join("stashly").join("config.toml"));
    }

    let home = home
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| anyhow!("Could not determine HOME for config directory"))?;
    Ok(home.join(".config").join("stashly").join("config.toml"))
}

/// Load the config file; a missing file yields defaults, anything else
/// that is wrong (unreadable, invalid TOML) is an error.
pub fn load_config() -> Result<AppConfig> {
    let path = config_path()?;
    load_config_from_path(&path)
}

fn load_config_from_path(path: &Path) -> Result<AppConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(err) => return Err(err.into()),
    };

    let config: AppConfig = toml::from_str(&contents)
        .map_err(|e| anyhow!("invalid config at {}: {e}", path.display()))?;
    Ok(config)
}
