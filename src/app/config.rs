//! User configuration loaded from `~/.teleprompter/config.toml`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::domain::{AppError, DEFAULT_BRANCH};

/// Points at an alternative config file.
pub const CONFIG_ENV: &str = "TELEPROMPTER_CONFIG";
/// Overrides the cache root.
pub const CACHE_DIR_ENV: &str = "TELEPROMPTER_CACHE_DIR";
/// Overrides the archive host, mainly for mirrors and tests.
pub const ARCHIVE_BASE_URL_ENV: &str = "TELEPROMPTER_ARCHIVE_BASE_URL";

const DEFAULT_ARCHIVE_BASE_URL: &str = "https://github.com";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub archive: ArchiveConfig,
    #[serde(default)]
    pub install: InstallConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Remote archive retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArchiveConfig {
    /// Code host serving `{owner}/{repo}/archive/refs/heads/{branch}.tar.gz`.
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Bound on the archive download, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self { base_url: None, timeout_secs: default_timeout_secs() }
    }
}

impl ArchiveConfig {
    pub fn base_url(&self) -> Result<Url, AppError> {
        match &self.base_url {
            Some(url) => Ok(url.clone()),
            None => Url::parse(DEFAULT_ARCHIVE_BASE_URL)
                .map_err(|err| AppError::config_error(format!("Invalid default base URL: {}", err))),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("archive.timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallConfig {
    /// Branch fetched when `--branch` is not given.
    #[serde(default = "default_branch")]
    pub default_branch: String,
    /// Whether remote fetches consult the cache.
    #[serde(default = "default_true")]
    pub use_cache: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self { default_branch: default_branch(), use_cache: default_true() }
    }
}

impl InstallConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.default_branch.trim().is_empty() {
            return Err(AppError::config_error("install.default_branch must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Cache root; the platform cache directory is used when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.archive.validate()?;
        self.install.validate()?;
        Ok(())
    }

    /// Apply environment overrides, reading variables through `var`.
    pub fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), AppError> {
        if let Some(dir) = var(CACHE_DIR_ENV).filter(|dir| !dir.is_empty()) {
            self.cache.dir = Some(PathBuf::from(dir));
        }
        if let Some(raw) = var(ARCHIVE_BASE_URL_ENV).filter(|raw| !raw.is_empty()) {
            let url = Url::parse(&raw).map_err(|err| {
                AppError::config_error(format!("{} is not a valid URL ({}): {}", ARCHIVE_BASE_URL_ENV, raw, err))
            })?;
            self.archive.base_url = Some(url);
        }
        Ok(())
    }
}

/// Parse and validate TOML config content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Default config location: `$TELEPROMPTER_CONFIG`, else `~/.teleprompter/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|path| !path.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".teleprompter").join("config.toml"))
}

/// Load the config at `path`; a missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, AppError> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    parse_config_content(&content)
        .map_err(|err| AppError::config_error(format!("{}: {}", path.display(), err)))
}

/// Load the user config and apply environment overrides.
pub fn load_config() -> Result<AppConfig, AppError> {
    let mut config = match config_path() {
        Some(path) => load_config_from(&path)?,
        None => AppConfig::default(),
    };
    config.apply_overrides(|key| std::env::var(key).ok())?;
    Ok(config)
}
