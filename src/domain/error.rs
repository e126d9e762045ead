use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for teleprompter operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Source identifier is not `owner/repo`.
    #[error("Invalid repository format: \"{0}\". Use: owner/repo")]
    InvalidRepoFormat(String),

    /// Archive request answered with a non-success status.
    #[error("Failed to download {owner}/{repo} (branch: {branch}): HTTP {status}")]
    ArchiveStatus { owner: String, repo: String, branch: String, status: u16 },

    /// Archive request exceeded the bounded wait.
    #[error("Timed out downloading {owner}/{repo} after {secs} seconds")]
    DownloadTimeout { owner: String, repo: String, secs: u64 },

    /// Transport-level failure while downloading an archive.
    #[error("Network error downloading {owner}/{repo}: {details}")]
    Network { owner: String, repo: String, details: String },

    /// Archive could not be unpacked.
    #[error("Failed to extract archive: {0}")]
    Archive(String),

    /// Remote repository contains no valid configuration.
    #[error("No valid configurations found in repository {repo}")]
    NoRemoteConfigs { repo: String },

    /// Local or bundled source contains no valid configuration.
    #[error("No local configurations found in {}", .path.display())]
    NoLocalConfigs { path: PathBuf },

    /// Install target already occupied.
    #[error("Configuration already exists at {}. Use --force to overwrite.", .0.display())]
    ConfigExists(PathBuf),

    /// Name filter excluded every candidate.
    #[error("No configurations match \"{0}\"")]
    FilterNoMatch(String),

    /// Interactive numbered choice was not a valid index.
    #[error("Invalid selection: \"{0}\"")]
    InvalidSelection(String),

    /// Cache operation failed.
    #[error("Cache operation failed: {0}")]
    Cache(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Interactive prompt could not be shown or read.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Stable error code shown alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ArchiveStatus { status: 404, .. } => "E1001",
            AppError::ArchiveStatus { .. }
            | AppError::DownloadTimeout { .. }
            | AppError::Network { .. } => "E1002",
            AppError::InvalidRepoFormat(_) => "E1003",
            AppError::Archive(_) => "E1004",
            AppError::NoRemoteConfigs { .. } | AppError::NoLocalConfigs { .. } => "E2001",
            AppError::ConfigExists(_) => "E2002",
            AppError::FilterNoMatch(_) => "E2004",
            AppError::InvalidSelection(_) => "E2005",
            AppError::Cache(_) => "E3001",
            AppError::Io(err) => match err.kind() {
                io::ErrorKind::PermissionDenied => "E4001",
                io::ErrorKind::NotFound => "E4002",
                _ => "E9999",
            },
            AppError::Configuration(_) | AppError::TomlParse(_) => "E5001",
            AppError::Prompt(_) => "E9999",
        }
    }

    /// Actionable hints for the operator.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            AppError::ArchiveStatus { status: 404, branch, .. } => vec![
                "Check that the repository exists and is public".to_string(),
                format!("Confirm that branch '{}' exists in the repository", branch),
            ],
            AppError::ArchiveStatus { .. }
            | AppError::DownloadTimeout { .. }
            | AppError::Network { .. } => vec![
                "Check your internet connection".to_string(),
                "Behind a proxy, set HTTP_PROXY/HTTPS_PROXY".to_string(),
                "Try again in a few moments".to_string(),
            ],
            AppError::InvalidRepoFormat(_) => vec![
                "Use the format owner/repo (for example: nucleoabierto/teleprompter)".to_string(),
                "Do not pass the full URL or the .git suffix".to_string(),
            ],
            AppError::NoRemoteConfigs { .. } | AppError::NoLocalConfigs { .. } => vec![
                "Each configuration needs a script.yaml with \"description\" and \"bootstrap\""
                    .to_string(),
                "Run `teleprompter list <owner/repo>` to inspect a repository".to_string(),
            ],
            AppError::ConfigExists(_) => vec![
                "Use --force to overwrite the existing configuration".to_string(),
                "Run `teleprompter list` to see installed configurations".to_string(),
            ],
            AppError::FilterNoMatch(_) => vec![
                "Check the configuration name".to_string(),
                "Use --select to choose from every available configuration".to_string(),
            ],
            AppError::Cache(_) => vec![
                "Use --no-cache to bypass the cache".to_string(),
                "Run `teleprompter cache clear` to reset it".to_string(),
            ],
            AppError::Io(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                vec!["Check write permissions on the target directory".to_string()]
            }
            AppError::Io(err) if err.kind() == io::ErrorKind::NotFound => {
                vec!["Use --dir to point at an existing directory".to_string()]
            }
            AppError::Configuration(_) | AppError::TomlParse(_) => {
                vec!["Review ~/.teleprompter/config.toml".to_string()]
            }
            _ => Vec::new(),
        }
    }
}
