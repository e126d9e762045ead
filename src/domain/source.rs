//! Remote source identity.

use std::fmt;

use url::Url;

use crate::domain::AppError;

/// Branch used when none is configured.
pub const DEFAULT_BRANCH: &str = "main";

/// A parsed `owner/repo` identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl RepoSlug {
    /// Parse `owner/repo`; anything other than exactly two non-empty segments is rejected.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let mut parts = input.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
                Ok(Self { owner: owner.to_string(), repo: repo.to_string() })
            }
            _ => Err(AppError::InvalidRepoFormat(input.to_string())),
        }
    }

    pub fn on_branch(&self, branch: &str) -> SourceIdentity {
        SourceIdentity {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            branch: branch.to_string(),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// `(owner, repo, branch)` triple identifying a fetchable archive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceIdentity {
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl SourceIdentity {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, branch: impl Into<String>) -> Self {
        Self { owner: owner.into(), repo: repo.into(), branch: branch.into() }
    }

    /// Cache key: `{owner}-{repo}-{branch}` with characters outside
    /// `[A-Za-z0-9_-]` replaced by `_`.
    ///
    /// Distinct identities that sanitize to the same key share one entry.
    pub fn cache_key(&self) -> String {
        format!("{}-{}-{}", self.owner, self.repo, self.branch)
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect()
    }

    /// Tarball URL for the branch head, relative to a code-hosting base URL.
    ///
    /// Each value is appended as percent-encoded path segments; `/` inside a
    /// branch name still separates segments, as in `refs/heads/feature/x`.
    pub fn archive_url(&self, base: &Url) -> Result<Url, AppError> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        let mut branch: Vec<String> = self.branch.split('/').map(str::to_string).collect();
        if let Some(last) = branch.last_mut() {
            last.push_str(".tar.gz");
        }
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!("Archive base URL '{}' cannot hold a path", base))
            })?
            .pop_if_empty()
            .extend([self.owner.as_str(), self.repo.as_str(), "archive", "refs", "heads"])
            .extend(&branch);
        Ok(url)
    }
}

impl fmt::Display for SourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.owner, self.repo, self.branch)
    }
}
