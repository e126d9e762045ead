//! List configurations that are installed, cached, or published remotely.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::app::AppContext;
use crate::app::services::{RemoteCheckout, discover};
use crate::domain::{AppError, ConfigurationDescriptor, TELEPROMPTER_DIR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    /// `{dir}/.teleprompter` in the project.
    Installed,
    /// Every cached repository.
    Cached,
    /// `owner/repo` on the code host.
    Remote(String),
}

#[derive(Debug, Clone)]
pub struct ListOptions {
    pub dir: PathBuf,
    pub source: ListSource,
    pub branch: String,
    pub use_cache: bool,
}

/// Configurations found in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigGroup {
    /// `owner/repo` for cached and remote groups.
    pub repo: Option<String>,
    pub branch: Option<String>,
    pub cached_at: Option<DateTime<Utc>>,
    pub configs: Vec<ConfigurationDescriptor>,
}

impl ConfigGroup {
    fn local(configs: Vec<ConfigurationDescriptor>) -> Self {
        Self { repo: None, branch: None, cached_at: None, configs }
    }
}

pub fn execute(ctx: &AppContext<'_>, options: &ListOptions) -> Result<Vec<ConfigGroup>, AppError> {
    match &options.source {
        ListSource::Installed => list_installed(ctx, &options.dir).map(|group| vec![group]),
        ListSource::Cached => Ok(list_cached(ctx)),
        ListSource::Remote(repo) => {
            list_remote(ctx, repo, &options.branch, options.use_cache).map(|group| vec![group])
        }
    }
}

/// Installed configurations; a project without `.teleprompter` has none.
pub fn list_installed(ctx: &AppContext<'_>, dir: &std::path::Path) -> Result<ConfigGroup, AppError> {
    let root = dir.join(TELEPROMPTER_DIR);
    if !ctx.fs().is_dir(&root) {
        return Ok(ConfigGroup::local(Vec::new()));
    }
    let discovery = discover(ctx.fs(), &root)?;
    discovery.report_skipped(ctx.console());
    Ok(ConfigGroup::local(discovery.configs))
}

fn list_cached(ctx: &AppContext<'_>) -> Vec<ConfigGroup> {
    ctx.cache()
        .list_all()
        .into_iter()
        .filter_map(|entry| match discover(ctx.fs(), &entry.extracted_path) {
            Ok(discovery) => {
                discovery.report_skipped(ctx.console());
                let metadata = entry.metadata;
                Some(ConfigGroup {
                    repo: Some(format!("{}/{}", metadata.owner, metadata.repo)),
                    branch: Some(metadata.branch),
                    cached_at: Some(metadata.cached_at),
                    configs: discovery.configs,
                })
            }
            Err(err) => {
                warn!(key = %entry.key, %err, "skipping unreadable cache entry");
                None
            }
        })
        .collect()
}

fn list_remote(
    ctx: &AppContext<'_>,
    repo: &str,
    branch: &str,
    use_cache: bool,
) -> Result<ConfigGroup, AppError> {
    let checkout = RemoteCheckout::open(ctx.fetcher(), repo, branch, use_cache)?;
    let result = discover(ctx.fs(), checkout.path());
    checkout.release(ctx.fs());

    let discovery = result?;
    discovery.report_skipped(ctx.console());
    if discovery.is_empty() {
        return Err(AppError::NoRemoteConfigs { repo: checkout.slug.to_string() });
    }

    Ok(ConfigGroup {
        repo: Some(checkout.slug.to_string()),
        branch: Some(branch.to_string()),
        cached_at: None,
        configs: discovery.configs,
    })
}
