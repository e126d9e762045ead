//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::dialoguer_prompter::DialoguerPrompter;
use crate::adapters::embedded_configs::EmbeddedConfigCatalog;
use crate::adapters::filesystem_cache_store::{FilesystemCacheStore, resolve_cache_root};
use crate::adapters::http_archive_client::HttpArchiveClient;
use crate::adapters::local_filesystem::LocalFilesystem;
use crate::adapters::stdout_console::StdoutConsole;
use crate::adapters::tar_gz_extractor::TarGzExtractor;
use crate::app::config::{AppConfig, load_config};
use crate::app::services::ArchiveFetcher;
use crate::app::{
    AppContext,
    commands::{bootstrap, cache, install, list},
};

pub use crate::app::commands::install::{
    InstallOptions, InstallOutcome, InstallSource, InstalledConfig,
};
pub use crate::app::commands::list::{ConfigGroup, ListOptions, ListSource};
pub use crate::domain::{AppError, CacheEntry, ConfigurationDescriptor};

/// Install arguments as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct InstallRequest {
    pub repo: Option<String>,
    pub from: Option<PathBuf>,
    pub dir: Option<PathBuf>,
    pub force: bool,
    pub branch: Option<String>,
    pub no_cache: bool,
    pub select: bool,
    pub filter: Option<String>,
}

/// List arguments as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub repo: Option<String>,
    pub dir: Option<PathBuf>,
    pub cached: bool,
    pub branch: Option<String>,
    pub no_cache: bool,
}

/// Build the production adapters and run `f` against them.
fn with_context<T>(
    config: &AppConfig,
    f: impl FnOnce(&AppContext<'_>) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let fs = LocalFilesystem::new();
    let console = StdoutConsole::new();
    let prompter = DialoguerPrompter::new();
    let transport = HttpArchiveClient::new()?;
    let extractor = TarGzExtractor::new();
    let cache = FilesystemCacheStore::new(resolve_cache_root(config.cache.dir.as_deref())?);
    let bundled = EmbeddedConfigCatalog::new();
    let fetcher = ArchiveFetcher::new(
        &transport,
        &extractor,
        &fs,
        &cache,
        &console,
        config.archive.base_url()?,
        config.archive.timeout(),
    );

    let ctx = AppContext::new(&fs, &console, &prompter, &fetcher, &cache, &bundled);
    f(&ctx)
}

fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

// =============================================================================
// Install Command API
// =============================================================================

/// Install configurations from `--from`, a remote repository, or the built-in catalog.
pub fn install(request: InstallRequest) -> Result<InstallOutcome, AppError> {
    let config = load_config()?;
    let source = match (request.from, request.repo) {
        (Some(path), _) => InstallSource::Local(path),
        (None, Some(repo)) => InstallSource::Remote(repo),
        (None, None) => InstallSource::Bundled,
    };
    let options = InstallOptions {
        target_dir: resolve_dir(request.dir)?,
        force: request.force,
        branch: request.branch.unwrap_or_else(|| config.install.default_branch.clone()),
        use_cache: config.install.use_cache && !request.no_cache,
        select: request.select,
        filter: request.filter,
    };

    with_context(&config, |ctx| install::execute(ctx, source, &options))
}

// =============================================================================
// List / Bootstrap API
// =============================================================================

/// List installed, cached, or remote configurations.
pub fn list(request: ListRequest) -> Result<Vec<ConfigGroup>, AppError> {
    let config = load_config()?;
    let source = match (request.cached, request.repo) {
        (true, _) => ListSource::Cached,
        (false, Some(repo)) => ListSource::Remote(repo),
        (false, None) => ListSource::Installed,
    };
    let options = ListOptions {
        dir: resolve_dir(request.dir)?,
        source,
        branch: request.branch.unwrap_or_else(|| config.install.default_branch.clone()),
        use_cache: config.install.use_cache && !request.no_cache,
    };

    with_context(&config, |ctx| list::execute(ctx, &options))
}

/// Configurations installed in `dir` (default: current directory).
pub fn bootstrap(dir: Option<PathBuf>) -> Result<Vec<ConfigurationDescriptor>, AppError> {
    let config = load_config()?;
    let dir = resolve_dir(dir)?;
    with_context(&config, |ctx| bootstrap::execute(ctx, &dir))
}

// =============================================================================
// Cache API
// =============================================================================

pub fn cache_list() -> Result<Vec<CacheEntry>, AppError> {
    let config = load_config()?;
    with_context(&config, |ctx| Ok(cache::list(ctx)))
}

/// Purge the cache; returns how many paths were removed.
pub fn cache_clear() -> Result<usize, AppError> {
    let config = load_config()?;
    with_context(&config, |ctx| Ok(cache::clear(ctx)))
}

pub fn cache_path() -> Result<PathBuf, AppError> {
    let config = load_config()?;
    with_context(&config, |ctx| Ok(cache::path(ctx)))
}
