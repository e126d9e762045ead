//! Install configuration bundles into a project.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::AppContext;
use crate::app::services::{RemoteCheckout, copy_config, discover};
use crate::domain::{AppError, ConfigurationDescriptor, Section, t};

/// Where bundles are installed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallSource {
    /// Catalog embedded in the binary.
    Bundled,
    /// A bundle, or folder of bundles, on the local filesystem.
    Local(PathBuf),
    /// `owner/repo` on the code host.
    Remote(String),
}

#[derive(Debug, Clone)]
pub struct InstallOptions {
    pub target_dir: PathBuf,
    pub force: bool,
    pub branch: String,
    pub use_cache: bool,
    pub select: bool,
    pub filter: Option<String>,
}

/// One bundle copied into the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledConfig {
    pub name: String,
    pub slug: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The operator declined the confirmation prompt.
    Cancelled,
    Installed(Vec<InstalledConfig>),
}

/// Resolve `source`, pick bundles, and copy them under `target_dir/.teleprompter`.
///
/// A fresh download is removed once the install ends, whether it succeeded or not.
pub fn execute(
    ctx: &AppContext<'_>,
    source: InstallSource,
    options: &InstallOptions,
) -> Result<InstallOutcome, AppError> {
    match source {
        InstallSource::Bundled => {
            let root = ctx.bundled().root()?;
            install_from(ctx, &root, None, options)
        }
        InstallSource::Local(path) => install_from(ctx, &path, None, options),
        InstallSource::Remote(repo) => {
            let checkout =
                RemoteCheckout::open(ctx.fetcher(), &repo, &options.branch, options.use_cache)?;
            let result = install_from(ctx, checkout.path(), Some(&checkout), options);
            checkout.release(ctx.fs());
            result
        }
    }
}

fn install_from(
    ctx: &AppContext<'_>,
    source_path: &Path,
    remote: Option<&RemoteCheckout>,
    options: &InstallOptions,
) -> Result<InstallOutcome, AppError> {
    let discovery = discover(ctx.fs(), source_path)?;
    discovery.report_skipped(ctx.console());

    if discovery.is_empty() {
        return Err(match remote {
            Some(checkout) => AppError::NoRemoteConfigs { repo: checkout.slug.to_string() },
            None => AppError::NoLocalConfigs { path: source_path.to_path_buf() },
        });
    }

    let mut candidates = apply_filter(discovery.configs, options.filter.as_deref())?;
    if options.select && candidates.len() > 1 {
        candidates = vec![select_one(ctx, candidates)?];
    }

    preview(ctx, &candidates, &options.target_dir);

    if !options.force {
        let count = candidates.len().to_string();
        let question = t(Section::Prompts, "confirmInstall", &[("count", &count)]);
        if !ctx.prompter().confirm(&question)? {
            ctx.console().info(&t(Section::Info, "cancelled", &[]));
            return Ok(InstallOutcome::Cancelled);
        }
    }

    let mut installed = Vec::with_capacity(candidates.len());
    for config in &candidates {
        let target = config.install_path(&options.target_dir);
        copy_config(ctx.fs(), ctx.console(), &config.source_path, &target, options.force)?;
        ctx.console().success(&t(Section::Success, "installed", &[("name", &config.name)]));
        info!(name = %config.name, path = %target.display(), "configuration installed");
        installed.push(InstalledConfig {
            name: config.name.clone(),
            slug: config.slug.clone(),
            path: target,
        });
    }

    print_bootstrap(ctx, &candidates);

    let count = installed.len().to_string();
    ctx.console().success(&t(Section::Success, "summary", &[("count", &count)]));
    Ok(InstallOutcome::Installed(installed))
}

/// Keep configurations whose name or folder contains `filter`, ignoring case.
pub fn apply_filter(
    configs: Vec<ConfigurationDescriptor>,
    filter: Option<&str>,
) -> Result<Vec<ConfigurationDescriptor>, AppError> {
    let Some(filter) = filter.filter(|filter| !filter.is_empty()) else {
        return Ok(configs);
    };

    let matching: Vec<_> = configs.into_iter().filter(|config| config.matches_filter(filter)).collect();
    if matching.is_empty() {
        return Err(AppError::FilterNoMatch(filter.to_string()));
    }
    Ok(matching)
}

fn select_one(
    ctx: &AppContext<'_>,
    mut candidates: Vec<ConfigurationDescriptor>,
) -> Result<ConfigurationDescriptor, AppError> {
    let items: Vec<String> = candidates
        .iter()
        .map(|config| format!("{} - {}", config.name, config.script.description))
        .collect();

    ctx.console().info(&t(Section::Prompts, "availableConfigs", &[]));
    let index = ctx.prompter().select(&t(Section::Prompts, "selectConfig", &[]), &items)?;
    if index >= candidates.len() {
        return Err(AppError::InvalidSelection((index + 1).to_string()));
    }
    Ok(candidates.swap_remove(index))
}

fn preview(ctx: &AppContext<'_>, candidates: &[ConfigurationDescriptor], target_dir: &Path) {
    let console = ctx.console();
    console.info(&t(Section::Info, "previewHeader", &[]));
    for config in candidates {
        console.plain(&format!("  • {}", config.name));
        console.plain(&format!("    {}", config.script.description));
        console.plain(&format!("    → {}", config.install_path(target_dir).display()));
    }
    console.plain("");
}

fn print_bootstrap(ctx: &AppContext<'_>, installed: &[ConfigurationDescriptor]) {
    let console = ctx.console();
    match installed {
        [] => {}
        [single] => {
            console.plain("");
            console.plain(single.script.bootstrap.trim_end());
        }
        many => {
            console.plain("");
            console.info(&t(Section::Info, "usageHeader", &[]));
            for config in many {
                console.plain("");
                console.plain(&format!("{}:", config.name));
                console.plain(config.script.bootstrap.trim_end());
            }
        }
    }
    console.plain("");
}
