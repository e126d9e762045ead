use std::path::PathBuf;

use clap::Args;

use super::SourceArgs;
use crate::app::api::{self, InstallOutcome, InstallRequest};
use crate::domain::AppError;

#[derive(Args, Debug, Clone, Default)]
pub struct InstallArgs {
    /// Repository to install from (owner/repo); the built-in catalog when omitted
    pub(super) repo: Option<String>,
    /// Target project directory (defaults to current directory)
    #[arg(short, long)]
    pub(super) dir: Option<PathBuf>,
    /// Overwrite existing configurations without asking
    #[arg(short, long)]
    pub(super) force: bool,
    /// Choose one configuration from a numbered list
    #[arg(long)]
    pub(super) select: bool,
    /// Install only configurations whose name contains this text
    #[arg(long)]
    pub(super) config: Option<String>,
    /// Install from a local directory instead of a repository
    #[arg(long, conflicts_with = "repo")]
    pub(super) from: Option<PathBuf>,
    #[command(flatten)]
    pub(super) source: SourceArgs,
}

pub fn run_install(args: InstallArgs) -> Result<(), AppError> {
    let outcome = api::install(InstallRequest {
        repo: args.repo,
        from: args.from,
        dir: args.dir,
        force: args.force,
        branch: args.source.branch,
        no_cache: args.source.no_cache,
        select: args.select,
        filter: args.config,
    })?;

    if let InstallOutcome::Installed(configs) = outcome {
        for config in &configs {
            println!("  {} → {}", config.name, config.path.display());
        }
    }
    Ok(())
}
