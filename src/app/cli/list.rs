use std::path::PathBuf;

use clap::Args;

use super::SourceArgs;
use crate::app::api::{self, ConfigGroup, ListRequest};
use crate::domain::{AppError, ConfigurationDescriptor};

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Repository to inspect (owner/repo); installed configurations when omitted
    pub(super) repo: Option<String>,
    /// Project directory (defaults to current directory)
    #[arg(short, long)]
    pub(super) dir: Option<PathBuf>,
    /// Show evaluation criteria
    #[arg(short, long)]
    pub(super) criteria: bool,
    /// List configurations from every cached repository
    #[arg(long, conflicts_with = "repo")]
    pub(super) cached: bool,
    #[command(flatten)]
    pub(super) source: SourceArgs,
}

pub fn run_list(args: ListArgs) -> Result<(), AppError> {
    let cached = args.cached;
    let remote = args.repo.is_some();
    let groups = api::list(ListRequest {
        repo: args.repo,
        dir: args.dir,
        cached,
        branch: args.source.branch,
        no_cache: args.source.no_cache,
    })?;

    if cached {
        print_cached(&groups, args.criteria);
    } else if remote {
        for group in &groups {
            println!(
                "📦 Configurations in {} ({}):",
                group.repo.as_deref().unwrap_or_default(),
                group.branch.as_deref().unwrap_or_default()
            );
            print_configs(group, args.criteria);
        }
    } else {
        print_installed(&groups, args.criteria);
    }
    Ok(())
}

fn print_installed(groups: &[ConfigGroup], criteria: bool) {
    let total: usize = groups.iter().map(|group| group.configs.len()).sum();
    if total == 0 {
        println!("ℹ️  No configurations installed in this project");
        println!("   Run `teleprompter` to install the built-in configurations");
        return;
    }
    println!("Installed configurations:");
    for group in groups {
        print_configs(group, criteria);
    }
}

fn print_cached(groups: &[ConfigGroup], criteria: bool) {
    if groups.is_empty() {
        println!("ℹ️  No cached repositories");
        return;
    }
    let mut total = 0;
    for group in groups {
        let cached_at = group
            .cached_at
            .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_default();
        println!(
            "📦 {} ({}), cached {}",
            group.repo.as_deref().unwrap_or_default(),
            group.branch.as_deref().unwrap_or_default(),
            cached_at
        );
        print_configs(group, criteria);
        total += group.configs.len();
    }
    println!("Total: {} configuration(s) in {} repositories", total, groups.len());
}

fn print_configs(group: &ConfigGroup, criteria: bool) {
    for config in &group.configs {
        print_config(config, group.repo.as_deref(), criteria);
    }
    println!();
}

fn print_config(config: &ConfigurationDescriptor, repo: Option<&str>, criteria: bool) {
    println!();
    println!("  • {} ({})", config.name, config.folder_name);
    println!("    {}", config.script.description);
    if let Some(version) = &config.script.version {
        println!("    Version: {}", version);
    }
    if criteria {
        match &config.script.criteria {
            Some(items) if !items.is_empty() => {
                println!("    Criteria:");
                for item in items {
                    println!("      - {}", item);
                }
            }
            _ => println!("    Criteria: none"),
        }
    }
    match repo {
        Some(repo) => println!("    Install: teleprompter {} --config \"{}\"", repo, config.name),
        None => println!("    Already installed in this project"),
    }
}
