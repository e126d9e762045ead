use clap::Subcommand;

use crate::app::api;
use crate::domain::AppError;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CacheCommands {
    /// Show cached repositories
    #[clap(visible_alias = "ls")]
    List,
    /// Remove every cached repository
    Clear,
    /// Print the cache directory
    Path,
}

pub fn run_cache(command: CacheCommands) -> Result<(), AppError> {
    match command {
        CacheCommands::List => {
            let entries = api::cache_list()?;
            if entries.is_empty() {
                println!("ℹ️  Cache is empty");
                return Ok(());
            }
            for entry in &entries {
                let metadata = &entry.metadata;
                println!("📦 {}", entry.key);
                println!("    Repository: {}/{}", metadata.owner, metadata.repo);
                println!("    Branch: {}", metadata.branch);
                println!("    Cached: {}", metadata.cached_at.format("%Y-%m-%d %H:%M:%S UTC"));
                println!("    ETag: {}", metadata.etag);
            }
            println!("Total: {} cached repositories", entries.len());
        }
        CacheCommands::Clear => {
            let removed = api::cache_clear()?;
            println!("✅ Cache cleared ({} item(s) removed)", removed);
        }
        CacheCommands::Path => {
            println!("{}", api::cache_path()?.display());
        }
    }
    Ok(())
}
