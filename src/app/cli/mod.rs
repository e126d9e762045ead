//! CLI Adapter.

mod bootstrap;
mod cache;
mod install;
mod list;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "teleprompter")]
#[command(version)]
#[command(
    about = "Install agent configuration bundles into a project",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    install: install::InstallArgs,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List installed, cached, or remote configurations
    #[clap(visible_alias = "ls")]
    List(list::ListArgs),
    /// Print the usage instructions of installed configurations
    Bootstrap {
        /// Project directory (defaults to current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// Inspect or clear the archive cache
    Cache {
        #[command(subcommand)]
        command: cache::CacheCommands,
    },
}

/// Install the tracing subscriber: `RUST_LOG` wins, then `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "teleprompter=debug" } else { "teleprompter=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Some(Commands::List(args)) => list::run_list(args),
        Some(Commands::Bootstrap { dir }) => bootstrap::run_bootstrap(dir),
        Some(Commands::Cache { command }) => cache::run_cache(command),
        None => install::run_install(cli.install),
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
}

fn report_error(err: &AppError) {
    eprintln!("Error [{}]: {}", err.code(), err);
    let suggestions = err.suggestions();
    if !suggestions.is_empty() {
        eprintln!();
        eprintln!("Suggestions:");
        for suggestion in suggestions {
            eprintln!("  • {}", suggestion);
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
struct SourceArgs {
    /// Branch to fetch (defaults to install.default_branch, usually "main")
    #[arg(short, long)]
    branch: Option<String>,
    /// Always download, bypassing the cache
    #[arg(long)]
    no_cache: bool,
}
