use std::path::PathBuf;

use crate::app::api;
use crate::domain::AppError;

pub fn run_bootstrap(dir: Option<PathBuf>) -> Result<(), AppError> {
    let configs = api::bootstrap(dir)?;
    if configs.is_empty() {
        println!("ℹ️  No configurations installed in this project");
        println!("   Run `teleprompter` to install the built-in configurations");
        return Ok(());
    }

    for config in &configs {
        println!("📋 {} ({})", config.name, config.folder_name);
        println!();
        println!("{}", config.script.bootstrap.trim_end());
        println!();
    }
    Ok(())
}
