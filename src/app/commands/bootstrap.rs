//! Show the bootstrap instructions of installed configurations.

use std::path::Path;

use crate::app::AppContext;
use crate::app::commands::list::list_installed;
use crate::domain::{AppError, ConfigurationDescriptor};

/// Installed configurations under `dir`, in discovery order.
pub fn execute(ctx: &AppContext<'_>, dir: &Path) -> Result<Vec<ConfigurationDescriptor>, AppError> {
    list_installed(ctx, dir).map(|group| group.configs)
}
