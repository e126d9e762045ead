//! Inspect and clear the archive cache.

use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::domain::CacheEntry;

/// Every well-formed cache entry, sorted by key.
pub fn list(ctx: &AppContext<'_>) -> Vec<CacheEntry> {
    ctx.cache().list_all()
}

/// Remove every cache entry; returns the number of paths removed.
pub fn clear(ctx: &AppContext<'_>) -> usize {
    let removed = ctx.cache().purge_all();
    info!(removed, root = %ctx.cache().root().display(), "cache cleared");
    removed
}

pub fn path(ctx: &AppContext<'_>) -> PathBuf {
    ctx.cache().root().to_path_buf()
}
