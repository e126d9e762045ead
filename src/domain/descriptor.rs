use std::path::{Path, PathBuf};

use super::script::{ScriptDefinition, ScriptValidationError};

/// Directory created in the target project to hold installed configurations.
pub const TELEPROMPTER_DIR: &str = ".teleprompter";

/// One installable configuration bundle discovered on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationDescriptor {
    pub name: String,
    pub folder_name: String,
    pub slug: String,
    pub source_path: PathBuf,
    pub script: ScriptDefinition,
}

impl ConfigurationDescriptor {
    /// Build a descriptor; `name` falls back to `folder_name` when the script omits it.
    ///
    /// The slug comes from `name`, then from `folder_name` when `name` has no
    /// slug characters. A bundle with neither is rejected: an empty slug would
    /// point the install path at `.teleprompter` itself.
    pub fn new(
        folder_name: String,
        source_path: PathBuf,
        script: ScriptDefinition,
    ) -> Result<Self, ScriptValidationError> {
        let name = script.name.clone().unwrap_or_else(|| folder_name.clone());
        let mut slug = slugify(&name);
        if slug.is_empty() {
            slug = slugify(&folder_name);
        }
        if slug.is_empty() {
            return Err(ScriptValidationError::UnusableName);
        }
        Ok(Self { name, folder_name, slug, source_path, script })
    }

    /// Install location under `target_dir`.
    pub fn install_path(&self, target_dir: &Path) -> PathBuf {
        target_dir.join(TELEPROMPTER_DIR).join(&self.slug)
    }

    /// Case-insensitive substring match against `name` and `folder_name`.
    pub fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.folder_name.to_lowercase().contains(&needle)
    }
}

/// Derive a path-safe slug: lowercase, collapse every run of characters outside
/// `[a-z0-9]` into one hyphen, and trim hyphens at both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
