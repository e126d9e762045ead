//! Message catalog for operator-facing text.
//!
//! Messages are looked up by section and key and may contain `{param}`
//! placeholders. Only one locale exists, so the catalog is a flat table.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Info,
    Success,
    Warning,
    Prompts,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Info => "info",
            Section::Success => "success",
            Section::Warning => "warning",
            Section::Prompts => "prompts",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CATALOG: &[(Section, &str, &str)] = &[
    (Section::Info, "checkingCache", "Checking cache for {repo}..."),
    (Section::Info, "cacheStale", "Cache is out of date, downloading a new version..."),
    (Section::Info, "downloading", "Downloading {repo}..."),
    (Section::Info, "extracting", "Extracting files..."),
    (Section::Info, "cacheSaved", "Saved to cache for future use"),
    (Section::Info, "previewHeader", "Configurations to install:"),
    (Section::Info, "cancelled", "Installation cancelled"),
    (Section::Info, "usageHeader", "Usage instructions:"),
    (Section::Success, "usingCache", "Using cached repository: {path}"),
    (Section::Success, "downloaded", "Repository downloaded to: {path}"),
    (Section::Success, "installed", "Installed: {name}"),
    (Section::Success, "summary", "{count} configuration(s) installed successfully!"),
    (Section::Warning, "overwriting", "Overwriting existing configuration at {path}"),
    (Section::Warning, "configIgnored", "Configuration \"{name}\" skipped: {reason}"),
    (Section::Prompts, "confirmInstall", "Install {count} configuration(s)?"),
    (Section::Prompts, "selectConfig", "Select the configuration number"),
    (Section::Prompts, "availableConfigs", "Available configurations:"),
];

/// Raw template for `section.key`.
pub fn lookup(section: Section, key: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(entry_section, entry_key, _)| *entry_section == section && *entry_key == key)
        .map(|(_, _, template)| *template)
}

/// Render `section.key`, substituting each `{name}` placeholder from `params`.
///
/// Unknown keys render as `[missing: section.key]`.
pub fn t(section: Section, key: &str, params: &[(&str, &str)]) -> String {
    let Some(template) = lookup(section, key) else {
        return format!("[missing: {}.{}]", section, key);
    };

    params.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), value)
    })
}
