//! Shared testing utilities for teleprompter CLI tests.

use assert_cmd::Command;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    archive_base_url: Option<String>,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(root.path().join("home")).expect("Failed to create test home");

        Self { root, work_dir, archive_base_url: None }
    }

    /// Point remote fetches at a local archive server.
    pub fn with_archive_server(mut self, url: &str) -> Self {
        self.archive_base_url = Some(url.to_string());
        self
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Cache root used by every invocation.
    pub fn cache_dir(&self) -> PathBuf {
        self.root.path().join("cache")
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the default workspace.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("teleprompter").expect("Failed to locate binary");
        cmd.current_dir(dir.as_ref())
            .env("HOME", self.home())
            .env("TELEPROMPTER_CONFIG", self.home().join(".teleprompter/config.toml"))
            .env("TELEPROMPTER_CACHE_DIR", self.cache_dir())
            .env("NO_PROXY", "127.0.0.1,localhost")
            .env_remove("RUST_LOG")
            .env_remove("XDG_CACHE_HOME")
            .env_remove("HTTP_PROXY")
            .env_remove("HTTPS_PROXY");
        match &self.archive_base_url {
            Some(url) => cmd.env("TELEPROMPTER_ARCHIVE_BASE_URL", url),
            None => cmd.env_remove("TELEPROMPTER_ARCHIVE_BASE_URL"),
        };
        cmd
    }

    /// Write `~/.teleprompter/config.toml`.
    pub fn write_config(&self, content: &str) {
        let dir = self.home().join(".teleprompter");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), content).unwrap();
    }

    /// Path to the install directory in the work directory.
    pub fn installed_path(&self, slug: &str) -> PathBuf {
        self.work_dir.join(".teleprompter").join(slug)
    }

    /// Create a bundle folder with a script.yaml under `parent`.
    pub fn write_bundle(&self, parent: &Path, folder: &str, name: &str) -> PathBuf {
        let dir = parent.join(folder);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("script.yaml"), script_yaml(name)).unwrap();
        fs::write(dir.join("AGENTS.md"), format!("# {}\n", name)).unwrap();
        dir
    }

    /// Top-level names under the cache root, sorted.
    pub fn cache_entries(&self) -> Vec<String> {
        match fs::read_dir(self.cache_dir()) {
            Ok(entries) => {
                let mut names: Vec<String> = entries
                    .filter_map(Result::ok)
                    .map(|entry| entry.file_name().to_string_lossy().to_string())
                    .collect();
                names.sort();
                names
            }
            Err(_) => Vec::new(),
        }
    }
}

/// A `script.yaml` for a bundle called `name`.
#[allow(dead_code)]
pub fn script_yaml(name: &str) -> String {
    format!(
        "name: \"{}\"\ndescription: \"{} description\"\nbootstrap: \"Bootstrap {}\"\ncriteria:\n  - \"Check {}\"\n",
        name, name, name, name
    )
}

/// Build a GitHub-style tarball: every file sits under `{top}/`.
#[allow(dead_code)]
pub fn tarball(top: &str, files: &[(&str, &str)]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (path, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, format!("{}/{}", top, path), content.as_bytes())
            .expect("Failed to append tar entry");
    }
    builder.into_inner().and_then(|encoder| encoder.finish()).expect("Failed to finish tarball")
}

/// Tarball with two bundles, `agents-config` and `basic-config`.
#[allow(dead_code)]
pub fn two_bundle_tarball() -> Vec<u8> {
    let agents = script_yaml("Agents Config");
    let basic = script_yaml("Basic Config");
    tarball(
        "configs-main",
        &[
            ("agents-config/script.yaml", agents.as_str()),
            ("agents-config/AGENTS.md", "# Agents\n"),
            ("basic-config/script.yaml", basic.as_str()),
            ("broken/script.yaml", "bootstrap: \"only\"\n"),
        ],
    )
}

/// Archive path served for `acme/configs` on `branch`.
#[allow(dead_code)]
pub fn archive_path(branch: &str) -> String {
    format!("/acme/configs/archive/refs/heads/{}.tar.gz", branch)
}
