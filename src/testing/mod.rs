pub mod ports;

#[allow(unused_imports)]
pub use ports::{
    FakeExtractor, FakeFetcher, FakeTransport, Level, MemoryCacheStore, MemoryFilesystem,
    RecordingConsole, ScriptedPrompter, StaticBundledConfigs,
};

/// Minimal valid `script.yaml` with an explicit name.
#[allow(dead_code)]
pub fn script_yaml(name: &str, description: &str) -> String {
    format!(
        "name: \"{}\"\ndescription: \"{}\"\nbootstrap: \"Read AGENTS.md before starting\"\n",
        name, description
    )
}
