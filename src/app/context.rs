use crate::ports::{
    BundledConfigs, CacheStore, ConfigFilesystem, Console, Prompter, RepositoryFetcher,
};

/// Application context holding the collaborators a command may use.
pub struct AppContext<'a> {
    fs: &'a dyn ConfigFilesystem,
    console: &'a dyn Console,
    prompter: &'a dyn Prompter,
    fetcher: &'a dyn RepositoryFetcher,
    cache: &'a dyn CacheStore,
    bundled: &'a dyn BundledConfigs,
}

impl<'a> AppContext<'a> {
    /// Create a new application context.
    pub fn new(
        fs: &'a dyn ConfigFilesystem,
        console: &'a dyn Console,
        prompter: &'a dyn Prompter,
        fetcher: &'a dyn RepositoryFetcher,
        cache: &'a dyn CacheStore,
        bundled: &'a dyn BundledConfigs,
    ) -> Self {
        Self { fs, console, prompter, fetcher, cache, bundled }
    }

    pub fn fs(&self) -> &'a dyn ConfigFilesystem {
        self.fs
    }

    pub fn console(&self) -> &'a dyn Console {
        self.console
    }

    pub fn prompter(&self) -> &'a dyn Prompter {
        self.prompter
    }

    pub fn fetcher(&self) -> &'a dyn RepositoryFetcher {
        self.fetcher
    }

    pub fn cache(&self) -> &'a dyn CacheStore {
        self.cache
    }

    /// Built-in configuration catalog.
    pub fn bundled(&self) -> &'a dyn BundledConfigs {
        self.bundled
    }
}
