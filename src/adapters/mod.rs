pub mod dialoguer_prompter;
pub mod embedded_configs;
pub mod filesystem_cache_store;
pub mod http_archive_client;
pub mod local_filesystem;
pub mod stdout_console;
pub mod tar_gz_extractor;
