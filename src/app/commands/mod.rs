pub mod bootstrap;
pub mod cache;
pub mod install;
pub mod list;
