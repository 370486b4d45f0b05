//! Configuration loading and raw TOML structures

mod file_config;
mod loader;

pub use file_config::{
    FileAnalysisConfig, FileCacheConfig, FileConfig, FileModelConfig, FileProviderConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;
