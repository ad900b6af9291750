//! Configuration file loading for docsage
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./docsage.toml` or `./.docsage.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/docsage/config.toml`
//! 4. Fallback: `~/.config/docsage/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileBackendConfig, FileConfig, FileLogConfig, FileReportConfig};
pub use loader::ConfigLoader;
