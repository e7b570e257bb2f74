//! Configuration loading for ollama-ask
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `OLLAMA_ASK_<SECTION>__<KEY>`, then `OLLAMA_HOST`
//! 2. `--config <path>` specified file
//! 3. Project root: `./ollama-ask.toml` or `./.ollama-ask.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ollama-ask/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, DEFAULT_BASE_URL, FileConfig, FileOllamaConfig,
    FileServerConfig, Severity,
};
pub use loader::ConfigLoader;
