//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for ollama-ask
#[derive(Parser, Debug, Default)]
#[command(name = "ollama-ask")]
#[command(author, version, about = "Ask a local Ollama model from your browser")]
#[command(long_about = r#"
ollama-ask serves a single web page with a question form. Submitted questions
are sent to a locally running Ollama server and the answer is rendered back.

Configuration is loaded from (in priority order):
1. Command-line flags below
2. OLLAMA_ASK_<SECTION>__<KEY> env vars (e.g. OLLAMA_ASK_OLLAMA__MODEL), OLLAMA_HOST
3. --config <path>       Explicit config file
4. ./ollama-ask.toml     Project-level config
5. ~/.config/ollama-ask/config.toml   Global config

A .env file in the working directory is read before any of the above.

Example:
  ollama-ask
  ollama-ask --model llama3 --port 8080
  OLLAMA_HOST=gpu-box:11434 ollama-ask -v
"#)]
pub struct Cli {
    /// Interface to bind the web server to
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Model to answer questions with (e.g. gemma:2b)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Base URL of the Ollama server
    #[arg(long, value_name = "URL")]
    pub ollama_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files and environment overrides
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
