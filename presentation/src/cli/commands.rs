//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Formatted console output
    Table,
    /// JSON array, same shape as the HTTP endpoint
    Json,
}

/// CLI arguments for calltone
#[derive(Parser, Debug)]
#[command(name = "calltone")]
#[command(author, version, about = "Earnings-call tone analysis for a single company")]
#[command(long_about = r#"
Calltone fetches recent earnings-call transcripts, splits each one into
management remarks and Q&A, scores sentiment and strategic themes per
section with a language model, and reports quarter-over-quarter tone deltas.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./calltone.toml     Project-level config
3. ~/.config/calltone/config.toml   Global config

Example:
  calltone analyze
  calltone analyze --output json
  calltone serve --bind 127.0.0.1:9000
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the pipeline once and print the results
    Analyze {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,

        /// Ignore the cache and recompute
        #[arg(long)]
        no_cache: bool,
    },
    /// Serve the analysis API over HTTP
    Serve {
        /// Bind address, overriding the [server] config section
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
}
