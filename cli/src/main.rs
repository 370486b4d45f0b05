//! CLI entrypoint for calltone
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use calltone_application::{AnalysisStore, AnalyzeQuartersUseCase};
use calltone_infrastructure::{
    AnalysisCache, ConfigLoader, HttpDocumentFetcher, OpenAiGateway, WebTranscriptSource,
};
use calltone_presentation::{ApiState, Cli, Command, ConsoleFormatter, OutputFormat, serve};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!(e))
            .context("failed to load configuration")?
    };

    // === Dependency Injection ===
    let settings = config.provider.to_settings();
    let fetcher = Arc::new(HttpDocumentFetcher::new(&settings.origin)?);
    let source = Arc::new(WebTranscriptSource::new(fetcher, settings));

    let api_key = config.model.resolve_api_key().unwrap_or_default();
    if api_key.is_empty() {
        warn!(
            "No model API key found ({} unset); analyses will degrade to defaults",
            config.model.api_key_env
        );
    }
    let gateway = Arc::new(OpenAiGateway::new(
        &config.model.base_url,
        &config.model.model,
        api_key,
        config.model.timeout(),
        config.model.max_attempts,
    )?);

    let use_case = AnalyzeQuartersUseCase::new(source, gateway, config.analysis_params());
    let cache = AnalysisCache::new(&config.cache.path, config.cache.ttl());

    match cli.command.unwrap_or(Command::Analyze {
        output: OutputFormat::Table,
        no_cache: false,
    }) {
        Command::Analyze { output, no_cache } => {
            let results = if !no_cache && let Some(cached) = cache.load_fresh() {
                info!("Using cached analysis from {}", config.cache.path);
                cached
            } else {
                let results = use_case.execute().await?;
                cache.store(&results);
                results
            };

            let formatted = match output {
                OutputFormat::Table => ConsoleFormatter::format(&results),
                OutputFormat::Json => ConsoleFormatter::format_json(&results),
            };
            println!("{formatted}");
        }
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let state = Arc::new(ApiState {
                use_case,
                store: cache,
            });
            serve(state, &bind).await?;
        }
    }

    Ok(())
}
