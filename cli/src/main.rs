//! Server entrypoint for ollama-ask
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use ask_application::AnswerQuestionUseCase;
use ask_infrastructure::{ConfigLoader, FileConfig, OllamaLlmGateway, Severity};
use ask_presentation::{AppState, Cli, PageRenderer, create_router};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // .env has to be applied before anything reads the environment
    let dotenv_path = dotenv::dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG wins over -v flags when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn,ollama_ask=info"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug,hyper=info"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Some(path) = &dotenv_path {
        debug!("Loaded environment from {}", path.display());
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    let model = config
        .ollama
        .parse_model()
        .0
        .context("ollama.model is not a valid model name")?;

    // === Dependency Injection ===
    let gateway = Arc::new(OllamaLlmGateway::from_config(&config.ollama)?);
    let use_case = AnswerQuestionUseCase::new(gateway.clone(), model.clone());

    let renderer = PageRenderer::new()?;
    let app = create_router(AppState::new(use_case.clone(), renderer));

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Starting server on http://{}", listener.local_addr()?);

    // A missing model only fails the requests that need it
    let base_url = gateway.base_url().to_string();
    tokio::spawn(async move {
        match check_model(&use_case, MODEL_CHECK_TIMEOUT).await {
            ModelCheck::Available => info!("Model {} is available on {}", model, base_url),
            ModelCheck::Missing => warn!(
                "Model {} was not found on {}; requests will fail until `ollama pull {}`",
                model, base_url, model
            ),
            ModelCheck::Unreachable(e) => {
                warn!("Could not reach Ollama at {}: {}", base_url, e)
            }
            ModelCheck::TimedOut => warn!(
                "Ollama at {} did not list its models within {:?}",
                base_url, MODEL_CHECK_TIMEOUT
            ),
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

const MODEL_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of the startup model lookup
#[derive(Debug, PartialEq, Eq)]
enum ModelCheck {
    Available,
    Missing,
    Unreachable(String),
    TimedOut,
}

async fn check_model(use_case: &AnswerQuestionUseCase, limit: Duration) -> ModelCheck {
    match tokio::time::timeout(limit, use_case.model_available()).await {
        Ok(Ok(true)) => ModelCheck::Available,
        Ok(Ok(false)) => ModelCheck::Missing,
        Ok(Err(e)) => ModelCheck::Unreachable(e.to_string()),
        Err(_) => ModelCheck::TimedOut,
    }
}

/// Command-line flags take priority over every config source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(model) = &cli.model {
        config.ollama.model = model.clone();
    }
    if let Some(url) = &cli.ollama_url {
        config.ollama.base_url = url.clone();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
