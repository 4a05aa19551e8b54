//! Clinical notes assist service entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ehr_assist::api::{create_router, metrics_router, AppState};
use ehr_assist::config::Config;
use ehr_assist::error::AppError;
use ehr_assist::metrics;
use ehr_assist::utils::shutdown_signal;

/// Clinical notes assist service.
#[derive(Parser, Debug)]
#[command(name = "ehr-assist")]
#[command(about = "Clinical notes summarization and ward analytics demo service")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT from the environment).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (default).
    Run {
        /// HTTP server port (overrides PORT from the environment).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("ehr_assist=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::Run { port }) => cmd_run(port).await,
        None => cmd_run(args.port).await,
    }
}

/// Run the HTTP service.
async fn cmd_run(port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(AppError::InvalidConfig(e).into());
    }

    info!("Configuration loaded successfully");
    match config.upstream() {
        Some(upstream) => {
            info!("Upstream summarization: enabled ({})", upstream.endpoint);
            info!("Upstream timeout: {}s", config.upstream_timeout_secs);
        }
        None => {
            info!("Upstream summarization: disabled, serving mock summaries");
            let endpoint_set = config.ai_endpoint.as_deref().is_some_and(|s| !s.is_empty());
            let key_set = config.ai_key.as_deref().is_some_and(|s| !s.is_empty());
            if endpoint_set != key_set {
                warn!(
                    "Partial upstream configuration: set both AI_ENDPOINT and AI_KEY \
                     to enable summarization"
                );
            }
        }
    }

    // Initialize metrics
    let metrics_handle = metrics::init_metrics().map_err(|e| {
        error!("Failed to initialize metrics: {}", e);
        e
    })?;

    // Create app state
    let port = config.port;
    let app_state = AppState::new(config);

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(app_state).merge(metrics_router(metrics_handle));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("EHR ASSIST SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Check the upstream endpoint URL when summarization is configured
    if let Some(upstream) = config.upstream() {
        print!("Checking AI_ENDPOINT URL... ");
        match url::Url::parse(&upstream.endpoint) {
            Ok(parsed) => {
                println!("OK");
                println!("  Scheme: {}", parsed.scheme());
                if let Some(host) = parsed.host_str() {
                    println!("  Host: {}", host);
                }
            }
            Err(e) => {
                println!("FAILED");
                println!("  Error: {}", e);
                return Err(anyhow::anyhow!("AI_ENDPOINT is not a valid URL"));
            }
        }
    }

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Port: {}", config.port);
    println!(
        "  Upstream Summarization: {}",
        if config.upstream_enabled() {
            "Enabled"
        } else {
            "Disabled (mock mode)"
        }
    );

    if let Some(upstream) = config.upstream() {
        println!("  AI Endpoint: {}", upstream.endpoint);
        println!("  AI Key: present");
        println!("  Upstream Timeout: {}s", config.upstream_timeout_secs);
    } else {
        let endpoint_set = config.ai_endpoint.as_deref().is_some_and(|s| !s.is_empty());
        let key_set = config.ai_key.as_deref().is_some_and(|s| !s.is_empty());
        if endpoint_set && !key_set {
            println!("  WARNING: AI_ENDPOINT is set but AI_KEY is missing!");
        }
        if key_set && !endpoint_set {
            println!("  WARNING: AI_KEY is set but AI_ENDPOINT is missing!");
        }
    }

    println!(
        "  Demo Secret: {}",
        if config.demo_secret.is_some() {
            "present"
        } else {
            "not set"
        }
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
