//! Projel API server
//!
//! Loads the configuration, installs logging and serves the router until
//! Ctrl+C or SIGTERM.

use std::path::PathBuf;

use anyhow::{Context, Result};
use calc_server::{build_router, logging, ServerConfig};
use clap::{Parser, Subcommand};
use tokio::signal;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Projel - NBR 5410 calculation service")]
struct Args {
    /// Configuration file (TOML or JSON)
    #[arg(short, long, value_name = "FILE", env = "PROJEL_CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Override the listening host
    #[arg(long)]
    host: Option<String>,

    /// Override the listening port
    #[arg(short, long)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the effective configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config.validate()?;

    match args.command {
        Some(Commands::Check) => check_config(&config),
        None => {
            logging::init(&config.log_level)?;
            run_service(config).await
        }
    }
}

fn check_config(config: &ServerConfig) -> Result<()> {
    println!("=== Projel configuration ===");
    println!("{}", serde_json::to_string_pretty(config)?);
    println!("Configuration is valid.");
    Ok(())
}

async fn run_service(config: ServerConfig) -> Result<()> {
    let addr = config.bind_address();
    info!("Starting {} v{}", config.project_name, env!("CARGO_PKG_VERSION"));

    let prefix = config.api_prefix.clone();
    let app = build_router(config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Listening on http://{}", addr);
    info!("  POST {}/cargas/calcular-minimo-nbr", prefix);
    info!("  POST {}/propostas/analisar-rascunho", prefix);
    info!("  GET  {}/system/health", prefix);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
