//! tegh-site - Sri Guru Tegh Bahadur Ji content site
//!
//! Serves the read-only JSON API, the embedded browser client and the
//! static media under the public directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::ServiceExt;
use clap::Parser;
use tegh_common::config::{ConfigOverrides, SiteConfig};
use tegh_site::store::ContentStore;
use tegh_site::{build_app, AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for tegh-site
#[derive(Parser, Debug)]
#[command(name = "tegh-site")]
#[command(about = "Sri Guru Tegh Bahadur Ji content site")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "TEGH_PORT")]
    port: Option<u16>,

    /// Address to bind
    #[arg(short, long, env = "TEGH_BIND")]
    bind: Option<String>,

    /// Directory holding gurdwara-data.json and baani.txt
    #[arg(long, env = "TEGH_CONTENT_DIR")]
    content_dir: Option<PathBuf>,

    /// Directory served for static media (audio, PDFs, images)
    #[arg(long, env = "TEGH_PUBLIC_DIR")]
    public_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, env = "TEGH_CONFIG")]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long, env = "TEGH_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            bind: self.bind.clone(),
            port: self.port,
            content_dir: self.content_dir.clone(),
            public_dir: self.public_dir.clone(),
            log_level: self.log_level.clone(),
            config_file: self.config.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Log level may come from the config file, so resolve before tracing init
    let config = SiteConfig::resolve(&args.overrides()).context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str())),
        )
        .init();

    info!(
        "Starting tegh-site v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &config.config_file {
        Some(path) => info!("Config file: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }
    info!("Gurdwara data: {}", config.gurdwara_data_path().display());
    info!("Baani text: {}", config.baani_text_path().display());
    info!("Baani raags: {}", config.baani_raags_path().display());
    info!("Public directory: {}", config.public_dir.display());

    let store = ContentStore::load(&config.content_dir).context("Failed to load content")?;

    let state = AppState::new(store, config.public_dir.clone());
    let app = build_app(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("tegh-site listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
