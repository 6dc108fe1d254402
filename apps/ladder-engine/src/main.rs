//! Ladder Engine Binary
//!
//! Serves the ladder calculator over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin ladder-engine
//! ```
//!
//! # Environment Variables
//!
//! - `LADDER_CONFIG`: Path to the YAML config file (default: config.yaml)
//! - `RUST_LOG`: Log filter, overrides `observability.logging.level`
//!
//! Any `${VAR}` referenced from the config file may also come from `.env`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use ladder_engine::application::ports::PriceFeedPort;
use ladder_engine::application::use_cases::PlanLadderUseCase;
use ladder_engine::config::{
    Config, DEFAULT_CONFIG_PATH, LogFormat, LoggingConfig, load_config,
};
use ladder_engine::infrastructure::http::{AppState, create_router};
use ladder_engine::infrastructure::price_feed::{HttpPriceFeed, MockPriceFeed};
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the config file.
const CONFIG_PATH_ENV: &str = "LADDER_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config = load_startup_config()?;
    init_tracing(&config.observability.logging);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        market_data = config.market_data.enabled,
        "Starting ladder engine"
    );

    let price_feed = create_price_feed(&config)?;
    let state = AppState {
        plan_ladder: Arc::new(PlanLadderUseCase::new(price_feed, config.defaults.clone())),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(state);

    let http_addr: SocketAddr = config
        .server
        .listen_address()
        .parse()
        .context("invalid server.bind_address")?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /api/v1/defaults?mode=pyramid|reverse_pyramid");
    tracing::info!("  POST /api/v1/ladder");
    tracing::info!("  POST /api/v1/ladder/table");
    tracing::info!("  GET  /api/v1/price/{{symbol}}");
    tracing::info!("  POST /api/v1/price/nudge");

    let listener = TcpListener::bind(http_addr)
        .await
        .with_context(|| format!("failed to bind {http_addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Ladder engine stopped");
    Ok(())
}

/// Load .env file if present.
fn load_dotenv() {
    // A missing .env is normal outside development
    let _ = dotenvy::dotenv();
}

/// Load the config file named by `LADDER_CONFIG`, or `config.yaml`.
///
/// A missing default file means built-in defaults; an explicitly named file
/// must exist.
fn load_startup_config() -> anyhow::Result<Config> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return load_config(Some(&path)).context("failed to load config");
    }

    if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() {
        load_config(None).context("failed to load config")
    } else {
        Ok(Config::default())
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

/// Pick the price feed adapter.
fn create_price_feed(config: &Config) -> anyhow::Result<Arc<dyn PriceFeedPort>> {
    if config.market_data.enabled {
        tracing::info!(base_url = %config.market_data.base_url, "Using public ticker price feed");
        let feed = HttpPriceFeed::new(&config.market_data)
            .context("failed to build market data client")?;
        Ok(Arc::new(feed))
    } else {
        tracing::warn!("Market data disabled, symbol lookups will fail");
        Ok(Arc::new(MockPriceFeed::new()))
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
