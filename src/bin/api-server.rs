//! Klinex API Server
//!
//! HTTP API server exposing candle passthrough and signal computation.
//! The service is stateless and can be horizontally scaled.

use dotenvy::dotenv;
use klinex::config::Config;
use klinex::core::http::start_server;
use klinex::logging;
use klinex::services::BinanceKlineClient;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = Config::from_env();
    let env = klinex::config::get_environment();
    info!("Starting Klinex API Server");
    info!(environment = %env, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);
    info!(upstream = %config.binance_base_url, "Market data upstream");

    let provider = Arc::new(BinanceKlineClient::with_base_url(
        config.binance_base_url.clone(),
    ));

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config, provider).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
            info!("API server stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
