//! HTTP endpoint server using Axum

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::config::Config;
use crate::metrics::Metrics;
use crate::services::market_data::{Interval, MarketDataError, MarketDataProvider};
use crate::signals::SignalEngine;

const MAX_LIMIT: usize = 1000;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub provider: Arc<dyn MarketDataProvider>,
    pub engine: Arc<SignalEngine>,
    pub config: Arc<Config>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Error body rendered to the caller as `{"error": message}`.
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: String) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }

    fn bad_gateway(message: String) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<MarketDataError> for ApiError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::UnsupportedInterval(_) => ApiError::bad_request(err.to_string()),
            _ => {
                error!(error = %err, "market data fetch failed");
                ApiError::bad_gateway(err.to_string())
            }
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "klinex-signal-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct MarketQuery {
    symbol: Option<String>,
    interval: Option<String>,
    limit: Option<usize>,
}

/// Resolved query parameters with the configured defaults applied.
struct MarketParams {
    symbol: String,
    interval: Interval,
    limit: usize,
}

fn resolve_params(config: &Config, query: &MarketQuery) -> Result<MarketParams, ApiError> {
    let symbol = query
        .symbol
        .as_deref()
        .unwrap_or(&config.default_symbol)
        .to_uppercase();

    let interval = match &query.interval {
        Some(raw) => Interval::from_str(raw).map_err(|e| ApiError::bad_request(e.to_string()))?,
        None => config.default_interval,
    };

    let limit = query.limit.unwrap_or(config.default_limit);
    if limit == 0 || limit > MAX_LIMIT {
        return Err(ApiError::bad_request(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        )));
    }

    Ok(MarketParams {
        symbol,
        interval,
        limit,
    })
}

/// Raw candle passthrough for the chart.
async fn get_klines(
    State(state): State<AppState>,
    Query(query): Query<MarketQuery>,
) -> Result<Json<Value>, ApiError> {
    let params = resolve_params(&state.config, &query)?;

    let candles = state
        .provider
        .get_candles(&params.symbol, params.interval, params.limit)
        .await?;

    Ok(Json(json!({
        "symbol": params.symbol,
        "interval": params.interval,
        "limit": params.limit,
        "candles": candles,
    })))
}

/// Fetch candles and run the signal engine over them.
async fn get_signal(
    State(state): State<AppState>,
    Query(query): Query<MarketQuery>,
) -> Result<Json<Value>, ApiError> {
    let params = resolve_params(&state.config, &query)?;

    let candles = state
        .provider
        .get_candles(&params.symbol, params.interval, params.limit)
        .await?;

    // Validation failures here mean the exchange handed us a malformed
    // series, so they map to a gateway error rather than a client error.
    let result = state.engine.compute_signal(&candles).map_err(|e| {
        error!(symbol = %params.symbol, error = %e, "candle validation failed");
        ApiError::bad_gateway(format!("invalid candle data from upstream: {e}"))
    })?;

    state
        .metrics
        .signals_computed_total
        .with_label_values(&[result.signal.as_str()])
        .inc();

    let mut body = serde_json::to_value(&result).map_err(|e| {
        error!(error = %e, "signal serialization failed");
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "failed to serialize signal".to_string(),
        }
    })?;
    if let Value::Object(map) = &mut body {
        map.insert("symbol".to_string(), json!(params.symbol));
        map.insert("interval".to_string(), json!(params.interval));
    }

    Ok(Json(body))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/klines", get(get_klines))
        .route("/api/signals", get(get_signal))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    config: Config,
    provider: Arc<dyn MarketDataProvider>,
) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let start_time = Arc::new(Instant::now());
    let engine = Arc::new(SignalEngine::new(config.engine.clone()));
    let port = config.port;

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time,
        provider,
        engine,
        config: Arc::new(config),
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
