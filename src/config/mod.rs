//! Environment-driven configuration.

use crate::services::market_data::Interval;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Deployment environment name, from `APP_ENV`. Anything other than
/// production gets the human-readable log format.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Indicator periods and decision thresholds.
///
/// These are policy parameters, not structural invariants: the defaults
/// follow common technical-analysis convention (EMA 12/26, MACD signal 9,
/// RSI 14 with 70/30 bands) and every one of them can be overridden from
/// the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub ema_fast_period: usize,
    pub ema_slow_period: usize,
    pub macd_signal_period: usize,
    pub rsi_period: usize,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
    /// Confidence reported when the votes cancel out or nothing fired.
    pub baseline_confidence: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ema_fast_period: 12,
            ema_slow_period: 26,
            macd_signal_period: 9,
            rsi_period: 14,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            baseline_confidence: 50,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ema_fast_period: parse_env("ENGINE_EMA_FAST_PERIOD", defaults.ema_fast_period),
            ema_slow_period: parse_env("ENGINE_EMA_SLOW_PERIOD", defaults.ema_slow_period),
            macd_signal_period: parse_env(
                "ENGINE_MACD_SIGNAL_PERIOD",
                defaults.macd_signal_period,
            ),
            rsi_period: parse_env("ENGINE_RSI_PERIOD", defaults.rsi_period),
            rsi_overbought: parse_env("ENGINE_RSI_OVERBOUGHT", defaults.rsi_overbought),
            rsi_oversold: parse_env("ENGINE_RSI_OVERSOLD", defaults.rsi_oversold),
            baseline_confidence: parse_env(
                "ENGINE_BASELINE_CONFIDENCE",
                defaults.baseline_confidence,
            ),
        }
    }
}

/// Service configuration: HTTP port, upstream base URL and the query
/// defaults applied when the caller omits a parameter.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub binance_base_url: String,
    pub default_symbol: String,
    pub default_interval: Interval,
    pub default_limit: usize,
    pub engine: EngineConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            binance_base_url: crate::services::binance::DEFAULT_BASE_URL.to_string(),
            default_symbol: "BTCUSDT".to_string(),
            default_interval: Interval::OneHour,
            default_limit: 500,
            engine: EngineConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: parse_env("PORT", defaults.port),
            binance_base_url: env::var("BINANCE_BASE_URL")
                .unwrap_or(defaults.binance_base_url),
            default_symbol: env::var("DEFAULT_SYMBOL").unwrap_or(defaults.default_symbol),
            default_interval: env::var("DEFAULT_INTERVAL")
                .ok()
                .and_then(|v| Interval::from_str(&v).ok())
                .unwrap_or(defaults.default_interval),
            default_limit: parse_env("DEFAULT_LIMIT", defaults.default_limit),
            engine: EngineConfig::from_env(),
        }
    }
}

fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
