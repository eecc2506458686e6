//! Market data provider interface.

use crate::models::Candle;
use async_trait::async_trait;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported bar durations. The fetch layer rejects anything else before a
/// request leaves the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "1d")]
    OneDay,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1m",
            Interval::FiveMinutes => "5m",
            Interval::FifteenMinutes => "15m",
            Interval::OneHour => "1h",
            Interval::FourHours => "4h",
            Interval::OneDay => "1d",
        }
    }

    /// Wall-clock span of one bar.
    pub fn duration(&self) -> Duration {
        match self {
            Interval::OneMinute => Duration::minutes(1),
            Interval::FiveMinutes => Duration::minutes(5),
            Interval::FifteenMinutes => Duration::minutes(15),
            Interval::OneHour => Duration::hours(1),
            Interval::FourHours => Duration::hours(4),
            Interval::OneDay => Duration::days(1),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Interval::OneMinute),
            "5m" => Ok(Interval::FiveMinutes),
            "15m" => Ok(Interval::FifteenMinutes),
            "1h" => Ok(Interval::OneHour),
            "4h" => Ok(Interval::FourHours),
            "1d" => Ok(Interval::OneDay),
            other => Err(MarketDataError::UnsupportedInterval(other.to_string())),
        }
    }
}

/// Failures retrieving or decoding upstream market data. All of these are
/// surfaced to the caller as a user-facing error, never a crash.
#[derive(Debug)]
pub enum MarketDataError {
    UnsupportedInterval(String),
    Request(reqwest::Error),
    UpstreamStatus { status: u16, body: String },
    InvalidPayload(String),
}

impl fmt::Display for MarketDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketDataError::UnsupportedInterval(value) => {
                write!(f, "unsupported interval '{value}'")
            }
            MarketDataError::Request(err) => write!(f, "upstream request failed: {err}"),
            MarketDataError::UpstreamStatus { status, body } => {
                write!(f, "upstream responded with status {status}: {body}")
            }
            MarketDataError::InvalidPayload(detail) => {
                write!(f, "upstream payload could not be decoded: {detail}")
            }
        }
    }
}

impl std::error::Error for MarketDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MarketDataError::Request(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MarketDataError {
    fn from(err: reqwest::Error) -> Self {
        MarketDataError::Request(err)
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Historical candles for a symbol, ordered oldest to newest.
    async fn get_candles(
        &self,
        symbol: &str,
        interval: Interval,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError>;
}
