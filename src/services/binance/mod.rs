//! Binance spot REST client for historical klines.

use crate::models::Candle;
use crate::services::market_data::{Interval, MarketDataError, MarketDataProvider};
use async_trait::async_trait;
use chrono::DateTime;
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

/// Thin fetch client over `GET /api/v3/klines`. No retry and no caching;
/// failures propagate to the caller as [`MarketDataError`].
pub struct BinanceKlineClient {
    http: reqwest::Client,
    base_url: String,
}

impl BinanceKlineClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Base URL is injectable so tests can point the client at a mock.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for BinanceKlineClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for BinanceKlineClient {
    async fn get_candles(
        &self,
        symbol: &str,
        interval: Interval,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let url = format!("{}/api/v3/klines", self.base_url);
        let limit_value = limit.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", interval.as_str()),
                ("limit", limit_value.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let rows: Vec<Vec<Value>> = response.json().await?;
        let candles = rows
            .iter()
            .enumerate()
            .map(|(i, row)| parse_kline_row(row, i))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(last) = candles.last() {
            debug!(
                symbol,
                interval = interval.as_str(),
                count = candles.len(),
                latest_open = %DateTime::from_timestamp_millis(last.time)
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| last.time.to_string()),
                "fetched klines"
            );
        }

        Ok(candles)
    }
}

/// One kline row is a mixed array:
/// `[openTime, "open", "high", "low", "close", "volume", closeTime, ...]`.
fn parse_kline_row(row: &[Value], index: usize) -> Result<Candle, MarketDataError> {
    if row.len() < 6 {
        return Err(MarketDataError::InvalidPayload(format!(
            "kline row {index} has {} fields, expected at least 6",
            row.len()
        )));
    }

    let time = row[0].as_i64().ok_or_else(|| {
        MarketDataError::InvalidPayload(format!("kline row {index}: open time is not an integer"))
    })?;

    let price = |field_index: usize, name: &str| -> Result<f64, MarketDataError> {
        let raw = &row[field_index];
        let parsed = match raw {
            Value::String(s) => s.parse::<f64>().ok(),
            Value::Number(n) => n.as_f64(),
            _ => None,
        };
        parsed.ok_or_else(|| {
            MarketDataError::InvalidPayload(format!(
                "kline row {index}: {name} '{raw}' is not numeric"
            ))
        })
    };

    Ok(Candle {
        time,
        open: price(1, "open")?,
        high: price(2, "high")?,
        low: price(3, "low")?,
        close: price(4, "close")?,
        volume: price(5, "volume")?,
    })
}
