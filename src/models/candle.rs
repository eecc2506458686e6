use serde::{Deserialize, Serialize};
use std::fmt;

/// One OHLCV bucket of trading activity.
///
/// `time` is the bucket open time in epoch milliseconds, matching the
/// upstream kline format. Sequences are ordered oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Structural validation failure for a candle sequence.
///
/// Insufficient history is not represented here: short sequences are valid
/// input and yield `None` indicator values instead.
#[derive(Debug, Clone, PartialEq)]
pub enum CandleError {
    EmptySeries,
    NonFinitePrice { index: usize, field: &'static str },
    NonPositivePrice { index: usize, field: &'static str },
    InvertedRange { index: usize },
    OutOfRange { index: usize, field: &'static str },
    NegativeVolume { index: usize },
    NonIncreasingTime { index: usize },
}

impl fmt::Display for CandleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandleError::EmptySeries => write!(f, "candle series is empty"),
            CandleError::NonFinitePrice { index, field } => {
                write!(f, "candle {index}: {field} is not a finite number")
            }
            CandleError::NonPositivePrice { index, field } => {
                write!(f, "candle {index}: {field} must be positive")
            }
            CandleError::InvertedRange { index } => {
                write!(f, "candle {index}: low is greater than high")
            }
            CandleError::OutOfRange { index, field } => {
                write!(f, "candle {index}: {field} is outside the low..high range")
            }
            CandleError::NegativeVolume { index } => {
                write!(f, "candle {index}: volume is negative or not finite")
            }
            CandleError::NonIncreasingTime { index } => {
                write!(f, "candle {index}: timestamp does not increase")
            }
        }
    }
}

impl std::error::Error for CandleError {}

/// Validate a candle sequence before it enters the engine.
///
/// Checks the structural invariants only: finite positive prices,
/// `low <= open,close <= high`, non-negative volume, strictly increasing
/// timestamps. An empty sequence is rejected; a short one is not.
pub fn validate_candles(candles: &[Candle]) -> Result<(), CandleError> {
    if candles.is_empty() {
        return Err(CandleError::EmptySeries);
    }

    let mut prev_time = i64::MIN;
    for (index, candle) in candles.iter().enumerate() {
        for (field, value) in [
            ("open", candle.open),
            ("high", candle.high),
            ("low", candle.low),
            ("close", candle.close),
        ] {
            if !value.is_finite() {
                return Err(CandleError::NonFinitePrice { index, field });
            }
            if value <= 0.0 {
                return Err(CandleError::NonPositivePrice { index, field });
            }
        }

        if candle.low > candle.high {
            return Err(CandleError::InvertedRange { index });
        }
        if candle.open < candle.low || candle.open > candle.high {
            return Err(CandleError::OutOfRange { index, field: "open" });
        }
        if candle.close < candle.low || candle.close > candle.high {
            return Err(CandleError::OutOfRange { index, field: "close" });
        }
        if !candle.volume.is_finite() || candle.volume < 0.0 {
            return Err(CandleError::NegativeVolume { index });
        }
        if candle.time <= prev_time {
            return Err(CandleError::NonIncreasingTime { index });
        }
        prev_time = candle.time;
    }

    Ok(())
}
