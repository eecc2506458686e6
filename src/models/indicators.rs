use serde::{Deserialize, Serialize};

/// Latest computed value of each indicator, attached to the last candle of
/// the sequence that produced it.
///
/// `None` means "not yet computable from the available history" and is
/// serialized as an explicit JSON null so consumers can tell it apart from
/// a computed value of zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    pub ema_fast: Option<f64>,
    pub ema_slow: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_histogram: Option<f64>,
    pub rsi: Option<f64>,
}
