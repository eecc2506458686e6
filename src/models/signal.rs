use crate::models::indicators::IndicatorSnapshot;
use serde::{Deserialize, Serialize};

/// Categorical trading recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    Buy,
    Sell,
    Neutral,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Neutral => "NEUTRAL",
        }
    }
}

/// Decision engine output: the signal, an integer confidence percentage,
/// the reasons that produced it (in rule-evaluation order) and the
/// indicator snapshot the decision was based on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub signal: Signal,
    pub confidence: u8,
    pub reasons: Vec<String>,
    pub indicators: IndicatorSnapshot,
}
