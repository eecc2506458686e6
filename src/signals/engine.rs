//! Indicator and signal computation over a validated candle sequence.

use crate::config::EngineConfig;
use crate::indicators::{ema_series, macd_series, rsi_series};
use crate::models::{validate_candles, Candle, CandleError, IndicatorSnapshot, SignalResult};
use crate::signals::rules::{Rule, RuleContext};
use crate::signals::scoring::{confidence, signal_from_net_votes};
use tracing::debug;

/// Stateless engine: every call computes fresh series from the input and
/// nothing outlives the call. Cloning is cheap; the engine only carries its
/// configuration.
#[derive(Debug, Clone, Default)]
pub struct SignalEngine {
    config: EngineConfig,
}

/// Full per-candle series, computed once per invocation. Later indicators
/// depend on earlier ones, so these are built together before the snapshot
/// is taken from the last elements.
struct IndicatorSeries {
    snapshot: IndicatorSnapshot,
    previous_histogram: Option<f64>,
}

impl SignalEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Latest indicator values for a candle sequence.
    ///
    /// Short history is not an error: fields that cannot be computed yet
    /// are `None`. Only a structurally invalid sequence fails.
    pub fn compute_indicators(&self, candles: &[Candle]) -> Result<IndicatorSnapshot, CandleError> {
        validate_candles(candles)?;
        Ok(self.series(candles).snapshot)
    }

    /// Categorical signal with confidence and rationale.
    pub fn compute_signal(&self, candles: &[Candle]) -> Result<SignalResult, CandleError> {
        validate_candles(candles)?;
        let series = self.series(candles);

        let ctx = RuleContext {
            snapshot: &series.snapshot,
            previous_histogram: series.previous_histogram,
        };

        let mut net = 0;
        let mut reasons = Vec::new();
        for rule in Rule::EVALUATION_ORDER {
            if let Some(outcome) = rule.evaluate(&ctx, &self.config) {
                debug!(rule = rule.name(), vote = outcome.vote.signed(), "rule fired");
                net += outcome.vote.signed();
                reasons.push(outcome.reason);
            }
        }

        let signal = signal_from_net_votes(net);
        let confidence = confidence(
            net,
            Rule::EVALUATION_ORDER.len(),
            self.config.baseline_confidence,
        );

        if reasons.is_empty() {
            reasons.push(
                "Indicators inconclusive or insufficient history for a directional call"
                    .to_string(),
            );
        }

        debug!(
            signal = signal.as_str(),
            confidence,
            net_votes = net,
            candles = candles.len(),
            "signal computed"
        );

        Ok(SignalResult {
            signal,
            confidence,
            reasons,
            indicators: series.snapshot,
        })
    }

    fn series(&self, candles: &[Candle]) -> IndicatorSeries {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

        let fast = ema_series(&closes, self.config.ema_fast_period);
        let slow = ema_series(&closes, self.config.ema_slow_period);
        let macd = macd_series(
            &closes,
            self.config.ema_fast_period,
            self.config.ema_slow_period,
            self.config.macd_signal_period,
        );
        let rsi = rsi_series(&closes, self.config.rsi_period);

        let snapshot = IndicatorSnapshot {
            ema_fast: fast.last().copied().flatten(),
            ema_slow: slow.last().copied().flatten(),
            macd: macd.latest_line(),
            macd_signal: macd.latest_signal(),
            macd_histogram: macd.latest_histogram(),
            rsi: rsi.last().copied().flatten(),
        };

        IndicatorSeries {
            snapshot,
            previous_histogram: macd.previous_histogram(),
        }
    }
}
