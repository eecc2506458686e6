//! Ordered rule checklist for the signal decision.
//!
//! Each rule is a predicate over the indicator snapshot (plus the previous
//! histogram value for crossover detection). A rule whose inputs are still
//! undefined is skipped: no vote, no error.

use crate::config::EngineConfig;
use crate::models::IndicatorSnapshot;

/// Direction of a single rule vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Bullish,
    Bearish,
}

impl Vote {
    /// Signed weight: bullish +1, bearish -1.
    pub fn signed(&self) -> i32 {
        match self {
            Vote::Bullish => 1,
            Vote::Bearish => -1,
        }
    }
}

/// A fired rule: its vote and the human-readable reason.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub vote: Vote,
    pub reason: String,
}

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub snapshot: &'a IndicatorSnapshot,
    /// Histogram value one candle before the last, for crossover detection.
    pub previous_histogram: Option<f64>,
}

/// The decision rules, in evaluation order. The order is part of the
/// contract: reasons are reported in this order, not by importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Trend,
    Momentum,
    RsiBands,
}

impl Rule {
    pub const EVALUATION_ORDER: [Rule; 3] = [Rule::Trend, Rule::Momentum, Rule::RsiBands];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Trend => "trend",
            Rule::Momentum => "momentum",
            Rule::RsiBands => "rsi_bands",
        }
    }

    pub fn evaluate(&self, ctx: &RuleContext<'_>, config: &EngineConfig) -> Option<RuleOutcome> {
        match self {
            Rule::Trend => evaluate_trend(ctx, config),
            Rule::Momentum => evaluate_momentum(ctx),
            Rule::RsiBands => evaluate_rsi_bands(ctx, config),
        }
    }
}

/// Fast EMA above slow EMA is an uptrend, below is a downtrend, equal is
/// no vote.
fn evaluate_trend(ctx: &RuleContext<'_>, config: &EngineConfig) -> Option<RuleOutcome> {
    let fast = ctx.snapshot.ema_fast?;
    let slow = ctx.snapshot.ema_slow?;

    if fast > slow {
        Some(RuleOutcome {
            vote: Vote::Bullish,
            reason: format!(
                "EMA{} above EMA{} (bullish trend)",
                config.ema_fast_period, config.ema_slow_period
            ),
        })
    } else if fast < slow {
        Some(RuleOutcome {
            vote: Vote::Bearish,
            reason: format!(
                "EMA{} below EMA{} (bearish trend)",
                config.ema_fast_period, config.ema_slow_period
            ),
        })
    } else {
        None
    }
}

/// MACD histogram crossing from non-positive to positive over the closing
/// pair of candles, or positive and rising, is bullish momentum; the mirror
/// condition is bearish.
fn evaluate_momentum(ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
    let current = ctx.snapshot.macd_histogram?;
    let previous = ctx.previous_histogram?;

    let crossed_up = previous <= 0.0 && current > 0.0;
    let rising = current > 0.0 && current > previous;
    if crossed_up || rising {
        let reason = if crossed_up {
            "MACD histogram crossed above zero (bullish momentum)".to_string()
        } else {
            "MACD histogram positive and rising (bullish momentum)".to_string()
        };
        return Some(RuleOutcome {
            vote: Vote::Bullish,
            reason,
        });
    }

    let crossed_down = previous >= 0.0 && current < 0.0;
    let falling = current < 0.0 && current < previous;
    if crossed_down || falling {
        let reason = if crossed_down {
            "MACD histogram crossed below zero (bearish momentum)".to_string()
        } else {
            "MACD histogram negative and falling (bearish momentum)".to_string()
        };
        return Some(RuleOutcome {
            vote: Vote::Bearish,
            reason,
        });
    }

    None
}

/// RSI above the overbought band expects a pullback (bearish); below the
/// oversold band expects a bounce (bullish).
fn evaluate_rsi_bands(ctx: &RuleContext<'_>, config: &EngineConfig) -> Option<RuleOutcome> {
    let rsi = ctx.snapshot.rsi?;

    if rsi > config.rsi_overbought {
        Some(RuleOutcome {
            vote: Vote::Bearish,
            reason: format!(
                "RSI {:.1} above {} (overbought)",
                rsi, config.rsi_overbought
            ),
        })
    } else if rsi < config.rsi_oversold {
        Some(RuleOutcome {
            vote: Vote::Bullish,
            reason: format!("RSI {:.1} below {} (oversold)", rsi, config.rsi_oversold),
        })
    } else {
        None
    }
}
