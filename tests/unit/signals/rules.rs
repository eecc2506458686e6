//! Unit tests for the individual decision rules

use klinex::config::EngineConfig;
use klinex::models::IndicatorSnapshot;
use klinex::signals::{Rule, RuleContext, Vote};

fn snapshot() -> IndicatorSnapshot {
    IndicatorSnapshot::default()
}

fn ctx<'a>(snapshot: &'a IndicatorSnapshot, previous_histogram: Option<f64>) -> RuleContext<'a> {
    RuleContext {
        snapshot,
        previous_histogram,
    }
}

#[test]
fn trend_votes_bullish_when_fast_leads() {
    let config = EngineConfig::default();
    let snap = IndicatorSnapshot {
        ema_fast: Some(101.0),
        ema_slow: Some(100.0),
        ..snapshot()
    };
    let outcome = Rule::Trend.evaluate(&ctx(&snap, None), &config).unwrap();
    assert_eq!(outcome.vote, Vote::Bullish);
    assert!(outcome.reason.contains("EMA12"));
    assert!(outcome.reason.contains("EMA26"));
}

#[test]
fn trend_votes_bearish_when_fast_trails() {
    let config = EngineConfig::default();
    let snap = IndicatorSnapshot {
        ema_fast: Some(99.0),
        ema_slow: Some(100.0),
        ..snapshot()
    };
    let outcome = Rule::Trend.evaluate(&ctx(&snap, None), &config).unwrap();
    assert_eq!(outcome.vote, Vote::Bearish);
}

#[test]
fn trend_abstains_on_equality_or_missing_emas() {
    let config = EngineConfig::default();
    let equal = IndicatorSnapshot {
        ema_fast: Some(100.0),
        ema_slow: Some(100.0),
        ..snapshot()
    };
    assert!(Rule::Trend.evaluate(&ctx(&equal, None), &config).is_none());

    let missing = IndicatorSnapshot {
        ema_fast: Some(100.0),
        ..snapshot()
    };
    assert!(Rule::Trend.evaluate(&ctx(&missing, None), &config).is_none());
}

#[test]
fn momentum_fires_on_a_zero_cross_up() {
    let config = EngineConfig::default();
    let snap = IndicatorSnapshot {
        macd_histogram: Some(0.3),
        ..snapshot()
    };
    let outcome = Rule::Momentum
        .evaluate(&ctx(&snap, Some(-0.1)), &config)
        .unwrap();
    assert_eq!(outcome.vote, Vote::Bullish);
    assert!(outcome.reason.contains("crossed above zero"));
}

#[test]
fn momentum_fires_when_positive_and_rising() {
    let config = EngineConfig::default();
    let snap = IndicatorSnapshot {
        macd_histogram: Some(0.4),
        ..snapshot()
    };
    let outcome = Rule::Momentum
        .evaluate(&ctx(&snap, Some(0.2)), &config)
        .unwrap();
    assert_eq!(outcome.vote, Vote::Bullish);
    assert!(outcome.reason.contains("rising"));
}

#[test]
fn momentum_mirrors_for_the_bearish_side() {
    let config = EngineConfig::default();
    let crossed = IndicatorSnapshot {
        macd_histogram: Some(-0.3),
        ..snapshot()
    };
    let outcome = Rule::Momentum
        .evaluate(&ctx(&crossed, Some(0.1)), &config)
        .unwrap();
    assert_eq!(outcome.vote, Vote::Bearish);

    let falling = IndicatorSnapshot {
        macd_histogram: Some(-0.4),
        ..snapshot()
    };
    let outcome = Rule::Momentum
        .evaluate(&ctx(&falling, Some(-0.2)), &config)
        .unwrap();
    assert_eq!(outcome.vote, Vote::Bearish);
}

#[test]
fn momentum_abstains_when_positive_but_fading() {
    let config = EngineConfig::default();
    let snap = IndicatorSnapshot {
        macd_histogram: Some(0.3),
        ..snapshot()
    };
    assert!(Rule::Momentum
        .evaluate(&ctx(&snap, Some(0.5)), &config)
        .is_none());
}

#[test]
fn momentum_is_skipped_without_two_histogram_values() {
    let config = EngineConfig::default();
    let snap = IndicatorSnapshot {
        macd_histogram: Some(0.3),
        ..snapshot()
    };
    assert!(Rule::Momentum.evaluate(&ctx(&snap, None), &config).is_none());
}

#[test]
fn rsi_bands_vote_against_the_extremes() {
    let config = EngineConfig::default();

    let overbought = IndicatorSnapshot {
        rsi: Some(78.2),
        ..snapshot()
    };
    let outcome = Rule::RsiBands
        .evaluate(&ctx(&overbought, None), &config)
        .unwrap();
    assert_eq!(outcome.vote, Vote::Bearish);
    assert!(outcome.reason.contains("overbought"));

    let oversold = IndicatorSnapshot {
        rsi: Some(22.9),
        ..snapshot()
    };
    let outcome = Rule::RsiBands
        .evaluate(&ctx(&oversold, None), &config)
        .unwrap();
    assert_eq!(outcome.vote, Vote::Bullish);
    assert!(outcome.reason.contains("oversold"));
}

#[test]
fn rsi_bands_abstain_in_the_middle_or_when_missing() {
    let config = EngineConfig::default();
    let mid = IndicatorSnapshot {
        rsi: Some(55.0),
        ..snapshot()
    };
    assert!(Rule::RsiBands.evaluate(&ctx(&mid, None), &config).is_none());
    assert!(Rule::RsiBands
        .evaluate(&ctx(&snapshot(), None), &config)
        .is_none());
}

#[test]
fn bands_follow_the_configured_thresholds() {
    let config = EngineConfig {
        rsi_overbought: 60.0,
        rsi_oversold: 40.0,
        ..EngineConfig::default()
    };
    let snap = IndicatorSnapshot {
        rsi: Some(65.0),
        ..snapshot()
    };
    let outcome = Rule::RsiBands.evaluate(&ctx(&snap, None), &config).unwrap();
    assert_eq!(outcome.vote, Vote::Bearish);
}

#[test]
fn evaluation_order_is_stable() {
    assert_eq!(
        Rule::EVALUATION_ORDER,
        [Rule::Trend, Rule::Momentum, Rule::RsiBands]
    );
}
