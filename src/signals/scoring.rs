//! Vote aggregation and confidence calculation.

use crate::models::Signal;

/// Map a net vote total to the categorical signal.
pub fn signal_from_net_votes(net: i32) -> Signal {
    if net > 0 {
        Signal::Buy
    } else if net < 0 {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

/// Confidence as an integer percentage.
///
/// Monotonic in |net| relative to the maximum possible vote magnitude: the
/// baseline at a zero net, 100 at unanimity, clamped to [0, 100]. A zero
/// rule count (nothing could vote) reports the baseline.
pub fn confidence(net: i32, max_votes: usize, baseline: u8) -> u8 {
    let baseline = baseline.min(100);
    if max_votes == 0 {
        return baseline;
    }

    let ratio = (net.unsigned_abs() as f64 / max_votes as f64).min(1.0);
    let scaled = baseline as f64 + (100.0 - baseline as f64) * ratio;
    scaled.round().clamp(0.0, 100.0) as u8
}
