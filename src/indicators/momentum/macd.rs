//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::trend::EmaState;

/// MACD line, signal line and histogram over a full close series, each
/// aligned to the input length.
///
/// The line is `EMA(fast) - EMA(slow)` where both are defined (from the
/// slow seed index onward). The signal line is an EMA of the defined line
/// values with the same seed-then-recurrence rule, so it needs
/// `slow + signal - 1` candles before its first value. The histogram is
/// line minus signal, elementwise.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub line: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

impl MacdSeries {
    pub fn latest_line(&self) -> Option<f64> {
        self.line.last().copied().flatten()
    }

    pub fn latest_signal(&self) -> Option<f64> {
        self.signal.last().copied().flatten()
    }

    pub fn latest_histogram(&self) -> Option<f64> {
        self.histogram.last().copied().flatten()
    }

    /// Histogram value one candle before the last, used for crossover
    /// detection over the closing pair of candles.
    pub fn previous_histogram(&self) -> Option<f64> {
        if self.histogram.len() < 2 {
            return None;
        }
        self.histogram[self.histogram.len() - 2]
    }
}

pub fn macd_series(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdSeries {
    let mut fast = EmaState::new(fast_period);
    let mut slow = EmaState::new(slow_period);
    let mut signal_ema = EmaState::new(signal_period);

    let mut line = Vec::with_capacity(closes.len());
    let mut signal = Vec::with_capacity(closes.len());
    let mut histogram = Vec::with_capacity(closes.len());

    for &close in closes {
        let fast_value = fast.update(close);
        let slow_value = slow.update(close);

        let line_value = match (fast_value, slow_value) {
            (Some(f), Some(s)) => Some(f - s),
            _ => None,
        };
        // The signal EMA runs over the MACD line values, not raw closes.
        let signal_value = line_value.and_then(|l| signal_ema.update(l));
        let histogram_value = match (line_value, signal_value) {
            (Some(l), Some(s)) => Some(l - s),
            _ => None,
        };

        line.push(line_value);
        signal.push(signal_value);
        histogram.push(histogram_value);
    }

    MacdSeries {
        line,
        signal,
        histogram,
    }
}
