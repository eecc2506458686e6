//! RSI (Relative Strength Index) indicator

/// Wilder smoothing state for one RSI instance.
///
/// Fed with per-candle price deltas. The seed averages are the simple mean
/// of the first `period` gains/losses; afterwards
/// `avg = (prev * (period - 1) + x) / period`.
#[derive(Debug, Clone)]
pub struct RsiState {
    period: usize,
    seed_gain_sum: f64,
    seed_loss_sum: f64,
    seed_count: usize,
    averages: Option<(f64, f64)>,
}

impl RsiState {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
            seed_gain_sum: 0.0,
            seed_loss_sum: 0.0,
            seed_count: 0,
            averages: None,
        }
    }

    /// Feed the next close-to-close delta; returns RSI once seeded.
    pub fn update(&mut self, delta: f64) -> Option<f64> {
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);

        self.averages = match self.averages {
            Some((avg_gain, avg_loss)) => {
                let n = self.period as f64;
                Some((
                    (avg_gain * (n - 1.0) + gain) / n,
                    (avg_loss * (n - 1.0) + loss) / n,
                ))
            }
            None => {
                self.seed_gain_sum += gain;
                self.seed_loss_sum += loss;
                self.seed_count += 1;
                if self.seed_count == self.period {
                    let n = self.period as f64;
                    Some((self.seed_gain_sum / n, self.seed_loss_sum / n))
                } else {
                    None
                }
            }
        };

        self.averages.map(|(g, l)| rsi_value(g, l))
    }
}

/// RSI from smoothed averages, with the zero-loss tie-breaks: no losses at
/// all is fully overbought (100) unless there were no gains either, which
/// is the defined neutral case (50).
fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return 50.0;
        }
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

/// RSI over a full close series, aligned to the input.
///
/// Index `i` uses the deltas up to `close[i]`; the first defined value is
/// at index `period` (period deltas need period + 1 closes).
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut state = RsiState::new(period);
    let mut out = Vec::with_capacity(closes.len());

    for i in 0..closes.len() {
        if i == 0 {
            out.push(None);
        } else {
            out.push(state.update(closes[i] - closes[i - 1]));
        }
    }

    out
}

/// Final RSI value for a series, if enough history accumulated.
pub fn latest_rsi(closes: &[f64], period: usize) -> Option<f64> {
    rsi_series(closes, period).last().copied().flatten()
}
