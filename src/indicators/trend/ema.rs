//! EMA (Exponential Moving Average) indicator

/// Smoothing state for one EMA instance.
///
/// The recurrence is an explicit fold: feed values in sequence order and the
/// state carries the previous EMA (or the partial seed sum while the first
/// `period` values accumulate). The first defined output is the simple mean
/// of the first `period` inputs; after that
/// `ema = value * k + prev * (1 - k)` with `k = 2 / (period + 1)`.
#[derive(Debug, Clone)]
pub struct EmaState {
    period: usize,
    k: f64,
    seed_sum: f64,
    seed_count: usize,
    value: Option<f64>,
}

impl EmaState {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
            k: 2.0 / (period.max(1) as f64 + 1.0),
            seed_sum: 0.0,
            seed_count: 0,
            value: None,
        }
    }

    /// Feed the next value; returns the EMA once the seed window is full.
    pub fn update(&mut self, value: f64) -> Option<f64> {
        match self.value {
            Some(prev) => {
                let next = value * self.k + prev * (1.0 - self.k);
                self.value = Some(next);
                self.value
            }
            None => {
                self.seed_sum += value;
                self.seed_count += 1;
                if self.seed_count == self.period {
                    self.value = Some(self.seed_sum / self.period as f64);
                }
                self.value
            }
        }
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

/// EMA over a full series, aligned to the input.
///
/// Indices before the seed window completes are `None`. Fewer than `period`
/// inputs leave the whole series undefined.
pub fn ema_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut state = EmaState::new(period);
    values.iter().map(|&v| state.update(v)).collect()
}

/// Final EMA value for a series, if the seed window ever completed.
pub fn latest_ema(values: &[f64], period: usize) -> Option<f64> {
    ema_series(values, period).last().copied().flatten()
}
