//! Pure indicator math over candle close series.
//!
//! Everything here is deterministic and allocation-only; validation of the
//! input sequence happens at the engine boundary, not in these functions.

pub mod momentum;
pub mod trend;

pub use momentum::{latest_rsi, macd_series, rsi_series, MacdSeries, RsiState};
pub use trend::{ema_series, latest_ema, EmaState};
