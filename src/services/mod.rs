//! External collaborators: market data retrieval.

pub mod binance;
pub mod market_data;

pub use binance::BinanceKlineClient;
pub use market_data::{Interval, MarketDataError, MarketDataProvider};
