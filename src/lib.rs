//! Klinex signal engine
//!
//! Turns a sequence of OHLC candles into technical indicators (EMA, MACD,
//! RSI) and a categorical trading signal with confidence and rationale.
//! The engine itself is pure and synchronous; the HTTP surface and the
//! exchange client live in `core` and `services`.

pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
