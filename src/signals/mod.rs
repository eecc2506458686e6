//! Signal evaluation: ordered rules, vote aggregation, engine facade.

pub mod engine;
pub mod rules;
pub mod scoring;

pub use engine::SignalEngine;
pub use rules::{Rule, RuleContext, RuleOutcome, Vote};
pub use scoring::{confidence, signal_from_net_votes};
