//! Betting slip sport breakdown
//!
//! Summarizes betting slips into per-sport win/loss/pending tallies. Parlays
//! are flattened so every leg counts toward its own sport, and raw sport
//! codes are mapped to canonical names through an explicit lookup table.

pub mod breakdown;
pub mod config;
pub mod loader;
pub mod logging;
pub mod normalize;
pub mod types;

pub use breakdown::{build_sport_breakdown, BreakdownAggregator, BreakdownReport, SkipCounts};
pub use normalize::SportNormalizer;
pub use types::{BettingSlip, Leg, ResultKind, SportBreakdown, SportTally};
