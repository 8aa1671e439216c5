//! Betting slip records and per-sport tallies.
//!
//! Slips arrive as JSON records tagged by `slipType`. Every field a record
//! may be missing is an `Option` so that malformed rows still deserialize and
//! can be skipped by the aggregator instead of failing the whole batch.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// RESULT KIND
// =============================================================================

/// Outcome of a single pick (a single slip or one parlay leg)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResultKind {
    Win,
    Lose,
    Pending,
    /// Stake returned, neither won nor lost
    Push,
    /// Pick cancelled by the book
    Void,
    /// Anything we don't recognize, kept verbatim (lowercased)
    Other(String),
}

impl ResultKind {
    /// Parse a result string. Never fails; unknown values become `Other`.
    pub fn parse(s: &str) -> Self {
        let lowered = s.trim().to_lowercase();
        match lowered.as_str() {
            "win" | "won" => ResultKind::Win,
            "lose" | "loss" | "lost" => ResultKind::Lose,
            "pending" | "open" | "live" => ResultKind::Pending,
            "push" => ResultKind::Push,
            "void" | "cancelled" | "canceled" | "refunded" => ResultKind::Void,
            _ => ResultKind::Other(lowered),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResultKind::Win => "win",
            ResultKind::Lose => "lose",
            ResultKind::Pending => "pending",
            ResultKind::Push => "push",
            ResultKind::Void => "void",
            ResultKind::Other(s) => s,
        }
    }
}

impl From<String> for ResultKind {
    fn from(s: String) -> Self {
        ResultKind::parse(&s)
    }
}

impl From<ResultKind> for String {
    fn from(kind: ResultKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for ResultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// SLIPS
// =============================================================================

/// One pick inside a parlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub result: Option<ResultKind>,
}

impl Leg {
    pub fn new(sport: &str, result: ResultKind) -> Self {
        Self {
            sport: Some(sport.to_string()),
            result: Some(result),
        }
    }
}

/// A user's betting submission, discriminated by `slipType`.
///
/// The tag is matched in lowercase, Capitalized or UPPERCASE form; any other
/// spelling reads as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "slipType", rename_all = "lowercase")]
pub enum BettingSlip {
    #[serde(alias = "Single", alias = "SINGLE")]
    Single {
        #[serde(default)]
        sport: Option<String>,
        #[serde(default)]
        result: Option<ResultKind>,
    },
    #[serde(alias = "Parlay", alias = "PARLAY")]
    Parlay {
        #[serde(default)]
        legs: Option<Vec<Leg>>,
    },
    /// Any `slipType` we don't know how to read
    #[serde(other)]
    Unknown,
}

impl BettingSlip {
    pub fn single(sport: &str, result: ResultKind) -> Self {
        BettingSlip::Single {
            sport: Some(sport.to_string()),
            result: Some(result),
        }
    }

    pub fn parlay(legs: Vec<Leg>) -> Self {
        BettingSlip::Parlay { legs: Some(legs) }
    }

    /// Number of picks this slip carries (1 for singles, legs for parlays)
    pub fn pick_count(&self) -> usize {
        match self {
            BettingSlip::Single { .. } => 1,
            BettingSlip::Parlay { legs } => legs.as_ref().map_or(0, Vec::len),
            BettingSlip::Unknown => 0,
        }
    }
}

// =============================================================================
// TALLIES
// =============================================================================

/// Per-sport counters.
///
/// `total` always equals `wins + losses + pending + other`; pushes, voids and
/// unrecognized results land in `other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportTally {
    pub total: u64,
    pub wins: u64,
    pub losses: u64,
    pub pending: u64,
    #[serde(default)]
    pub other: u64,
}

impl SportTally {
    /// Count one observation
    pub fn record(&mut self, result: &ResultKind) {
        self.total += 1;
        match result {
            ResultKind::Win => self.wins += 1,
            ResultKind::Lose => self.losses += 1,
            ResultKind::Pending => self.pending += 1,
            ResultKind::Push | ResultKind::Void | ResultKind::Other(_) => self.other += 1,
        }
    }

    pub fn merge(&mut self, other: &SportTally) {
        self.total += other.total;
        self.wins += other.wins;
        self.losses += other.losses;
        self.pending += other.pending;
        self.other += other.other;
    }

    /// Picks with a decided win/lose outcome
    pub fn settled(&self) -> u64 {
        self.wins + self.losses
    }

    /// Wins over settled picks, `None` until something settles
    pub fn win_rate(&self) -> Option<f64> {
        match self.settled() {
            0 => None,
            settled => Some(self.wins as f64 / settled as f64),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.total == self.wins + self.losses + self.pending + self.other
    }
}

/// Canonical sport name -> tally. Ordered so output is stable.
pub type SportBreakdown = BTreeMap<String, SportTally>;
