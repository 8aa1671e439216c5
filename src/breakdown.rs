//! Per-sport outcome breakdown across betting slips.
//!
//! Singles contribute one observation each. Parlays are flattened: every leg
//! is its own observation and counts toward its own sport, so a three-leg
//! NBA/NFL/NFL parlay adds 1 to basketball and 2 to football.
//!
//! Aggregation never fails. Malformed records are skipped and counted in
//! [`SkipCounts`]; results outside win/lose/pending go to the `other` counter.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::SportNormalizer;
use crate::types::{BettingSlip, ResultKind, SportBreakdown, SportTally};

/// Why an observation was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Sport absent or blank
    MissingSport,
    MissingResult,
    /// Parlay with absent or empty `legs`
    EmptyParlay,
    UnknownSlipType,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingSport => write!(f, "missing_sport"),
            SkipReason::MissingResult => write!(f, "missing_result"),
            SkipReason::EmptyParlay => write!(f, "empty_parlay"),
            SkipReason::UnknownSlipType => write!(f, "unknown_slip_type"),
        }
    }
}

/// Skipped-observation counters, one per [`SkipReason`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipCounts {
    pub missing_sport: u64,
    pub missing_result: u64,
    pub empty_parlay: u64,
    pub unknown_slip_type: u64,
}

impl SkipCounts {
    pub fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::MissingSport => self.missing_sport += 1,
            SkipReason::MissingResult => self.missing_result += 1,
            SkipReason::EmptyParlay => self.empty_parlay += 1,
            SkipReason::UnknownSlipType => self.unknown_slip_type += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.missing_sport + self.missing_result + self.empty_parlay + self.unknown_slip_type
    }

    pub fn merge(&mut self, other: &SkipCounts) {
        self.missing_sport += other.missing_sport;
        self.missing_result += other.missing_result;
        self.empty_parlay += other.empty_parlay;
        self.unknown_slip_type += other.unknown_slip_type;
    }
}

/// One (sport, result) pick pulled out of a slip, sport still raw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation<'a> {
    pub sport: &'a str,
    pub result: &'a ResultKind,
}

/// Aggregation output, serialized as `{"sportBreakdown": {...}, "skipped": {...}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownReport {
    pub sport_breakdown: SportBreakdown,
    #[serde(default)]
    pub skipped: SkipCounts,
}

impl BreakdownReport {
    pub fn tally(&self, sport: &str) -> Option<&SportTally> {
        self.sport_breakdown.get(sport)
    }

    /// All sports summed into one tally
    pub fn overall(&self) -> SportTally {
        let mut overall = SportTally::default();
        for tally in self.sport_breakdown.values() {
            overall.merge(tally);
        }
        overall
    }

    /// Fold another report into this one. Order of merging doesn't matter.
    pub fn merge(&mut self, other: &BreakdownReport) {
        for (sport, tally) in &other.sport_breakdown {
            self.sport_breakdown
                .entry(sport.clone())
                .or_default()
                .merge(tally);
        }
        self.skipped.merge(&other.skipped);
    }

    pub fn is_empty(&self) -> bool {
        self.sport_breakdown.is_empty()
    }
}

/// Builds [`BreakdownReport`]s using a fixed sport normalization table.
#[derive(Debug, Clone, Default)]
pub struct BreakdownAggregator {
    normalizer: SportNormalizer,
}

impl BreakdownAggregator {
    pub fn new(normalizer: SportNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &SportNormalizer {
        &self.normalizer
    }

    /// Flatten slips into observations, parlay legs expanded in order.
    ///
    /// Records with a missing sport or result are dropped here and counted in
    /// the returned [`SkipCounts`]. Blank sport strings are left for
    /// normalization to reject.
    pub fn observations<'a>(
        &self,
        slips: &'a [BettingSlip],
    ) -> (Vec<Observation<'a>>, SkipCounts) {
        let mut observations = Vec::with_capacity(slips.len());
        let mut skipped = SkipCounts::default();

        for (index, slip) in slips.iter().enumerate() {
            match slip {
                BettingSlip::Single { sport, result } => {
                    match observe(sport.as_deref(), result.as_ref()) {
                        Ok(obs) => observations.push(obs),
                        Err(reason) => {
                            debug!(slip = index, %reason, "[BREAKDOWN] Skipping single");
                            skipped.record(reason);
                        }
                    }
                }
                BettingSlip::Parlay { legs } => {
                    let legs = match legs.as_deref() {
                        Some(legs) if !legs.is_empty() => legs,
                        _ => {
                            debug!(slip = index, "[BREAKDOWN] Skipping parlay without legs");
                            skipped.record(SkipReason::EmptyParlay);
                            continue;
                        }
                    };
                    for (leg_index, leg) in legs.iter().enumerate() {
                        match observe(leg.sport.as_deref(), leg.result.as_ref()) {
                            Ok(obs) => observations.push(obs),
                            Err(reason) => {
                                debug!(
                                    slip = index,
                                    leg = leg_index,
                                    %reason,
                                    "[BREAKDOWN] Skipping parlay leg"
                                );
                                skipped.record(reason);
                            }
                        }
                    }
                }
                BettingSlip::Unknown => {
                    debug!(slip = index, "[BREAKDOWN] Skipping unknown slip type");
                    skipped.record(SkipReason::UnknownSlipType);
                }
            }
        }

        (observations, skipped)
    }

    /// Count wins/losses/pending per canonical sport.
    ///
    /// Pure: the input is only read, and the same slips in any order give the
    /// same report.
    pub fn build_sport_breakdown(&self, slips: &[BettingSlip]) -> BreakdownReport {
        let (observations, mut skipped) = self.observations(slips);
        let mut sport_breakdown = SportBreakdown::new();

        for obs in &observations {
            let Some(sport) = self.normalizer.normalize(obs.sport) else {
                skipped.record(SkipReason::MissingSport);
                continue;
            };
            sport_breakdown.entry(sport).or_default().record(obs.result);
        }

        debug!(
            slips = slips.len(),
            observations = observations.len(),
            sports = sport_breakdown.len(),
            skipped = skipped.total(),
            "[BREAKDOWN] Aggregated"
        );

        BreakdownReport {
            sport_breakdown,
            skipped,
        }
    }
}

fn observe<'a>(
    sport: Option<&'a str>,
    result: Option<&'a ResultKind>,
) -> Result<Observation<'a>, SkipReason> {
    let sport = sport.ok_or(SkipReason::MissingSport)?;
    let result = result.ok_or(SkipReason::MissingResult)?;
    Ok(Observation { sport, result })
}

/// Aggregate with the built-in sport table
pub fn build_sport_breakdown(slips: &[BettingSlip]) -> BreakdownReport {
    BreakdownAggregator::default().build_sport_breakdown(slips)
}
