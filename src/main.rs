//! Command-line front end: read slips from a JSON/JSONL file and print the
//! per-sport breakdown as JSON on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, info_span, warn};

use slip_breakdown::config::{parse_sport_aliases, BreakdownConfig};
use slip_breakdown::loader::load_slips;
use slip_breakdown::logging::{self, LogConfig};
use slip_breakdown::BreakdownAggregator;

#[derive(Debug, Parser)]
#[command(name = "slip-breakdown", version, about = "Per-sport breakdown of betting slips")]
struct Args {
    /// Slip records, as a JSON array or one JSON object per line
    file: PathBuf,

    /// Extra sport alias, `code=canonical` (repeatable, overrides SPORT_ALIASES)
    #[arg(long = "alias", value_name = "CODE=SPORT")]
    aliases: Vec<String>,

    /// Pretty-print the report
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    // .env must be loaded before config and logging read the environment
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let log_config = LogConfig::from_env();
    let _log_guard = logging::init_logging(&log_config);

    let span = info_span!("slip_breakdown", run_id = %log_config.run_id);
    let _enter = span.enter();

    let mut config = BreakdownConfig::from_env();
    for raw in &args.aliases {
        config.sport_aliases.extend(parse_sport_aliases(raw));
    }
    config.pretty_output |= args.pretty;

    let loaded = load_slips(&args.file)?;
    if loaded.rejected > 0 {
        warn!(rejected = loaded.rejected, "Some records were not valid slips");
    }

    let aggregator = BreakdownAggregator::new(config.normalizer());
    info!(
        sport_codes = aggregator.normalizer().len(),
        custom_aliases = config.sport_aliases.len(),
        "Sport table ready"
    );
    let report = aggregator.build_sport_breakdown(&loaded.slips);

    let overall = report.overall();
    info!(
        slips = loaded.slips.len(),
        sports = report.sport_breakdown.len(),
        picks = overall.total,
        skipped = report.skipped.total(),
        "Breakdown complete"
    );

    let json = if config.pretty_output {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("Failed to serialize report")?;
    println!("{}", json);

    Ok(())
}
