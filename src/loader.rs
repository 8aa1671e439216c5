//! Reading slip records from disk.
//!
//! Accepts either a JSON array of slips or JSONL (one slip per line). Each
//! record is decoded on its own, so one bad row is rejected with a warning
//! while the rest of the file still loads. Text that isn't JSON at all is an
//! error.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

use crate::types::BettingSlip;

/// Slips decoded from a file, plus how many records didn't fit the slip shape
#[derive(Debug, Clone, Default)]
pub struct LoadedSlips {
    pub slips: Vec<BettingSlip>,
    pub rejected: usize,
}

/// Parse slip records from a string (JSON array or JSONL)
pub fn parse_slips(contents: &str) -> Result<LoadedSlips> {
    let trimmed = contents.trim_start();
    if trimmed.is_empty() {
        return Ok(LoadedSlips::default());
    }

    let records: Vec<(usize, Value)> = if trimmed.starts_with('[') {
        let values: Vec<Value> =
            serde_json::from_str(contents).context("Failed to parse slip array")?;
        values.into_iter().enumerate().collect()
    } else {
        let mut values = Vec::new();
        for (line_no, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let value: Value = serde_json::from_str(line)
                .with_context(|| format!("Invalid JSON on line {}", line_no + 1))?;
            values.push((line_no + 1, value));
        }
        values
    };

    let mut loaded = LoadedSlips::default();
    for (position, value) in records {
        match serde_json::from_value::<BettingSlip>(value) {
            Ok(slip) => loaded.slips.push(slip),
            Err(e) => {
                warn!(record = position, error = %e, "[LOADER] Rejected slip record");
                loaded.rejected += 1;
            }
        }
    }

    Ok(loaded)
}

/// Load slip records from a file
pub fn load_slips<P: AsRef<Path>>(path: P) -> Result<LoadedSlips> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read slips from {}", path.display()))?;
    let loaded =
        parse_slips(&contents).with_context(|| format!("Failed to parse {}", path.display()))?;

    info!(
        path = %path.display(),
        slips = loaded.slips.len(),
        rejected = loaded.rejected,
        "[LOADER] Loaded slips"
    );
    Ok(loaded)
}
