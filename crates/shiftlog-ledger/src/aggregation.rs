//! End-of-shift and running totals.
//!
//! Totals are always recomputed from the full block list. Nothing here caches
//! or updates incrementally, so a summary can never drift from the ledger it
//! was computed from.

use serde::{Deserialize, Serialize};
use shiftlog_types::{ActivityBlock, ActivityKind};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftSummary {
    pub total_meters_drilled: f64,
    pub drilling_minutes: i64,
    pub standby_minutes: i64,
    /// `drilling_minutes + standby_minutes`.
    pub total_minutes: i64,
    pub block_count: usize,
}

/// Summarize a ledger. An empty ledger yields the all-zero summary.
pub fn summarize(blocks: &[ActivityBlock]) -> ShiftSummary {
    let mut summary = ShiftSummary {
        block_count: blocks.len(),
        ..ShiftSummary::default()
    };
    for block in blocks {
        let minutes = block_minutes(block);
        match block.kind() {
            ActivityKind::Drilling => {
                summary.total_meters_drilled += block_meters(block);
                summary.drilling_minutes += minutes;
            }
            ActivityKind::Standby => summary.standby_minutes += minutes,
        }
    }
    summary.total_minutes = summary.drilling_minutes + summary.standby_minutes;
    summary
}

/// Block duration rounded to the nearest whole minute (halves round up).
pub fn block_minutes(block: &ActivityBlock) -> i64 {
    let millis = block.duration().num_milliseconds() as f64;
    (millis / 60_000.0).round() as i64
}

/// Meters drilled by one block; 0 for standby.
pub fn block_meters(block: &ActivityBlock) -> f64 {
    block.activity.meters()
}

/// `"1h 30m"` from one hour up, `"20m"` below.
pub fn format_duration(minutes: i64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m")
    }
}
