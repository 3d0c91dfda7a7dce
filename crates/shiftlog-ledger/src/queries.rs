//! Read-only queries over a ledger's blocks.
//!
//! All functions expect blocks in sequence order (as returned by
//! [`Ledger::list`](crate::Ledger::list)) and scan in O(n).

use shiftlog_types::{ActivityBlock, ActivityKind};

/// The most recent drilling block, if any.
pub fn last_drilling_block(blocks: &[ActivityBlock]) -> Option<&ActivityBlock> {
    blocks
        .iter()
        .rev()
        .find(|block| block.kind() == ActivityKind::Drilling)
}

/// Start depth to offer for the next drilling block: the end depth of the most
/// recent drilling block, or 0 for a shift that has not drilled yet.
///
/// Standby blocks do not reset it.
pub fn continuity_default(blocks: &[ActivityBlock]) -> f64 {
    last_drilling_block(blocks)
        .and_then(|block| block.activity.depth_range())
        .map(|(_, end_depth)| end_depth)
        .unwrap_or(0.0)
}
