//! The block currently being edited on the logging surface.
//!
//! A draft is caller-owned scratch state. It is seeded from the ledger so a
//! new drilling entry continues from the last drilling end depth, nudged in
//! fixed steps, and converted to a [`BlockCandidate`] for validation. Nothing
//! here is checked; the validator has the final word.

use chrono::{DateTime, TimeDelta, Utc};
use shiftlog_types::{ActivityBlock, ActivityKind, DrillBitId, StandbyReason};

use crate::candidate::BlockCandidate;
use crate::config::LedgerConfig;
use crate::queries::{continuity_default, last_drilling_block};

/// Deepest value a draft depth can be nudged to, in meters.
pub const MAX_DEPTH_M: f64 = 9999.0;

const SNAP_PRECISION: f64 = 1e9;

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityDraft {
    pub kind: ActivityKind,
    pub start_depth: f64,
    pub end_depth: f64,
    pub drill_bit_id: Option<DrillBitId>,
    pub standby_reason: Option<StandbyReason>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    depth_step: f64,
    time_step_minutes: i64,
}

impl ActivityDraft {
    /// A drilling draft that picks up where `prior` left off.
    ///
    /// Start depth is the continuity default, the bit is the one last drilled
    /// with, and the time span starts (empty) at the end of the latest block,
    /// or at `now` for an empty ledger.
    pub fn seeded(prior: &[ActivityBlock], now: DateTime<Utc>, config: &LedgerConfig) -> Self {
        let depth = continuity_default(prior);
        let start_time = prior.last().map(|block| block.end_time).unwrap_or(now);
        Self {
            kind: ActivityKind::Drilling,
            start_depth: depth,
            end_depth: depth,
            drill_bit_id: last_drilling_block(prior)
                .and_then(|block| block.activity.drill_bit())
                .copied(),
            standby_reason: None,
            start_time,
            end_time: start_time,
            depth_step: config.depth_step(),
            time_step_minutes: config.time_step(),
        }
    }

    pub fn select_kind(&mut self, kind: ActivityKind) {
        self.kind = kind;
    }

    /// Move the start depth by `delta` meters, snapped to the depth step.
    /// Refused (returns `false`) if the result would leave `0..=MAX_DEPTH_M`.
    pub fn nudge_start_depth(&mut self, delta: f64) -> bool {
        let next = self.snap(self.start_depth + delta);
        if !(0.0..=MAX_DEPTH_M).contains(&next) {
            return false;
        }
        self.start_depth = next;
        true
    }

    /// Move the end depth by `delta` meters, snapped to the depth step.
    /// Refused if the result would go above `MAX_DEPTH_M` or below the start depth.
    pub fn nudge_end_depth(&mut self, delta: f64) -> bool {
        let next = self.snap(self.end_depth + delta);
        if !(self.start_depth..=MAX_DEPTH_M).contains(&next) {
            return false;
        }
        self.end_depth = next;
        true
    }

    /// Shift the start time by `steps` time steps (negative moves earlier).
    /// Refused (returns `false`) if the result is out of range.
    pub fn step_start_time(&mut self, steps: i64) -> bool {
        match self.stepped(self.start_time, steps) {
            Some(next) => {
                self.start_time = next;
                true
            }
            None => false,
        }
    }

    pub fn step_end_time(&mut self, steps: i64) -> bool {
        match self.stepped(self.end_time, steps) {
            Some(next) => {
                self.end_time = next;
                true
            }
            None => false,
        }
    }

    /// Candidate carrying only the fields of the selected kind.
    pub fn to_candidate(&self) -> BlockCandidate {
        match self.kind {
            ActivityKind::Drilling => BlockCandidate::drilling(
                self.start_time,
                self.end_time,
                self.start_depth,
                self.end_depth,
                self.drill_bit_id,
            ),
            ActivityKind::Standby => BlockCandidate::standby(
                self.start_time,
                self.end_time,
                self.standby_reason.map(|r| r.label()).unwrap_or_default(),
            ),
        }
    }

    /// Reset after `accepted` joined the ledger.
    ///
    /// Drilling continues from the accepted end depth with the same bit, the
    /// reason is cleared, the kind goes back to drilling and the span restarts
    /// at the accepted end time.
    pub fn advance(&mut self, accepted: &ActivityBlock) {
        if let Some((_, end_depth)) = accepted.activity.depth_range() {
            self.start_depth = end_depth;
            self.end_depth = end_depth;
        }
        if let Some(bit) = accepted.activity.drill_bit() {
            self.drill_bit_id = Some(*bit);
        }
        self.kind = ActivityKind::Drilling;
        self.standby_reason = None;
        self.start_time = accepted.end_time;
        self.end_time = accepted.end_time;
    }

    fn stepped(&self, from: DateTime<Utc>, steps: i64) -> Option<DateTime<Utc>> {
        let minutes = steps.checked_mul(self.time_step_minutes)?;
        from.checked_add_signed(TimeDelta::try_minutes(minutes)?)
    }

    /// Nearest multiple of the depth step, cleaned to nine decimals so a
    /// 0.1 m grid yields 0.3 rather than 0.30000000000000004.
    fn snap(&self, value: f64) -> f64 {
        let snapped = (value / self.depth_step).round() * self.depth_step;
        (snapped * SNAP_PRECISION).round() / SNAP_PRECISION
    }
}
