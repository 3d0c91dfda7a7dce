//! Activity block validation.
//!
//! Two entry points:
//! - [`validate`]: decides whether one candidate may join a ledger. Pure; no
//!   store access. Rules run in a fixed order and the first failure wins:
//!   - [`shape`]: activity type is known, the variant's fields are present and
//!     well-typed, and no field of the other variant is set.
//!   - [`timing`]: end time is not earlier than start time.
//!   - [`drilling`]: drilling strictly advances depth and names a drill bit.
//! - [`audit`]: re-checks a ledger loaded from the store and collects every
//!   violation instead of stopping at the first. Used for diagnostics and to
//!   refuse numbering on top of a broken sequence.
//!
//! Depth continuity is advisory. A drilling block whose start depth differs
//! from the previous drilling end depth is accepted; the difference is
//! reported back in [`Accepted::depth_gap`].

mod drilling;
mod sequence;
mod shape;
mod timing;

use shiftlog_types::{ActivityBlock, NewBlock, ShiftId};

use crate::candidate::BlockCandidate;
use crate::error::BlockViolation;
use crate::queries::continuity_default;

/// A candidate that passed every rule.
#[derive(Clone, Debug, PartialEq)]
pub struct Accepted {
    pub block: NewBlock,
    /// `start_depth - continuity default` for drilling blocks that do not
    /// continue from the previous drilling end depth.
    pub depth_gap: Option<f64>,
}

/// Decide whether `candidate` may be appended after `prior` (sequence order).
pub fn validate(
    candidate: &BlockCandidate,
    prior: &[ActivityBlock],
) -> Result<Accepted, BlockViolation> {
    let shape = shape::check(candidate)?;
    timing::check(candidate.start_time, candidate.end_time)?;
    let activity = drilling::check(shape)?;

    let depth_gap = activity.depth_range().and_then(|(start_depth, _)| {
        let gap = start_depth - continuity_default(prior);
        (gap != 0.0).then_some(gap)
    });

    Ok(Accepted {
        block: NewBlock {
            start_time: candidate.start_time,
            end_time: candidate.end_time,
            activity,
        },
        depth_gap,
    })
}

/// Batch-check a loaded ledger, returning all detected violations.
///
/// `blocks` must already be sorted by `sequence_order`. Numbering and
/// ownership are checked first, then each block is re-checked against the
/// timing and drilling rules it had to pass on the way in.
pub fn audit(shift_id: ShiftId, blocks: &[ActivityBlock]) -> Vec<BlockViolation> {
    let mut violations = sequence::check(shift_id, blocks);
    for block in blocks {
        if let Err(v) = timing::check(block.start_time, block.end_time) {
            violations.push(v);
        }
        if let Some((start_depth, end_depth)) = block.activity.depth_range()
            && let Err(v) = drilling::check_interval(start_depth, end_depth)
        {
            violations.push(v);
        }
    }
    violations
}

/// Numbering and ownership violations only. These make the next sequence
/// order ambiguous, so the ledger refuses to append on top of them.
pub(crate) fn sequence_violations(shift_id: ShiftId, blocks: &[ActivityBlock]) -> Vec<BlockViolation> {
    sequence::check(shift_id, blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use shiftlog_types::{Activity, BlockId, DrillBitId, StandbyReason};
    use similar_asserts::assert_eq;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, h, m, 0).unwrap()
    }

    fn drilled(shift_id: ShiftId, seq: u32, start_depth: f64, end_depth: f64) -> ActivityBlock {
        ActivityBlock {
            id: BlockId::new(),
            shift_id,
            sequence_order: seq,
            start_time: at(7, 0),
            end_time: at(8, 0),
            activity: Activity::Drilling {
                start_depth,
                end_depth,
                drill_bit_id: DrillBitId::new(),
            },
        }
    }

    #[test]
    fn first_failing_rule_wins() {
        // Unknown type, and the times are reversed as well: rule (a) reports.
        let mut candidate = BlockCandidate::standby(at(9, 0), at(8, 0), "Weather Delay");
        candidate.activity_type = "IDLE".into();
        assert_eq!(
            validate(&candidate, &[]),
            Err(BlockViolation::UnknownActivityType {
                activity_type: "IDLE".into()
            })
        );

        // Reversed times and zero-length drilling: timing reports before depth.
        let candidate = BlockCandidate::drilling(at(9, 0), at(8, 0), 5.0, 5.0, None);
        assert_eq!(
            validate(&candidate, &[]),
            Err(BlockViolation::EndBeforeStart {
                start_time: at(9, 0),
                end_time: at(8, 0),
            })
        );
    }

    #[test]
    fn accepted_drilling_carries_typed_activity() {
        let bit = DrillBitId::new();
        let candidate = BlockCandidate::drilling(at(8, 0), at(9, 30), 10.0, 25.5, Some(bit));
        let accepted = validate(&candidate, &[]).unwrap();
        assert_eq!(
            accepted.block.activity,
            Activity::Drilling {
                start_depth: 10.0,
                end_depth: 25.5,
                drill_bit_id: bit,
            }
        );
        // No prior drilling: continuity default is 0.
        assert_eq!(accepted.depth_gap, Some(10.0));
    }

    #[test]
    fn diverging_start_depth_is_accepted_with_gap() {
        let shift_id = ShiftId::new();
        let prior = vec![drilled(shift_id, 1, 0.0, 50.0)];

        let continuing =
            BlockCandidate::drilling(at(8, 0), at(9, 0), 50.0, 60.0, Some(DrillBitId::new()));
        assert_eq!(validate(&continuing, &prior).unwrap().depth_gap, None);

        let jumped =
            BlockCandidate::drilling(at(8, 0), at(9, 0), 55.0, 60.0, Some(DrillBitId::new()));
        assert_eq!(validate(&jumped, &prior).unwrap().depth_gap, Some(5.0));
    }

    #[test]
    fn standby_has_no_depth_gap() {
        let candidate = BlockCandidate::standby_for(at(8, 0), at(8, 20), StandbyReason::WeatherDelay);
        let accepted = validate(&candidate, &[]).unwrap();
        assert_eq!(accepted.depth_gap, None);
        assert_eq!(accepted.block.activity.kind(), shiftlog_types::ActivityKind::Standby);
    }

    #[test]
    fn audit_collects_every_violation() {
        let shift_id = ShiftId::new();
        let mut reversed = drilled(shift_id, 2, 10.0, 20.0);
        reversed.start_time = at(9, 0);
        reversed.end_time = at(8, 0);
        let flat = drilled(shift_id, 4, 20.0, 20.0);

        let violations = audit(shift_id, &[drilled(shift_id, 1, 0.0, 10.0), reversed, flat]);
        assert_eq!(
            violations,
            vec![
                BlockViolation::SequenceGap {
                    position: 2,
                    expected: 3,
                    actual: 4,
                },
                BlockViolation::EndBeforeStart {
                    start_time: at(9, 0),
                    end_time: at(8, 0),
                },
                BlockViolation::NonPositiveInterval {
                    start_depth: 20.0,
                    end_depth: 20.0,
                },
            ]
        );
    }

    #[test]
    fn audit_of_clean_ledger_is_empty() {
        let shift_id = ShiftId::new();
        let blocks = vec![drilled(shift_id, 1, 0.0, 10.0), drilled(shift_id, 2, 10.0, 12.5)];
        assert!(audit(shift_id, &blocks).is_empty());
    }
}
