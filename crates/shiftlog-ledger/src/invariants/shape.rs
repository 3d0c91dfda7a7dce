//! Activity type and variant field rules.
//!
//! A drilling candidate needs both depths as finite non-negative numbers and
//! must not name a standby reason. A standby candidate needs a reason from the
//! fixed set and must not carry depths or a drill bit. Blank reasons count as
//! absent. The drill bit itself is checked with the drilling interval.

use shiftlog_types::{ActivityKind, DrillBitId, ParseError, StandbyReason};

use crate::candidate::BlockCandidate;
use crate::error::BlockViolation;

/// Candidate fields once the variant is known, before the drilling rules run.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Shape {
    Drilling {
        start_depth: f64,
        end_depth: f64,
        drill_bit_id: Option<DrillBitId>,
    },
    Standby {
        reason: StandbyReason,
    },
}

pub(crate) fn check(candidate: &BlockCandidate) -> Result<Shape, BlockViolation> {
    let kind: ActivityKind =
        candidate
            .activity_type
            .parse()
            .map_err(|_| BlockViolation::UnknownActivityType {
                activity_type: candidate.activity_type.clone(),
            })?;

    let reason = candidate
        .standby_reason
        .as_deref()
        .map(str::trim)
        .filter(|label| !label.is_empty());

    match kind {
        ActivityKind::Drilling => {
            let start_depth = depth(kind, "start_depth", candidate.start_depth)?;
            let end_depth = depth(kind, "end_depth", candidate.end_depth)?;
            if reason.is_some() {
                return Err(BlockViolation::UnexpectedField {
                    kind,
                    field: "standby_reason",
                });
            }
            Ok(Shape::Drilling {
                start_depth,
                end_depth,
                drill_bit_id: candidate.drill_bit_id,
            })
        }
        ActivityKind::Standby => {
            let Some(label) = reason else {
                return Err(BlockViolation::MissingField {
                    kind,
                    field: "standby_reason",
                });
            };
            let reason = label.parse::<StandbyReason>().map_err(|err| match err {
                ParseError::UnknownStandbyReason(reason) => {
                    BlockViolation::UnknownStandbyReason { reason }
                }
                _ => BlockViolation::MissingField {
                    kind,
                    field: "standby_reason",
                },
            })?;
            for (field, present) in [
                ("start_depth", candidate.start_depth.is_some()),
                ("end_depth", candidate.end_depth.is_some()),
                ("drill_bit_id", candidate.drill_bit_id.is_some()),
            ] {
                if present {
                    return Err(BlockViolation::UnexpectedField { kind, field });
                }
            }
            Ok(Shape::Standby { reason })
        }
    }
}

fn depth(kind: ActivityKind, field: &'static str, value: Option<f64>) -> Result<f64, BlockViolation> {
    let value = value.ok_or(BlockViolation::MissingField { kind, field })?;
    if !value.is_finite() || value < 0.0 {
        return Err(BlockViolation::InvalidDepth { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn drilling() -> BlockCandidate {
        let now = Utc::now();
        BlockCandidate::drilling(now, now, 0.0, 10.0, Some(DrillBitId::new()))
    }

    fn standby(reason: &str) -> BlockCandidate {
        let now = Utc::now();
        BlockCandidate::standby(now, now, reason)
    }

    #[test]
    fn unknown_activity_type_reports_unknown_activity_type() {
        let mut candidate = drilling();
        candidate.activity_type = "Drilling".into();
        assert_eq!(
            check(&candidate),
            Err(BlockViolation::UnknownActivityType {
                activity_type: "Drilling".into()
            })
        );
    }

    #[test]
    fn drilling_without_end_depth_reports_missing_field() {
        let mut candidate = drilling();
        candidate.end_depth = None;
        assert_eq!(
            check(&candidate),
            Err(BlockViolation::MissingField {
                kind: ActivityKind::Drilling,
                field: "end_depth",
            })
        );
    }

    #[test]
    fn negative_depth_reports_invalid_depth() {
        let mut candidate = drilling();
        candidate.start_depth = Some(-0.5);
        assert_eq!(
            check(&candidate),
            Err(BlockViolation::InvalidDepth {
                field: "start_depth",
                value: -0.5,
            })
        );
    }

    #[test]
    fn nan_depth_is_not_well_typed() {
        let mut candidate = drilling();
        candidate.end_depth = Some(f64::NAN);
        assert!(matches!(
            check(&candidate),
            Err(BlockViolation::InvalidDepth {
                field: "end_depth",
                ..
            })
        ));
    }

    #[test]
    fn drilling_with_reason_reports_unexpected_field() {
        let mut candidate = drilling();
        candidate.standby_reason = Some("Weather Delay".into());
        assert_eq!(
            check(&candidate),
            Err(BlockViolation::UnexpectedField {
                kind: ActivityKind::Drilling,
                field: "standby_reason",
            })
        );
    }

    #[test]
    fn drilling_with_blank_reason_passes() {
        let mut candidate = drilling();
        candidate.standby_reason = Some(String::new());
        assert!(matches!(check(&candidate), Ok(Shape::Drilling { .. })));
    }

    #[test]
    fn empty_standby_reason_reports_missing_field() {
        for blank in ["", "   "] {
            assert_eq!(
                check(&standby(blank)),
                Err(BlockViolation::MissingField {
                    kind: ActivityKind::Standby,
                    field: "standby_reason",
                })
            );
        }
    }

    #[test]
    fn unlisted_standby_reason_reports_unknown_reason() {
        assert_eq!(
            check(&standby("Lunch")),
            Err(BlockViolation::UnknownStandbyReason {
                reason: "Lunch".into()
            })
        );
    }

    #[test]
    fn standby_with_drill_bit_reports_unexpected_field() {
        let mut candidate = standby("Break Time");
        candidate.drill_bit_id = Some(DrillBitId::new());
        assert_eq!(
            check(&candidate),
            Err(BlockViolation::UnexpectedField {
                kind: ActivityKind::Standby,
                field: "drill_bit_id",
            })
        );
    }

    #[test]
    fn standby_with_known_reason_passes() {
        assert_eq!(
            check(&standby("Waiting on Materials")),
            Ok(Shape::Standby {
                reason: StandbyReason::WaitingOnMaterials
            })
        );
    }
}
