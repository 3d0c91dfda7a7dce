use chrono::{DateTime, Utc};
use shiftlog_store::{RecordKind, StoreError};
use shiftlog_types::{ActivityKind, LifecycleState, SafetyCheckItem, ShiftId};
use std::fmt;

use crate::lifecycle::Operation;

/// Why a candidate block (or a loaded ledger) failed validation.
///
/// Candidate rules are checked in a fixed order and the first failure wins:
/// activity type, then variant fields, then timing, then the drilling interval
/// and bit. The sequence variants are only produced when auditing a ledger
/// loaded from the store.
#[derive(Clone, Debug, PartialEq)]
pub enum BlockViolation {
    /// `activity_type` is neither `DRILLING` nor `STANDBY`.
    UnknownActivityType { activity_type: String },
    /// A field required by the variant is absent (or blank).
    MissingField {
        kind: ActivityKind,
        field: &'static str,
    },
    /// A field belonging to the other variant is populated.
    UnexpectedField {
        kind: ActivityKind,
        field: &'static str,
    },
    /// Depth is negative or not a finite number.
    InvalidDepth { field: &'static str, value: f64 },
    UnknownStandbyReason { reason: String },
    EndBeforeStart {
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    /// Drilling must advance: `end_depth > start_depth`.
    NonPositiveInterval { start_depth: f64, end_depth: f64 },
    MissingDrillBit,
    /// Loaded ledger is not numbered `1..=N`.
    SequenceGap {
        position: usize,
        expected: u32,
        actual: u32,
    },
    /// Loaded ledger contains a block owned by another shift.
    ForeignBlock {
        sequence_order: u32,
        owner: ShiftId,
    },
}

impl fmt::Display for BlockViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownActivityType { activity_type } => {
                write!(f, "unknown activity type '{activity_type}'")
            }
            Self::MissingField { kind, field } => {
                write!(f, "{kind} block requires '{field}'")
            }
            Self::UnexpectedField { kind, field } => {
                write!(f, "{kind} block must not carry '{field}'")
            }
            Self::InvalidDepth { field, value } => {
                write!(f, "'{field}' must be a non-negative depth, got {value}")
            }
            Self::UnknownStandbyReason { reason } => {
                write!(f, "unknown standby reason '{reason}'")
            }
            Self::EndBeforeStart {
                start_time,
                end_time,
            } => write!(f, "end time {end_time} is before start time {start_time}"),
            Self::NonPositiveInterval {
                start_depth,
                end_depth,
            } => write!(
                f,
                "end depth {end_depth}m must be greater than start depth {start_depth}m"
            ),
            Self::MissingDrillBit => write!(f, "drilling block requires a drill bit"),
            Self::SequenceGap {
                position,
                expected,
                actual,
            } => write!(
                f,
                "block at position {position} has sequence order {actual}, expected {expected}"
            ),
            Self::ForeignBlock {
                sequence_order,
                owner,
            } => write!(
                f,
                "block with sequence order {sequence_order} belongs to shift {owner}"
            ),
        }
    }
}

/// An operation was attempted in a lifecycle state that does not allow it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{operation} is not allowed while the shift is {state}")]
pub struct StateError {
    pub operation: Operation,
    pub state: LifecycleState,
}

/// A transition guard that was not satisfied. The shift stays where it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardFailure {
    ChecklistIncomplete { missing: Vec<SafetyCheckItem> },
    /// Submission requires the "record is accurate" confirmation.
    NotConfirmed,
}

impl fmt::Display for GuardFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChecklistIncomplete { missing } => {
                let labels: Vec<&str> = missing.iter().map(SafetyCheckItem::label).collect();
                write!(f, "safety checks outstanding: {}", labels.join(", "))
            }
            Self::NotConfirmed => write!(f, "record accuracy has not been confirmed"),
        }
    }
}

/// Coarse category of a [`LedgerError`], for callers and log fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    State,
    Refused,
    Store,
    ContextLost,
    Corrupted,
}

/// Errors produced by ledger and lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("block rejected: {0}")]
    Validation(BlockViolation),
    #[error(transparent)]
    State(#[from] StateError),
    #[error("transition refused: {0}")]
    Refused(GuardFailure),
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
    #[error("shift {shift_id} not found; restart from shift setup")]
    ContextLost { shift_id: ShiftId },
    #[error("ledger for shift {shift_id} is corrupt ({} violations)", .violations.len())]
    Corrupted {
        shift_id: ShiftId,
        violations: Vec<BlockViolation>,
    },
}

impl LedgerError {
    /// Map a store failure for an operation on `shift_id`. A missing shift
    /// record means the lifecycle context is gone.
    pub(crate) fn from_store(shift_id: ShiftId, err: StoreError) -> Self {
        match err {
            StoreError::NotFound {
                kind: RecordKind::Shift,
                ..
            } => Self::ContextLost { shift_id },
            other => Self::Store(other),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::State(_) => ErrorKind::State,
            Self::Refused(_) => ErrorKind::Refused,
            Self::Store(_) => ErrorKind::Store,
            Self::ContextLost { .. } => ErrorKind::ContextLost,
            Self::Corrupted { .. } => ErrorKind::Corrupted,
        }
    }

    /// Whether fixing the input and repeating the same step can succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation | ErrorKind::Refused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_shift_maps_to_context_lost() {
        let shift_id = ShiftId::new();
        let err = LedgerError::from_store(shift_id, StoreError::shift_not_found(shift_id));
        assert_eq!(err.kind(), ErrorKind::ContextLost);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn transient_store_failure_stays_a_store_error() {
        let err = LedgerError::from_store(ShiftId::new(), StoreError::Unavailable("down".into()));
        assert_eq!(err.kind(), ErrorKind::Store);
    }

    #[test]
    fn checklist_failure_lists_labels() {
        let failure = GuardFailure::ChecklistIncomplete {
            missing: vec![SafetyCheckItem::Ppe, SafetyCheckItem::Emergency],
        };
        assert_eq!(
            failure.to_string(),
            "safety checks outstanding: PPE Equipment Worn, Emergency Procedures Known"
        );
        assert!(LedgerError::Refused(failure).is_recoverable());
    }

    #[test]
    fn state_error_names_operation_and_state() {
        let err = StateError {
            operation: Operation::AppendBlock,
            state: LifecycleState::Created,
        };
        assert_eq!(
            err.to_string(),
            "append block is not allowed while the shift is Created"
        );
    }
}
