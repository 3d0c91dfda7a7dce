//! Shift lifecycle state machine.
//!
//! ```text
//! Created --VerifySafety--> SafetyVerified --BeginLogging--> Logging --Submit--> Submitted
//!                                                            (AppendBlock)
//! ```
//!
//! Guards (checklist completeness, submission confirmation) are evaluated by
//! the controller; this module only decides which operations a state permits.

use shiftlog_types::{LifecycleState, Shift};
use std::fmt;

use crate::error::StateError;

/// Operations gated by lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    VerifySafety,
    BeginLogging,
    AppendBlock,
    Submit,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VerifySafety => write!(f, "verify safety"),
            Self::BeginLogging => write!(f, "begin logging"),
            Self::AppendBlock => write!(f, "append block"),
            Self::Submit => write!(f, "submit"),
        }
    }
}

/// The state reached by performing `operation` in `current`, or a
/// [`StateError`] when the operation is not legal there.
///
/// `AppendBlock` is a self-loop on `Logging`. `Submitted` has no outgoing
/// transitions.
pub fn next_state(
    current: LifecycleState,
    operation: Operation,
) -> Result<LifecycleState, StateError> {
    match (current, operation) {
        (LifecycleState::Created, Operation::VerifySafety) => Ok(LifecycleState::SafetyVerified),
        (LifecycleState::SafetyVerified, Operation::BeginLogging) => Ok(LifecycleState::Logging),
        (LifecycleState::Logging, Operation::AppendBlock) => Ok(LifecycleState::Logging),
        (LifecycleState::Logging, Operation::Submit) => Ok(LifecycleState::Submitted),
        (state, operation) => Err(StateError { operation, state }),
    }
}

/// Recover the lifecycle state of a persisted shift.
///
/// The record only stores the safety flag and the submitted status, so a
/// verified in-progress shift resumes directly in `Logging`; the
/// `SafetyVerified -> Logging` step carries no guard.
pub fn derive_state(shift: &Shift) -> LifecycleState {
    if shift.is_submitted() {
        LifecycleState::Submitted
    } else if shift.safety_check_completed {
        LifecycleState::Logging
    } else {
        LifecycleState::Created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shiftlog_types::{CrewMemberId, RigId, ShiftId, ShiftStatus};

    const STATES: [LifecycleState; 4] = [
        LifecycleState::Created,
        LifecycleState::SafetyVerified,
        LifecycleState::Logging,
        LifecycleState::Submitted,
    ];

    const OPERATIONS: [Operation; 4] = [
        Operation::VerifySafety,
        Operation::BeginLogging,
        Operation::AppendBlock,
        Operation::Submit,
    ];

    fn shift(safety: bool, status: ShiftStatus) -> Shift {
        Shift {
            id: ShiftId::new(),
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            rig_id: RigId::new(),
            lead_driller_id: CrewMemberId::new(),
            safety_check_completed: safety,
            status,
        }
    }

    #[test]
    fn happy_path_walks_every_state() {
        let mut state = LifecycleState::Created;
        for op in [
            Operation::VerifySafety,
            Operation::BeginLogging,
            Operation::AppendBlock,
            Operation::AppendBlock,
            Operation::Submit,
        ] {
            state = next_state(state, op).unwrap();
        }
        assert_eq!(state, LifecycleState::Submitted);
    }

    #[test]
    fn submitted_has_no_outgoing_transitions() {
        for op in OPERATIONS {
            let err = next_state(LifecycleState::Submitted, op).unwrap_err();
            assert_eq!(err.state, LifecycleState::Submitted);
            assert_eq!(err.operation, op);
        }
    }

    #[test]
    fn append_is_only_legal_while_logging() {
        for state in STATES {
            let allowed = next_state(state, Operation::AppendBlock).is_ok();
            assert_eq!(allowed, state == LifecycleState::Logging, "state {state}");
        }
    }

    #[test]
    fn submit_before_logging_is_a_state_error() {
        let err = next_state(LifecycleState::SafetyVerified, Operation::Submit).unwrap_err();
        assert_eq!(
            err,
            StateError {
                operation: Operation::Submit,
                state: LifecycleState::SafetyVerified,
            }
        );
    }

    #[test]
    fn derive_state_from_record_flags() {
        assert_eq!(
            derive_state(&shift(false, ShiftStatus::InProgress)),
            LifecycleState::Created
        );
        assert_eq!(
            derive_state(&shift(true, ShiftStatus::InProgress)),
            LifecycleState::Logging
        );
        assert_eq!(
            derive_state(&shift(true, ShiftStatus::Submitted)),
            LifecycleState::Submitted
        );
    }
}
