use shiftlog_types::ShiftId;
use std::fmt;
use thiserror::Error;

/// Record families held by the external store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Shift,
    ActivityBlock,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shift => write!(f, "shift"),
            Self::ActivityBlock => write!(f, "activity block"),
        }
    }
}

/// Failures reported by a [`ShiftStore`](crate::ShiftStore).
///
/// The core does not retry any of these; callers may repeat the same request
/// as long as they never observed it succeed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store call '{operation}' timed out after {after_ms}ms")]
    Timeout {
        operation: &'static str,
        after_ms: u64,
    },
    #[error("{kind} {id} not found")]
    NotFound { kind: RecordKind, id: String },
    #[error("sequence order {sequence_order} rejected for shift {shift_id}: expected {expected}")]
    Conflict {
        shift_id: ShiftId,
        sequence_order: u32,
        expected: u32,
    },
}

impl StoreError {
    pub fn shift_not_found(id: ShiftId) -> Self {
        Self::NotFound {
            kind: RecordKind::Shift,
            id: id.to_string(),
        }
    }

    /// Transient failures (availability, deadlines) as opposed to answers about data.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout { .. })
    }
}
