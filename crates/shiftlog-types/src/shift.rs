use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::{CrewMemberId, RigId, ShiftId};

/// Persisted shift status. Only two values are ever stored; the finer-grained
/// lifecycle is [`LifecycleState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Submitted,
}

impl fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "In Progress"),
            Self::Submitted => write!(f, "Submitted"),
        }
    }
}

/// One rig/crew work period. Never deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub id: ShiftId,
    pub date: NaiveDate,
    pub rig_id: RigId,
    pub lead_driller_id: CrewMemberId,
    pub safety_check_completed: bool,
    pub status: ShiftStatus,
}

impl Shift {
    pub fn is_submitted(&self) -> bool {
        self.status == ShiftStatus::Submitted
    }
}

/// Where a shift is in its setup → safety → logging → submission flow.
///
/// Not stored independently: derived from the shift record and its ledger when
/// a session is resumed, then advanced by the lifecycle controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Rig and crew chosen, safety checklist outstanding.
    Created,
    SafetyVerified,
    /// Activity blocks may be appended.
    Logging,
    /// Terminal.
    Submitted,
}

impl LifecycleState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted)
    }

    /// Whether the ledger may accept blocks in this state.
    pub fn accepts_blocks(&self) -> bool {
        matches!(self, Self::Logging)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "Created"),
            Self::SafetyVerified => write!(f, "SafetyVerified"),
            Self::Logging => write!(f, "Logging"),
            Self::Submitted => write!(f, "Submitted"),
        }
    }
}
