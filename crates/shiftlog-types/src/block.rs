use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::{Activity, ActivityKind};
use crate::id::{BlockId, ShiftId};

/// A block that passed validation but has not been numbered or persisted yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBlock {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(flatten)]
    pub activity: Activity,
}

/// One accepted entry of a shift's append-only ledger.
///
/// `sequence_order` is 1-indexed and contiguous within the shift; it is the
/// chronological key. The timestamps are what the crew reported and are not
/// used for ordering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityBlock {
    pub id: BlockId,
    pub shift_id: ShiftId,
    pub sequence_order: u32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(flatten)]
    pub activity: Activity,
}

impl ActivityBlock {
    /// Stamp a validated block with its identity and position.
    pub fn from_new(id: BlockId, shift_id: ShiftId, sequence_order: u32, block: NewBlock) -> Self {
        Self {
            id,
            shift_id,
            sequence_order,
            start_time: block.start_time,
            end_time: block.end_time,
            activity: block.activity,
        }
    }

    pub fn kind(&self) -> ActivityKind {
        self.activity.kind()
    }

    /// Reported wall-clock span. Negative only for records that bypassed validation.
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}
