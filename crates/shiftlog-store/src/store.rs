use async_trait::async_trait;
use chrono::NaiveDate;
use shiftlog_types::{
    ActivityBlock, CrewMember, CrewMemberId, DrillBit, NewBlock, Rig, RigId, Shift, ShiftId,
};

use crate::error::StoreError;

/// CRUD surface of the external data store.
///
/// Catalog reads are ordered by display name (rigs, crew) or serial number
/// (drill bits). Shift and block writes are single-record and atomic: a call
/// either fully succeeds or leaves nothing behind.
#[async_trait]
pub trait ShiftStore: Send + Sync {
    async fn list_rigs(&self) -> Result<Vec<Rig>, StoreError>;
    async fn list_crew_members(&self) -> Result<Vec<CrewMember>, StoreError>;
    /// Only bits whose status is `Available`.
    async fn list_available_drill_bits(&self) -> Result<Vec<DrillBit>, StoreError>;

    /// Creates an in-progress shift with the safety check outstanding.
    async fn create_shift(
        &self,
        date: NaiveDate,
        rig_id: RigId,
        lead_driller_id: CrewMemberId,
    ) -> Result<Shift, StoreError>;
    async fn set_safety_verified(&self, shift_id: ShiftId) -> Result<(), StoreError>;
    async fn set_submitted(&self, shift_id: ShiftId) -> Result<(), StoreError>;
    async fn get_shift(&self, shift_id: ShiftId) -> Result<Option<Shift>, StoreError>;

    /// Persists a block at `sequence_order`. Implementations must refuse an
    /// order that is not exactly one past the stored count.
    async fn insert_block(
        &self,
        shift_id: ShiftId,
        sequence_order: u32,
        block: NewBlock,
    ) -> Result<ActivityBlock, StoreError>;
    /// Blocks for a shift. Order is not guaranteed; callers sort by `sequence_order`.
    async fn list_blocks(&self, shift_id: ShiftId) -> Result<Vec<ActivityBlock>, StoreError>;
}
