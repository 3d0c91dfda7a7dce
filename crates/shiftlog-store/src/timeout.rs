use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use shiftlog_types::{
    ActivityBlock, CrewMember, CrewMemberId, DrillBit, NewBlock, Rig, RigId, Shift, ShiftId,
};
use tracing::warn;

use crate::error::StoreError;
use crate::store::ShiftStore;

/// Applies a deadline to every call of the wrapped store.
///
/// An elapsed deadline becomes [`StoreError::Timeout`]; nothing is retried.
/// The inner future is dropped on timeout, so a store whose writes are atomic
/// leaves either the full write or nothing.
#[derive(Debug)]
pub struct TimeoutStore<S> {
    inner: S,
    limit: Duration,
}

impl<S: ShiftStore> TimeoutStore<S> {
    pub fn new(inner: S, limit: Duration) -> Self {
        Self { inner, limit }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>> + Send,
    {
        match tokio::time::timeout(self.limit, call).await {
            Ok(result) => result,
            Err(_) => {
                let after_ms = self.limit.as_millis() as u64;
                warn!(operation, after_ms, "store call timed out");
                Err(StoreError::Timeout {
                    operation,
                    after_ms,
                })
            }
        }
    }
}

#[async_trait]
impl<S: ShiftStore> ShiftStore for TimeoutStore<S> {
    async fn list_rigs(&self) -> Result<Vec<Rig>, StoreError> {
        self.bounded("list_rigs", self.inner.list_rigs()).await
    }

    async fn list_crew_members(&self) -> Result<Vec<CrewMember>, StoreError> {
        self.bounded("list_crew_members", self.inner.list_crew_members())
            .await
    }

    async fn list_available_drill_bits(&self) -> Result<Vec<DrillBit>, StoreError> {
        self.bounded(
            "list_available_drill_bits",
            self.inner.list_available_drill_bits(),
        )
        .await
    }

    async fn create_shift(
        &self,
        date: NaiveDate,
        rig_id: RigId,
        lead_driller_id: CrewMemberId,
    ) -> Result<Shift, StoreError> {
        self.bounded(
            "create_shift",
            self.inner.create_shift(date, rig_id, lead_driller_id),
        )
        .await
    }

    async fn set_safety_verified(&self, shift_id: ShiftId) -> Result<(), StoreError> {
        self.bounded("set_safety_verified", self.inner.set_safety_verified(shift_id))
            .await
    }

    async fn set_submitted(&self, shift_id: ShiftId) -> Result<(), StoreError> {
        self.bounded("set_submitted", self.inner.set_submitted(shift_id))
            .await
    }

    async fn get_shift(&self, shift_id: ShiftId) -> Result<Option<Shift>, StoreError> {
        self.bounded("get_shift", self.inner.get_shift(shift_id)).await
    }

    async fn insert_block(
        &self,
        shift_id: ShiftId,
        sequence_order: u32,
        block: NewBlock,
    ) -> Result<ActivityBlock, StoreError> {
        self.bounded(
            "insert_block",
            self.inner.insert_block(shift_id, sequence_order, block),
        )
        .await
    }

    async fn list_blocks(&self, shift_id: ShiftId) -> Result<Vec<ActivityBlock>, StoreError> {
        self.bounded("list_blocks", self.inner.list_blocks(shift_id))
            .await
    }
}
