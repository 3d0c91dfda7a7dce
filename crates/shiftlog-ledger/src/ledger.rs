use std::sync::Arc;

use shiftlog_store::ShiftStore;
use shiftlog_types::{ActivityBlock, ShiftId};
use tracing::{debug, info, warn};

use crate::aggregation::{ShiftSummary, summarize};
use crate::candidate::BlockCandidate;
use crate::config::LedgerConfig;
use crate::error::{BlockViolation, LedgerError};
use crate::invariants;
use crate::lifecycle::{Operation, derive_state, next_state};

/// Append-only, per-shift sequence of accepted activity blocks.
///
/// Holds no block state of its own: every call reads the current ledger from
/// the store, so numbering and totals always reflect what is persisted.
/// Callers must await one `append` before issuing the next for the same
/// shift; the store refuses a stale sequence order rather than reusing it.
pub struct Ledger<S> {
    store: Arc<S>,
    config: LedgerConfig,
}

impl<S: ShiftStore> Ledger<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, LedgerConfig::default())
    }

    pub fn with_config(store: Arc<S>, config: LedgerConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Blocks for `shift_id` in sequence order, whatever order the store
    /// returned them in.
    pub async fn list(&self, shift_id: ShiftId) -> Result<Vec<ActivityBlock>, LedgerError> {
        let mut blocks = self
            .store
            .list_blocks(shift_id)
            .await
            .map_err(|err| LedgerError::from_store(shift_id, err))?;
        blocks.sort_by_key(|block| block.sequence_order);
        debug!(%shift_id, blocks = blocks.len(), "ledger loaded");
        Ok(blocks)
    }

    /// Validate `candidate` against the current ledger, number it and persist it.
    ///
    /// The shift must exist and have passed its safety check without being
    /// submitted. A rejected candidate is returned as
    /// [`LedgerError::Validation`] and nothing is written.
    pub async fn append(
        &self,
        shift_id: ShiftId,
        candidate: &BlockCandidate,
    ) -> Result<ActivityBlock, LedgerError> {
        let shift = self
            .store
            .get_shift(shift_id)
            .await
            .map_err(|err| LedgerError::from_store(shift_id, err))?
            .ok_or(LedgerError::ContextLost { shift_id })?;
        next_state(derive_state(&shift), Operation::AppendBlock)?;

        let prior = self.list(shift_id).await?;
        let violations = invariants::sequence_violations(shift_id, &prior);
        if !violations.is_empty() {
            warn!(%shift_id, violations = violations.len(), "refusing to append to corrupt ledger");
            return Err(LedgerError::Corrupted {
                shift_id,
                violations,
            });
        }

        let accepted = invariants::validate(candidate, &prior).map_err(|violation| {
            debug!(%shift_id, %violation, "block rejected");
            LedgerError::Validation(violation)
        })?;
        if let Some(gap) = accepted.depth_gap
            && self.config.warns_on_depth_gap()
        {
            warn!(%shift_id, gap_m = gap, "drilling block does not continue from previous end depth");
        }

        let sequence_order = prior.len() as u32 + 1;
        let stored = self
            .store
            .insert_block(shift_id, sequence_order, accepted.block)
            .await
            .map_err(|err| {
                warn!(%shift_id, sequence_order, error = %err, "block insert failed");
                LedgerError::from_store(shift_id, err)
            })?;
        info!(
            %shift_id,
            sequence_order,
            kind = %stored.kind(),
            "block appended"
        );
        Ok(stored)
    }

    /// Totals recomputed from the ledger as it is now.
    pub async fn summary(&self, shift_id: ShiftId) -> Result<ShiftSummary, LedgerError> {
        let blocks = self.list(shift_id).await?;
        let summary = summarize(&blocks);
        debug!(%shift_id, ?summary, "ledger summarized");
        Ok(summary)
    }

    /// Every invariant violation in the persisted ledger. Empty for a healthy ledger.
    pub async fn audit(&self, shift_id: ShiftId) -> Result<Vec<BlockViolation>, LedgerError> {
        let blocks = self.list(shift_id).await?;
        Ok(invariants::audit(shift_id, &blocks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use shiftlog_store::{MemoryStore, StoreError};
    use shiftlog_types::{CrewMemberId, DrillBitId, LifecycleState, RigId, StandbyReason};
    use similar_asserts::assert_eq;

    use crate::error::StateError;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, h, m, 0).unwrap()
    }

    async fn verified_shift(store: &MemoryStore) -> ShiftId {
        let shift = store
            .create_shift(
                NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
                RigId::new(),
                CrewMemberId::new(),
            )
            .await
            .unwrap();
        store.set_safety_verified(shift.id).await.unwrap();
        shift.id
    }

    #[test_log::test(tokio::test)]
    async fn appends_are_numbered_contiguously() {
        let store = Arc::new(MemoryStore::seeded());
        let shift_id = verified_shift(&store).await;
        let ledger = Ledger::new(store.clone());
        let bit = Some(DrillBitId::new());

        ledger
            .append(shift_id, &BlockCandidate::drilling(at(7, 0), at(8, 0), 0.0, 50.0, bit))
            .await
            .unwrap();
        ledger
            .append(
                shift_id,
                &BlockCandidate::standby_for(at(8, 0), at(8, 20), StandbyReason::WeatherDelay),
            )
            .await
            .unwrap();
        ledger
            .append(shift_id, &BlockCandidate::drilling(at(8, 20), at(9, 0), 50.0, 61.5, bit))
            .await
            .unwrap();

        let orders: Vec<u32> = ledger
            .list(shift_id)
            .await
            .unwrap()
            .iter()
            .map(|b| b.sequence_order)
            .collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert!(ledger.audit(shift_id).await.unwrap().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn rejected_block_does_not_change_ledger() {
        let store = Arc::new(MemoryStore::seeded());
        let shift_id = verified_shift(&store).await;
        let ledger = Ledger::new(store);

        let err = ledger
            .append(
                shift_id,
                &BlockCandidate::drilling(at(7, 0), at(8, 0), 30.0, 30.0, Some(DrillBitId::new())),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(BlockViolation::NonPositiveInterval { .. })
        ));
        assert!(err.is_recoverable());
        assert!(ledger.list(shift_id).await.unwrap().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn unverified_shift_refuses_blocks() {
        let store = Arc::new(MemoryStore::seeded());
        let shift = store
            .create_shift(
                NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
                RigId::new(),
                CrewMemberId::new(),
            )
            .await
            .unwrap();
        let ledger = Ledger::new(store);

        let err = ledger
            .append(
                shift.id,
                &BlockCandidate::standby_for(at(7, 0), at(7, 5), StandbyReason::BreakTime),
            )
            .await
            .unwrap_err();
        match err {
            LedgerError::State(StateError { operation, state }) => {
                assert_eq!(operation, Operation::AppendBlock);
                assert_eq!(state, LifecycleState::Created);
            }
            other => panic!("expected state error, got {other:?}"),
        }
    }

    #[test_log::test(tokio::test)]
    async fn missing_shift_is_context_lost() {
        let ledger = Ledger::new(Arc::new(MemoryStore::seeded()));
        let shift_id = ShiftId::new();
        let err = ledger
            .append(
                shift_id,
                &BlockCandidate::standby_for(at(7, 0), at(7, 5), StandbyReason::BreakTime),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::ContextLost { shift_id: id } if id == shift_id));
    }

    #[test_log::test(tokio::test)]
    async fn store_outage_surfaces_store_error_and_writes_nothing() {
        let store = Arc::new(MemoryStore::seeded());
        let shift_id = verified_shift(&store).await;
        let ledger = Ledger::new(store.clone());

        store.set_offline(true);
        let err = ledger
            .append(
                shift_id,
                &BlockCandidate::standby_for(at(7, 0), at(7, 5), StandbyReason::BreakTime),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::Store(StoreError::Unavailable(_))));

        store.set_offline(false);
        assert!(ledger.list(shift_id).await.unwrap().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn summary_tracks_every_append() {
        let store = Arc::new(MemoryStore::seeded());
        let shift_id = verified_shift(&store).await;
        let ledger = Ledger::new(store);
        assert_eq!(ledger.summary(shift_id).await.unwrap(), ShiftSummary::default());

        ledger
            .append(
                shift_id,
                &BlockCandidate::drilling(at(8, 0), at(9, 30), 10.0, 25.5, Some(DrillBitId::new())),
            )
            .await
            .unwrap();
        let summary = ledger.summary(shift_id).await.unwrap();
        assert_eq!(summary.total_meters_drilled, 15.5);
        assert_eq!(summary.drilling_minutes, 90);
        assert_eq!(summary.block_count, 1);
    }
}
