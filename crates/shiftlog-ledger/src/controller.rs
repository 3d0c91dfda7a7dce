use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use shiftlog_store::ShiftStore;
use shiftlog_types::{
    ActivityBlock, CrewMember, CrewMemberId, DrillBit, LifecycleState, Rig, RigId, Shift,
    ShiftId, ShiftStatus,
};
use tracing::{info, warn};

use crate::aggregation::ShiftSummary;
use crate::candidate::BlockCandidate;
use crate::config::LedgerConfig;
use crate::draft::ActivityDraft;
use crate::error::{GuardFailure, LedgerError};
use crate::ledger::Ledger;
use crate::lifecycle::{Operation, derive_state, next_state};
use crate::session::ShiftSession;

/// Reference data offered during shift setup and logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    pub rigs: Vec<Rig>,
    pub crew_members: Vec<CrewMember>,
    pub drill_bits: Vec<DrillBit>,
}

/// Drives a shift through its lifecycle and gates ledger access on it.
///
/// The controller keeps no per-shift state; everything it needs is in the
/// caller's [`ShiftSession`] or the store. Each transition checks the state,
/// then the guard, then writes to the store, and only then advances the
/// session. A failed step leaves the session exactly as it was.
pub struct Controller<S> {
    store: Arc<S>,
    ledger: Ledger<S>,
}

impl<S: ShiftStore> Controller<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, LedgerConfig::default())
    }

    pub fn with_config(store: Arc<S>, config: LedgerConfig) -> Self {
        Self {
            ledger: Ledger::with_config(store.clone(), config),
            store,
        }
    }

    pub fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }

    pub async fn catalog(&self) -> Result<Catalog, LedgerError> {
        Ok(Catalog {
            rigs: self.store.list_rigs().await?,
            crew_members: self.store.list_crew_members().await?,
            drill_bits: self.store.list_available_drill_bits().await?,
        })
    }

    /// Commit shift setup. The new shift starts in `Created`.
    pub async fn start_shift(
        &self,
        date: NaiveDate,
        rig_id: RigId,
        lead_driller_id: CrewMemberId,
    ) -> Result<ShiftSession, LedgerError> {
        let shift = self.store.create_shift(date, rig_id, lead_driller_id).await?;
        info!(shift_id = %shift.id, %date, %rig_id, %lead_driller_id, "shift created");
        Ok(ShiftSession::new(shift, LifecycleState::Created))
    }

    /// Rebuild a session for an existing shift. A shift the store does not
    /// know is [`LedgerError::ContextLost`]; a new one is never created here.
    pub async fn resume(&self, shift_id: ShiftId) -> Result<ShiftSession, LedgerError> {
        let shift = self.stored_shift(shift_id).await?;
        let state = derive_state(&shift);
        info!(%shift_id, %state, "shift resumed");
        Ok(ShiftSession::new(shift, state))
    }

    /// `Created -> SafetyVerified`, once every checklist item is checked.
    pub async fn verify_safety(&self, session: &mut ShiftSession) -> Result<(), LedgerError> {
        let next = next_state(session.state(), Operation::VerifySafety)?;
        let shift_id = session.shift_id();
        self.check_stored_state(shift_id, Operation::VerifySafety)
            .await?;
        if !session.checklist.is_complete() {
            return Err(LedgerError::Refused(GuardFailure::ChecklistIncomplete {
                missing: session.checklist.missing(),
            }));
        }
        self.store
            .set_safety_verified(shift_id)
            .await
            .map_err(|err| LedgerError::from_store(shift_id, err))?;
        session.shift_mut().safety_check_completed = true;
        session.set_state(next);
        info!(%shift_id, "safety check completed");
        Ok(())
    }

    /// `SafetyVerified -> Logging`. No guard and no store write.
    pub fn begin_logging(&self, session: &mut ShiftSession) -> Result<(), LedgerError> {
        let next = next_state(session.state(), Operation::BeginLogging)?;
        session.set_state(next);
        info!(shift_id = %session.shift_id(), "logging started");
        Ok(())
    }

    /// Append a block. Only legal while the session is `Logging`.
    pub async fn append(
        &self,
        session: &ShiftSession,
        candidate: &BlockCandidate,
    ) -> Result<ActivityBlock, LedgerError> {
        next_state(session.state(), Operation::AppendBlock)?;
        self.ledger.append(session.shift_id(), candidate).await
    }

    /// A fresh draft seeded from the current ledger.
    pub async fn draft(&self, session: &ShiftSession) -> Result<ActivityDraft, LedgerError> {
        let blocks = self.ledger.list(session.shift_id()).await?;
        Ok(ActivityDraft::seeded(
            &blocks,
            Utc::now(),
            self.ledger.config(),
        ))
    }

    pub async fn running_summary(&self, session: &ShiftSession) -> Result<ShiftSummary, LedgerError> {
        self.ledger.summary(session.shift_id()).await
    }

    /// `Logging -> Submitted`, once the crew confirmed the record is accurate.
    ///
    /// Returns the end-of-shift summary as it stood when the status was
    /// written. Irreversible.
    pub async fn submit(
        &self,
        session: &mut ShiftSession,
        confirmed: bool,
    ) -> Result<ShiftSummary, LedgerError> {
        let next = next_state(session.state(), Operation::Submit)?;
        let shift_id = session.shift_id();
        self.check_stored_state(shift_id, Operation::Submit).await?;
        if !confirmed {
            return Err(LedgerError::Refused(GuardFailure::NotConfirmed));
        }
        let summary = self.ledger.summary(shift_id).await?;
        self.store.set_submitted(shift_id).await.map_err(|err| {
            warn!(%shift_id, error = %err, "submission failed");
            LedgerError::from_store(shift_id, err)
        })?;
        session.shift_mut().status = ShiftStatus::Submitted;
        session.set_state(next);
        info!(
            %shift_id,
            blocks = summary.block_count,
            meters = summary.total_meters_drilled,
            "shift submitted"
        );
        Ok(summary)
    }

    async fn stored_shift(&self, shift_id: ShiftId) -> Result<Shift, LedgerError> {
        self.store
            .get_shift(shift_id)
            .await
            .map_err(|err| LedgerError::from_store(shift_id, err))?
            .ok_or(LedgerError::ContextLost { shift_id })
    }

    /// Sessions are caller-owned and may be stale or restored from elsewhere,
    /// so transitions that write to the shift record are also checked
    /// against the state derived from that record.
    async fn check_stored_state(
        &self,
        shift_id: ShiftId,
        operation: Operation,
    ) -> Result<(), LedgerError> {
        let shift = self.stored_shift(shift_id).await?;
        next_state(derive_state(&shift), operation)?;
        Ok(())
    }
}
