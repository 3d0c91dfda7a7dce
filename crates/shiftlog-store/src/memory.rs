//! In-process [`ShiftStore`] backed by hash maps.
//!
//! Serves as the reference implementation for tests and local tooling.
//! Availability and latency can be toggled to exercise the failure paths
//! callers must handle against a real remote store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use shiftlog_types::{
    ActivityBlock, BlockId, CrewMember, CrewMemberId, DrillBit, DrillBitId, DrillBitStatus,
    NewBlock, Rig, RigId, Shift, ShiftId, ShiftStatus,
};
use tokio::sync::RwLock;
use tracing::{debug, trace};

use crate::error::StoreError;
use crate::store::ShiftStore;

#[derive(Debug, Default)]
struct Tables {
    rigs: Vec<Rig>,
    crew: Vec<CrewMember>,
    drill_bits: Vec<DrillBit>,
    shifts: HashMap<ShiftId, Shift>,
    /// Insertion order per shift.
    blocks: HashMap<ShiftId, Vec<ActivityBlock>>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    offline: AtomicBool,
    latency: Option<Duration>,
}

impl MemoryStore {
    /// Empty store with no catalog entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the demonstration catalog.
    pub fn seeded() -> Self {
        Self::with_catalog(seed_rigs(), seed_crew(), seed_drill_bits())
    }

    pub fn with_catalog(rigs: Vec<Rig>, crew: Vec<CrewMember>, drill_bits: Vec<DrillBit>) -> Self {
        Self {
            tables: RwLock::new(Tables {
                rigs,
                crew,
                drill_bits,
                ..Tables::default()
            }),
            ..Self::default()
        }
    }

    /// Delay applied before every call completes.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// While offline every call fails with [`StoreError::Unavailable`] and nothing is written.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    async fn gate(&self, operation: &'static str) -> Result<(), StoreError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.offline.load(Ordering::SeqCst) {
            debug!(operation, "memory store offline");
            return Err(StoreError::Unavailable(format!("{operation}: store offline")));
        }
        trace!(operation, "memory store call");
        Ok(())
    }
}

#[async_trait]
impl ShiftStore for MemoryStore {
    async fn list_rigs(&self) -> Result<Vec<Rig>, StoreError> {
        self.gate("list_rigs").await?;
        let mut rigs = self.tables.read().await.rigs.clone();
        rigs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rigs)
    }

    async fn list_crew_members(&self) -> Result<Vec<CrewMember>, StoreError> {
        self.gate("list_crew_members").await?;
        let mut crew = self.tables.read().await.crew.clone();
        crew.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(crew)
    }

    async fn list_available_drill_bits(&self) -> Result<Vec<DrillBit>, StoreError> {
        self.gate("list_available_drill_bits").await?;
        let mut bits: Vec<DrillBit> = self
            .tables
            .read()
            .await
            .drill_bits
            .iter()
            .filter(|bit| bit.is_available())
            .cloned()
            .collect();
        bits.sort_by(|a, b| a.serial_number.cmp(&b.serial_number));
        Ok(bits)
    }

    async fn create_shift(
        &self,
        date: NaiveDate,
        rig_id: RigId,
        lead_driller_id: CrewMemberId,
    ) -> Result<Shift, StoreError> {
        self.gate("create_shift").await?;
        let shift = Shift {
            id: ShiftId::new(),
            date,
            rig_id,
            lead_driller_id,
            safety_check_completed: false,
            status: ShiftStatus::InProgress,
        };
        self.tables
            .write()
            .await
            .shifts
            .insert(shift.id, shift.clone());
        Ok(shift)
    }

    async fn set_safety_verified(&self, shift_id: ShiftId) -> Result<(), StoreError> {
        self.gate("set_safety_verified").await?;
        let mut tables = self.tables.write().await;
        let shift = tables
            .shifts
            .get_mut(&shift_id)
            .ok_or_else(|| StoreError::shift_not_found(shift_id))?;
        shift.safety_check_completed = true;
        Ok(())
    }

    async fn set_submitted(&self, shift_id: ShiftId) -> Result<(), StoreError> {
        self.gate("set_submitted").await?;
        let mut tables = self.tables.write().await;
        let shift = tables
            .shifts
            .get_mut(&shift_id)
            .ok_or_else(|| StoreError::shift_not_found(shift_id))?;
        shift.status = ShiftStatus::Submitted;
        Ok(())
    }

    async fn get_shift(&self, shift_id: ShiftId) -> Result<Option<Shift>, StoreError> {
        self.gate("get_shift").await?;
        Ok(self.tables.read().await.shifts.get(&shift_id).cloned())
    }

    async fn insert_block(
        &self,
        shift_id: ShiftId,
        sequence_order: u32,
        block: NewBlock,
    ) -> Result<ActivityBlock, StoreError> {
        self.gate("insert_block").await?;
        let mut tables = self.tables.write().await;
        if !tables.shifts.contains_key(&shift_id) {
            return Err(StoreError::shift_not_found(shift_id));
        }
        let rows = tables.blocks.entry(shift_id).or_default();
        // Numbering check and write happen under one lock.
        let expected = rows.len() as u32 + 1;
        if sequence_order != expected {
            return Err(StoreError::Conflict {
                shift_id,
                sequence_order,
                expected,
            });
        }
        let stored = ActivityBlock::from_new(BlockId::new(), shift_id, sequence_order, block);
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_blocks(&self, shift_id: ShiftId) -> Result<Vec<ActivityBlock>, StoreError> {
        self.gate("list_blocks").await?;
        Ok(self
            .tables
            .read()
            .await
            .blocks
            .get(&shift_id)
            .cloned()
            .unwrap_or_default())
    }
}

fn seed_rigs() -> Vec<Rig> {
    ["Rig 001 (Comacchio)", "Rig 002 (Atlas Copco)", "Rig 003 (Bauer BG)"]
        .into_iter()
        .map(|name| Rig {
            id: RigId::new(),
            name: name.to_string(),
        })
        .collect()
}

fn seed_crew() -> Vec<CrewMember> {
    [
        ("John Smith", "Lead Driller"),
        ("Sarah Johnson", "Second Man"),
        ("Mike Chen", "Supervisor"),
        ("Tom Wilson", "Lead Driller"),
        ("Emma Davis", "Second Man"),
    ]
    .into_iter()
    .map(|(name, role)| CrewMember {
        id: CrewMemberId::new(),
        name: name.to_string(),
        role: role.to_string(),
    })
    .collect()
}

fn seed_drill_bits() -> Vec<DrillBit> {
    [
        ("SN-B555", "PDC 150mm"),
        ("SN-B556", "PDC 150mm"),
        ("SN-C221", "Tricone 200mm"),
        ("SN-C222", "Tricone 200mm"),
        ("SN-D100", "Diamond Core 100mm"),
    ]
    .into_iter()
    .map(|(serial, bit_type)| DrillBit {
        id: DrillBitId::new(),
        serial_number: serial.to_string(),
        bit_type: bit_type.to_string(),
        status: DrillBitStatus::Available,
    })
    .collect()
}
