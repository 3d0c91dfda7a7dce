//! Shift activity ledger and lifecycle controller.
//!
//! A drill-rig shift is set up, safety-verified, logged as an append-only
//! sequence of drilling and standby blocks, and submitted. This crate owns the
//! rules for that flow; persistence goes through a
//! [`ShiftStore`](shiftlog_store::ShiftStore).
//!
//! - [`invariants`]: pure validation of candidate blocks and loaded ledgers.
//! - [`Ledger`]: numbering and persistence of accepted blocks.
//! - [`aggregation`]: totals recomputed from the ledger on every read.
//! - [`lifecycle`]: which operations each lifecycle state permits.
//! - [`Controller`]: lifecycle transitions against a caller-owned [`ShiftSession`].

pub mod aggregation;
mod candidate;
mod config;
mod controller;
pub mod draft;
mod error;
pub mod invariants;
mod ledger;
pub mod lifecycle;
pub mod queries;
mod session;

pub use aggregation::{ShiftSummary, block_meters, block_minutes, format_duration, summarize};
pub use candidate::BlockCandidate;
pub use config::LedgerConfig;
pub use controller::{Catalog, Controller};
pub use draft::ActivityDraft;
pub use error::{BlockViolation, ErrorKind, GuardFailure, LedgerError, StateError};
pub use invariants::{Accepted, audit, validate};
pub use ledger::Ledger;
pub use lifecycle::{Operation, derive_state, next_state};
pub use session::{SafetyChecklist, ShiftSession};
