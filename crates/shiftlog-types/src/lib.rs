pub mod activity;
pub mod block;
pub mod catalog;
pub mod error;
pub mod id;
pub mod safety;
pub mod shift;

pub use activity::{Activity, ActivityKind, StandbyReason};
pub use block::{ActivityBlock, NewBlock};
pub use catalog::{CrewMember, DrillBit, DrillBitStatus, Rig};
pub use error::ParseError;
pub use id::{BlockId, CrewMemberId, DrillBitId, RigId, ShiftId};
pub use safety::SafetyCheckItem;
pub use shift::{LifecycleState, Shift, ShiftStatus};
