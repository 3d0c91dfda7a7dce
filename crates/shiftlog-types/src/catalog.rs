//! Read-only reference records owned by the external catalog.
//!
//! The ledger only ever holds references to these; it never creates,
//! updates or retires them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::{CrewMemberId, DrillBitId, RigId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rig {
    pub id: RigId,
    /// Display name, e.g. "Rig 001 (Comacchio)".
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: CrewMemberId,
    pub name: String,
    /// Crew role, e.g. "Lead Driller" or "Second Man".
    pub role: String,
}

/// Availability of a drill bit in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrillBitStatus {
    Available,
    #[serde(rename = "In Use")]
    InUse,
    Retired,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillBit {
    pub id: DrillBitId,
    pub serial_number: String,
    /// Bit model, e.g. "PDC 150mm".
    #[serde(rename = "type")]
    pub bit_type: String,
    pub status: DrillBitStatus,
}

impl DrillBit {
    pub fn is_available(&self) -> bool {
        self.status == DrillBitStatus::Available
    }
}

impl fmt::Display for Rig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for CrewMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.role)
    }
}

impl fmt::Display for DrillBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.serial_number, self.bit_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drill_bit_uses_type_column_and_spaced_status() {
        let bit = DrillBit {
            id: DrillBitId::new(),
            serial_number: "SN-B555".into(),
            bit_type: "PDC 150mm".into(),
            status: DrillBitStatus::InUse,
        };
        let value = serde_json::to_value(&bit).unwrap();
        assert_eq!(value["type"], "PDC 150mm");
        assert_eq!(value["status"], "In Use");
        assert!(!bit.is_available());
        assert_eq!(bit.to_string(), "SN-B555 (PDC 150mm)");
    }

    #[test]
    fn crew_member_display_includes_role() {
        let crew = CrewMember {
            id: CrewMemberId::new(),
            name: "John Smith".into(),
            role: "Lead Driller".into(),
        };
        assert_eq!(crew.to_string(), "John Smith (Lead Driller)");
    }
}
