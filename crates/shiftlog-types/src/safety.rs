use serde::{Deserialize, Serialize};
use std::fmt;

/// Mandatory pre-shift safety checks. Every item must be confirmed individually
/// before logging may begin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyCheckItem {
    Ppe,
    Equipment,
    Hazards,
    Emergency,
}

impl SafetyCheckItem {
    pub const ALL: [Self; 4] = [Self::Ppe, Self::Equipment, Self::Hazards, Self::Emergency];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ppe => "PPE Equipment Worn",
            Self::Equipment => "Equipment Inspected",
            Self::Hazards => "Hazards Identified",
            Self::Emergency => "Emergency Procedures Known",
        }
    }

    /// What the crew is attesting to.
    pub fn detail(&self) -> &'static str {
        match self {
            Self::Ppe => "Hard hat, gloves, safety boots, hi-vis",
            Self::Equipment => "Rig systems operational and safe",
            Self::Hazards => "Work area assessed for risks",
            Self::Emergency => "Exit routes and first aid location confirmed",
        }
    }

    /// Position in [`Self::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SafetyCheckItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
