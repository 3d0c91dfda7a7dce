use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::id::DrillBitId;

/// Discriminant of an activity block.
///
/// Serialized as the `activity_type` column value (`"DRILLING"` / `"STANDBY"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    Drilling,
    Standby,
}

impl ActivityKind {
    pub const ALL: [Self; 2] = [Self::Drilling, Self::Standby];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drilling => "DRILLING",
            Self::Standby => "STANDBY",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRILLING" => Ok(Self::Drilling),
            "STANDBY" => Ok(Self::Standby),
            other => Err(ParseError::UnknownActivityType(other.to_string())),
        }
    }
}

/// Why the rig stood idle. Closed set; serialized by its display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandbyReason {
    #[serde(rename = "Weather Delay")]
    WeatherDelay,
    #[serde(rename = "Client Delay")]
    ClientDelay,
    #[serde(rename = "Equipment Maintenance")]
    EquipmentMaintenance,
    #[serde(rename = "Safety Issue")]
    SafetyIssue,
    #[serde(rename = "Waiting on Materials")]
    WaitingOnMaterials,
    #[serde(rename = "Break Time")]
    BreakTime,
}

impl StandbyReason {
    /// Every reason, in the order they are offered for selection.
    pub const ALL: [Self; 6] = [
        Self::WeatherDelay,
        Self::ClientDelay,
        Self::EquipmentMaintenance,
        Self::SafetyIssue,
        Self::WaitingOnMaterials,
        Self::BreakTime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::WeatherDelay => "Weather Delay",
            Self::ClientDelay => "Client Delay",
            Self::EquipmentMaintenance => "Equipment Maintenance",
            Self::SafetyIssue => "Safety Issue",
            Self::WaitingOnMaterials => "Waiting on Materials",
            Self::BreakTime => "Break Time",
        }
    }
}

impl fmt::Display for StandbyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StandbyReason {
    type Err = ParseError;

    /// Parses a display label. Surrounding whitespace is ignored; matching is exact otherwise.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.is_empty() {
            return Err(ParseError::EmptyStandbyReason);
        }
        Self::ALL
            .into_iter()
            .find(|reason| reason.label() == label)
            .ok_or_else(|| ParseError::UnknownStandbyReason(label.to_string()))
    }
}

/// The variant-specific payload of an accepted block.
///
/// Each variant carries exactly its own required fields; a drilling block can
/// never hold a standby reason and vice versa. Serialized internally tagged on
/// `activity_type` so it flattens into the block row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "activity_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Activity {
    /// Depth interval in meters plus the bit that cut it.
    Drilling {
        start_depth: f64,
        end_depth: f64,
        drill_bit_id: DrillBitId,
    },
    Standby { standby_reason: StandbyReason },
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Self::Drilling { .. } => ActivityKind::Drilling,
            Self::Standby { .. } => ActivityKind::Standby,
        }
    }

    /// Meters advanced by this activity (0 for standby).
    pub fn meters(&self) -> f64 {
        match self {
            Self::Drilling {
                start_depth,
                end_depth,
                ..
            } => end_depth - start_depth,
            Self::Standby { .. } => 0.0,
        }
    }

    pub fn drill_bit(&self) -> Option<&DrillBitId> {
        match self {
            Self::Drilling { drill_bit_id, .. } => Some(drill_bit_id),
            Self::Standby { .. } => None,
        }
    }

    /// `(start_depth, end_depth)` for drilling, `None` for standby.
    pub fn depth_range(&self) -> Option<(f64, f64)> {
        match self {
            Self::Drilling {
                start_depth,
                end_depth,
                ..
            } => Some((*start_depth, *end_depth)),
            Self::Standby { .. } => None,
        }
    }
}
