use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use shiftlog_types::{ActivityKind, DrillBitId, StandbyReason};

/// A block as offered by the caller, before validation and numbering.
///
/// Flat on purpose: it mirrors the row shape a logging surface submits, so any
/// combination of fields can be expressed and the validator decides what is
/// acceptable. A blank `drill_bit_id` deserializes as absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockCandidate {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub activity_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_depth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_depth: Option<f64>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub drill_bit_id: Option<DrillBitId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standby_reason: Option<String>,
}

impl BlockCandidate {
    pub fn drilling(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        start_depth: f64,
        end_depth: f64,
        drill_bit_id: Option<DrillBitId>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            activity_type: ActivityKind::Drilling.as_str().to_string(),
            start_depth: Some(start_depth),
            end_depth: Some(end_depth),
            drill_bit_id,
            standby_reason: None,
        }
    }

    /// Standby candidate with a free-form reason label; the validator checks it
    /// against the fixed reason set.
    pub fn standby(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            activity_type: ActivityKind::Standby.as_str().to_string(),
            start_depth: None,
            end_depth: None,
            drill_bit_id: None,
            standby_reason: Some(reason.into()),
        }
    }

    pub fn standby_for(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        reason: StandbyReason,
    ) -> Self {
        Self::standby(start_time, end_time, reason.label())
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<DrillBitId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(id) => id.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
