use shiftlog_types::Activity;

use crate::error::BlockViolation;

use super::shape::Shape;

/// Drilling must strictly advance depth and reference a bit. Standby passes
/// through unchanged. Produces the typed activity on success.
///
/// The interval is checked before the bit so a zero-length entry reports the
/// depth problem even when the bit is also missing.
pub(crate) fn check(shape: Shape) -> Result<Activity, BlockViolation> {
    match shape {
        Shape::Drilling {
            start_depth,
            end_depth,
            drill_bit_id,
        } => {
            check_interval(start_depth, end_depth)?;
            let drill_bit_id = drill_bit_id.ok_or(BlockViolation::MissingDrillBit)?;
            Ok(Activity::Drilling {
                start_depth,
                end_depth,
                drill_bit_id,
            })
        }
        Shape::Standby { reason } => Ok(Activity::Standby {
            standby_reason: reason,
        }),
    }
}

pub(crate) fn check_interval(start_depth: f64, end_depth: f64) -> Result<(), BlockViolation> {
    if end_depth <= start_depth {
        return Err(BlockViolation::NonPositiveInterval {
            start_depth,
            end_depth,
        });
    }
    Ok(())
}
