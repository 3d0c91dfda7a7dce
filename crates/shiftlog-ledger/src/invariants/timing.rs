use chrono::{DateTime, Utc};

use crate::error::BlockViolation;

/// End time may equal start time but not precede it.
pub(crate) fn check(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Result<(), BlockViolation> {
    if end_time < start_time {
        return Err(BlockViolation::EndBeforeStart {
            start_time,
            end_time,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn zero_length_span_passes() {
        let now = Utc::now();
        assert_eq!(check(now, now), Ok(()));
    }

    #[test]
    fn reversed_span_reports_end_before_start() {
        let now = Utc::now();
        let earlier = now - Duration::minutes(1);
        assert_eq!(
            check(now, earlier),
            Err(BlockViolation::EndBeforeStart {
                start_time: now,
                end_time: earlier,
            })
        );
    }
}
