//! Start/end time range validation.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Reasons a start/end pair is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeRangeError {
    /// A bound was left at its zero value.
    #[error("{bound} date unset")]
    DateUnset {
        /// `"start"` or `"end"`.
        bound: &'static str,
    },

    /// Start lies in the future.
    #[error("start date is after current time")]
    StartAfterTimeNow,

    /// Start lies after end.
    #[error("start date after end date")]
    StartAfterEnd,

    /// Start and end are the same instant.
    #[error("start date equals end date")]
    StartEqualsEnd,
}

/// Zero values: the Unix epoch (chrono's default) and the minimum instant.
fn is_unset(t: &DateTime<Utc>) -> bool {
    *t == DateTime::<Utc>::UNIX_EPOCH || *t == DateTime::<Utc>::MIN_UTC
}

/// Validate a historical time range.
///
/// Checks run in order: both bounds set, start not in the future, start
/// not after end, start not equal to end.
pub fn start_end_time_check(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), TimeRangeError> {
    if is_unset(&start) {
        return Err(TimeRangeError::DateUnset { bound: "start" });
    }
    if is_unset(&end) {
        return Err(TimeRangeError::DateUnset { bound: "end" });
    }
    if start > Utc::now() {
        return Err(TimeRangeError::StartAfterTimeNow);
    }
    if start > end {
        return Err(TimeRangeError::StartAfterEnd);
    }
    if start == end {
        return Err(TimeRangeError::StartEqualsEnd);
    }
    Ok(())
}
