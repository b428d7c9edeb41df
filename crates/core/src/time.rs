//! Timestamps for aggregate lifecycles.

use chrono::{DateTime, Duration, SubsecRound, Utc};

/// Current instant, truncated to microseconds (storage precision).
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// An instant strictly later than `previous`.
///
/// Uses the wall clock when it has moved past `previous`; otherwise steps one
/// microsecond forward so `updated_at` is monotonic per aggregate.
pub fn next_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let current = now();
    if current > previous {
        current
    } else {
        previous + Duration::microseconds(1)
    }
}
