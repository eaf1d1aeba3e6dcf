use chrono::{DateTime, Utc};
use std::time::Duration;

/// Age of a reading relative to the wall clock, clamped at zero.
pub fn age_of(ts: &DateTime<Utc>) -> Duration {
    (Utc::now() - *ts).to_std().unwrap_or(Duration::ZERO)
}
