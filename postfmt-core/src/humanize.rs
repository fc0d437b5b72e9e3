//! Relative timestamps for listings ("3 hours ago").

use chrono::{DateTime, Utc};

/// Describes how long before `now` the instant `then` was.
///
/// More than a day is counted in whole days, two hours or more in whole hours,
/// anything shorter in minutes. Instants in the future read as "0 minutes ago".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds().max(0);
    let hours = seconds as f64 / 3600.0;

    if hours > 24.0 {
        plural((hours / 24.0) as i64, "day")
    } else if hours >= 2.0 {
        plural(hours as i64, "hour")
    } else {
        plural(seconds / 60, "minute")
    }
}

/// [`time_ago`] measured against the current time.
pub fn time_ago_from_now(then: DateTime<Utc>) -> String {
    time_ago(then, Utc::now())
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}
