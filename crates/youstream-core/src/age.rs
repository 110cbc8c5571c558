//! Relative "time since publication" labels for video cards.
//!
//! Pure functions of `(published_at, now)` so they can be tested without a
//! clock or a renderer.

use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Which bucket a publication age falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBucket {
    Today,
    Days(i64),
    Weeks(i64),
    Months(i64),
    Years(i64),
}

impl AgeBucket {
    /// Bucket an age expressed in whole (rounded-up) days
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d <= 1 => AgeBucket::Today,
            d if d <= 7 => AgeBucket::Days(d),
            d if d <= 30 => AgeBucket::Weeks(d / 7),
            d if d <= 365 => AgeBucket::Months(d / 30),
            d => AgeBucket::Years(d / 365),
        }
    }

    pub fn label(&self) -> String {
        match *self {
            AgeBucket::Today => "today".to_string(),
            AgeBucket::Days(n) => plural(n, "day"),
            AgeBucket::Weeks(n) => plural(n, "week"),
            AgeBucket::Months(n) => plural(n, "month"),
            AgeBucket::Years(n) => plural(n, "year"),
        }
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Absolute distance between the two instants in days, rounded up
pub fn age_in_days(published_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (now - published_at).num_milliseconds().abs();
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

/// Label shown next to a video: "today", "3 days ago", "2 weeks ago", ...
pub fn relative_age_label(published_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    AgeBucket::from_days(age_in_days(published_at, now)).label()
}
