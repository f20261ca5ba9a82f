//! Elapsed-time buckets for "N units ago" phrasing

use std::fmt;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;
// Mean Gregorian month and year
const MONTH_MS: i64 = 2_629_746_000;
const YEAR_MS: i64 = 12 * MONTH_MS;

/// Largest unit first
const BUCKETS: [(TimeUnit, i64); 6] = [
    (TimeUnit::Year, YEAR_MS),
    (TimeUnit::Month, MONTH_MS),
    (TimeUnit::Week, WEEK_MS),
    (TimeUnit::Day, DAY_MS),
    (TimeUnit::Hour, HOUR_MS),
    (TimeUnit::Minute, MINUTE_MS),
];

/// Unit of a humanized duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    /// Anything under a minute
    Moments,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// Singular English name
    pub const fn name(self) -> &'static str {
        match self {
            TimeUnit::Moments => "moment",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }
}

/// A humanized elapsed duration, e.g. 5 minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeSpan {
    pub quantity: i64,
    pub unit: TimeUnit,
}

impl RelativeSpan {
    /// Pick the largest unit with a whole quantity of at least one.
    ///
    /// Negative durations count as zero.
    pub fn from_elapsed(elapsed_ms: i64) -> Self {
        let elapsed = elapsed_ms.max(0);
        BUCKETS
            .iter()
            .find(|(_, unit_ms)| elapsed >= *unit_ms)
            .map(|&(unit, unit_ms)| Self {
                quantity: elapsed / unit_ms,
                unit,
            })
            .unwrap_or(Self {
                quantity: 0,
                unit: TimeUnit::Moments,
            })
    }
}

/// English "time ago" wording
impl fmt::Display for RelativeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.unit, self.quantity) {
            (TimeUnit::Moments, _) => f.write_str("moments ago"),
            (unit, 1) => write!(f, "1 {} ago", unit.name()),
            (unit, n) => write!(f, "{} {}s ago", n, unit.name()),
        }
    }
}
