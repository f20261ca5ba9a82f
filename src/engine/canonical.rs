//! Canonical UTC and custom-pattern strings

use chrono::DateTime;
use tracing::debug;

use super::SimpleTime;
use crate::clock::Clock;
use crate::locale::cldr;
use crate::pattern::Pattern;

impl<C: Clock> SimpleTime<C> {
    /// Render an instant in the configured pattern, always in UTC and with
    /// locale-independent symbols. `None` yields `None`.
    pub fn to_utc_string(&self, instant: impl Into<Option<i64>>) -> Option<String> {
        let dt = DateTime::from_timestamp_millis(instant.into()?)?;
        Some(self.config.pattern().format(&dt, cldr::root()))
    }

    /// The current time as a canonical UTC string
    pub fn current_time_utc_string(&self) -> String {
        self.to_utc_string(self.current_time_millis()).unwrap_or_default()
    }

    /// Render an instant in an ad hoc pattern, with the configured locale
    /// and timezone. `None` or an invalid pattern yields `None`.
    pub fn format_custom(&self, instant: impl Into<Option<i64>>, pattern: &str) -> Option<String> {
        let instant = instant.into()?;
        let pattern = Pattern::compile(pattern)
            .map_err(|err| debug!(pattern, %err, "invalid format pattern"))
            .ok()?;
        self.format_with(instant, &pattern)
    }

    /// Render an instant in a precompiled pattern, with the configured locale
    /// and timezone
    pub fn format_with(
        &self,
        instant: impl Into<Option<i64>>,
        pattern: &Pattern,
    ) -> Option<String> {
        let dt = self.local(instant.into()?)?;
        Some(pattern.format(&dt, self.profile.locale_data()))
    }
}
