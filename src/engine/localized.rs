//! Locale date and time styles

use super::SimpleTime;
use crate::clock::Clock;

impl<C: Clock> SimpleTime<C> {
    /// Medium-style date, e.g. `Jan 21, 2016`
    pub fn format_localized_date(&self, instant: impl Into<Option<i64>>) -> Option<String> {
        let dt = self.local(instant.into()?)?;
        Some(self.profile.format_date(&dt))
    }

    /// Medium date with short time, e.g. `Jan 21, 2016, 5:07 PM`
    pub fn format_localized_date_time(&self, instant: impl Into<Option<i64>>) -> Option<String> {
        let dt = self.local(instant.into()?)?;
        Some(self.profile.format_date_time(&dt))
    }

    /// Short-style time, e.g. `5:07 PM`
    pub fn format_localized_time(&self, instant: impl Into<Option<i64>>) -> Option<String> {
        let dt = self.local(instant.into()?)?;
        Some(self.profile.format_time(&dt))
    }
}
